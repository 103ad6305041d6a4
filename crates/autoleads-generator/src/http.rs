//! Shared HTTP response helpers for the generation client.
//!
//! Centralizes the status-code check (non-success → [`GeneratorError::Api`])
//! so the client stays focused on request construction and body mapping.

use crate::error::GeneratorError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. The body of a failed response
/// is kept as the error message; the API sends `{success: false, message}`
/// with 4xx/5xx statuses, which still counts as a transport failure.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GeneratorError> {
    if !resp.status().is_success() {
        return Err(GeneratorError::Api {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
