//! PostgREST response helpers.
//!
//! A store write or read is an error if and only if the status is not 2xx.
//! The body of such a response is the error description: PostgREST sends
//! `{message, code, details, hint}`, gateways in front of it may send plain
//! text.

use serde::Deserialize;

use crate::error::StoreError;

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl PostgrestError {
    fn describe(&self) -> String {
        let mut text = self.message.clone();
        if let Some(code) = &self.code {
            text.push_str(&format!(" (code {code})"));
        }
        if let Some(details) = &self.details {
            text.push_str(&format!("; details: {details}"));
        }
        if let Some(hint) = &self.hint {
            text.push_str(&format!("; hint: {hint}"));
        }
        text
    }
}

/// Turn a non-2xx body into a readable message.
pub(crate) fn describe_error_body(body: &str) -> String {
    serde_json::from_str::<PostgrestError>(body).map_or_else(
        |_| {
            if body.trim().is_empty() {
                "empty response body".to_string()
            } else {
                body.trim().to_string()
            }
        },
        |error| error.describe(),
    )
}

/// Check a store response; non-success becomes [`StoreError::Rejected`].
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::Rejected {
            status: status.as_u16(),
            message: describe_error_body(&body),
        });
    }
    Ok(resp)
}
