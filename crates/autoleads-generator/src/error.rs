//! Generation client error types.

use thiserror::Error;

/// Transport-level failures when calling the generation API.
///
/// These never leave the crate through [`crate::GeneratorClient::generate`];
/// they are folded into a `Generation::Failure` there.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// HTTP transport error (connect, timeout, body read, JSON decode).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("{status} error for url {url}: {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Request URL.
        url: String,
        /// Response body.
        message: String,
    },
}
