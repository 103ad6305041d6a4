//! Store error types.

use thiserror::Error;

/// Errors that can occur when talking to the hosted table store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store URL could not be parsed.
    #[error("invalid store URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The store host did not resolve.
    #[error("DNS resolution failed for host '{host}': {message}")]
    Dns { host: String, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store error ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error description decoded from the response body.
        message: String,
    },

    /// The store answered 2xx with a body of an unexpected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}
