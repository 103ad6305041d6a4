//! # autoleads-generator
//!
//! HTTP client for the lead generation API.
//!
//! One call per topic: `GET {base_url}/api/generate?topic={percent-encoded}`
//! with a 45 second timeout. The API answers
//! `{success: bool, generated_data?: object, message?: string}`; the structured
//! failure lives in the body, not in the status code.
//!
//! [`GeneratorClient::generate`] never returns an error. Transport failures and
//! `success: false` bodies both come back as [`Generation::Failure`].

mod error;
mod http;

pub use error::GeneratorError;

use std::time::Duration;

use autoleads_core::{Generation, LeadGenerator};
use serde_json::Value;

use crate::http::check_response;

/// Endpoint path appended to the configured base URL.
pub const ENDPOINT: &str = "/api/generate";

/// Per-request timeout for generation calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Message used when a failed body carries no usable `message`.
const DEFAULT_FAILURE: &str = "Generation failed.";

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the generation API.
pub struct GeneratorClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeneratorClient {
    /// Create a client for the API deployed at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: &str) -> Result<Self, GeneratorError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("autoleads/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_http(http, base_url))
    }

    /// Wrap an existing `reqwest::Client`. The caller owns its timeout.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for `topic`.
    #[must_use]
    pub fn request_url(&self, topic: &str) -> String {
        format!(
            "{}{ENDPOINT}?topic={}",
            self.base_url,
            urlencoding::encode(topic)
        )
    }

    /// Issue the request and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the request fails, times out, the API
    /// returns a non-success status, or the body is not JSON.
    pub async fn request(&self, topic: &str) -> Result<Value, GeneratorError> {
        let url = self.request_url(topic);
        tracing::debug!(%url, "calling generation API");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json::<Value>().await?)
    }

    /// Generate lead content for one topic.
    pub async fn generate(&self, topic: &str) -> Generation {
        tracing::info!(topic, "-> Calling API for topic");

        match self.request(topic).await {
            Ok(body) => interpret_body(body),
            Err(error) => {
                tracing::warn!(%error, "HTTP request failed");
                Generation::Failure(format!("HTTP Request Failed: {error}"))
            }
        }
    }
}

impl LeadGenerator for GeneratorClient {
    async fn generate(&self, topic: &str) -> Generation {
        Self::generate(self, topic).await
    }
}

/// Map a decoded 2xx body onto a [`Generation`].
///
/// Only a literal `true` in `success` counts as success. Anything else takes
/// the body's `message` when it is a non-empty string.
fn interpret_body(mut body: Value) -> Generation {
    if body.get("success") == Some(&Value::Bool(true)) {
        let payload = body
            .get_mut("generated_data")
            .map(Value::take)
            .unwrap_or(Value::Null);
        return Generation::Success(payload);
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty());
    tracing::warn!(
        message = message.unwrap_or("Unknown error"),
        "API error (success flag false)"
    );
    Generation::Failure(message.unwrap_or(DEFAULT_FAILURE).to_string())
}
