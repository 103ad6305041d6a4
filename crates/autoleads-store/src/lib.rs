//! # autoleads-store
//!
//! Client for the hosted table store, spoken to over its PostgREST API
//! (`{url}/rest/v1/{table}`).
//!
//! The same [`StoreClient`] is both ends of the pipeline:
//! - [`TopicSource`](autoleads_core::TopicSource): reads every row of the
//!   input table, after an early DNS check of the store host
//! - [`ResultSink`](autoleads_core::ResultSink): appends one result record to
//!   the output table
//!
//! Neither side propagates errors to the driver. Fetch failures become an
//! empty topic list; insert failures become `false`. Both are logged.

mod dns;
mod error;
mod rest;
mod results;
mod topics;

pub use dns::{resolve, store_host};
pub use error::StoreError;

use std::time::Duration;

use autoleads_config::StoreConfig;

/// Upper bound for any single store request.
pub const STORE_TIMEOUT: Duration = Duration::from_secs(120);

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the input and output tables.
pub struct StoreClient {
    http: reqwest::Client,
    url: String,
    key: String,
    input_table: String,
    output_table: String,
    select: String,
}

impl StoreClient {
    /// Create a store client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("autoleads/", env!("CARGO_PKG_VERSION")))
            .timeout(STORE_TIMEOUT)
            .build()?;
        Ok(Self::with_http(http, config))
    }

    /// Wrap an existing `reqwest::Client`. The caller owns its timeout.
    #[must_use]
    pub fn with_http(http: reqwest::Client, config: &StoreConfig) -> Self {
        Self {
            http,
            url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
            input_table: config.input_table.clone(),
            output_table: config.output_table.clone(),
            select: config.select.clone(),
        }
    }

    #[must_use]
    pub fn input_table(&self) -> &str {
        &self.input_table
    }

    #[must_use]
    pub fn output_table(&self) -> &str {
        &self.output_table
    }

    /// REST endpoint of `table`.
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, urlencoding::encode(table))
    }

    /// Attach the access key the way the store expects it: as `apikey` and as
    /// a bearer token.
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("apikey", &self.key).bearer_auth(&self.key)
    }
}
