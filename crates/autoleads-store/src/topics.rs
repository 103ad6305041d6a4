//! Topic source: reads the input table.

use autoleads_core::{TopicRow, TopicSource};
use serde_json::Value;

use crate::dns::{resolve, store_host};
use crate::error::StoreError;
use crate::rest::check_response;
use crate::StoreClient;

impl StoreClient {
    /// Query every row of the input table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails, the store rejects it, or
    /// the body is not a JSON array.
    pub async fn query_topics(&self) -> Result<Vec<TopicRow>, StoreError> {
        let url = format!(
            "{}?select={}",
            self.table_url(&self.input_table),
            urlencoding::encode(&self.select)
        );
        tracing::debug!(%url, "querying topics");

        let resp = check_response(self.authorized(self.http.get(&url)).send().await?).await?;
        let body: Value = resp.json().await?;
        rows_from_body(body)
    }

    /// Fetch all topic rows, containing every failure.
    ///
    /// Runs the DNS check first. A host that does not resolve, a failed
    /// query, or a malformed body all yield an empty list.
    pub async fn fetch_topics(&self) -> Vec<TopicRow> {
        match store_host(&self.url) {
            Ok((host, port)) => {
                tracing::info!(%host, "Using store host");
                if let Err(error) = resolve(&host, port).await {
                    tracing::error!(%error, "DNS resolution failed");
                    tracing::error!(
                        "Possible causes: incorrect SUPABASE_URL, no network, or DNS/proxy/firewall blocking"
                    );
                    return Vec::new();
                }
            }
            // Let the query itself surface the problem.
            Err(error) => tracing::debug!(%error, "skipping DNS check"),
        }

        match self.query_topics().await {
            Ok(rows) => {
                tracing::info!(
                    count = rows.len(),
                    table = %self.input_table,
                    "Found topics in store table"
                );
                rows
            }
            Err(error) => {
                tracing::error!(
                    %error,
                    table = %self.input_table,
                    "Error connecting to the store or querying the table"
                );
                Vec::new()
            }
        }
    }
}

impl TopicSource for StoreClient {
    async fn fetch_topics(&self) -> Vec<TopicRow> {
        Self::fetch_topics(self).await
    }
}

/// Accept a JSON array of row objects. Non-object elements are dropped.
fn rows_from_body(body: Value) -> Result<Vec<TopicRow>, StoreError> {
    let Value::Array(items) = body else {
        return Err(StoreError::Malformed(format!(
            "expected a JSON array of rows, got {}",
            kind_of(&body)
        )));
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(fields) => Some(TopicRow::new(fields)),
            other => {
                tracing::warn!(index, kind = kind_of(&other), "dropping non-object topic row");
                None
            }
        })
        .collect())
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
