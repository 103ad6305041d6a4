//! Hosted table store configuration.

use serde::{Deserialize, Serialize};

/// Default input table holding the topics.
fn default_input_table() -> String {
    "target_industries".to_string()
}

/// Default output table receiving result records.
fn default_output_table() -> String {
    "leads".to_string()
}

/// Default column selection for topic rows.
fn default_select() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`). Legacy variable: `SUPABASE_URL`.
    #[serde(default)]
    pub url: String,

    /// Access key sent as both `apikey` and bearer token.
    /// Legacy variable: `SUPABASE_ANON_KEY`.
    #[serde(default)]
    pub key: String,

    #[serde(default = "default_input_table")]
    pub input_table: String,

    #[serde(default = "default_output_table")]
    pub output_table: String,

    /// `select=` clause used when reading topics.
    #[serde(default = "default_select")]
    pub select: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            input_table: default_input_table(),
            output_table: default_output_table(),
            select: default_select(),
        }
    }
}

impl StoreConfig {
    /// Check if the store has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        self.missing_keys().is_empty()
    }

    pub(crate) fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.url.trim().is_empty() {
            missing.push("store.url (SUPABASE_URL)");
        }
        if self.key.trim().is_empty() {
            missing.push("store.key (SUPABASE_ANON_KEY)");
        }
        missing
    }
}
