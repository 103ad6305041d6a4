//! Generation API configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the deployed generation API (e.g., `https://autoleads.vercel.app`).
    /// Legacy variable: `VERCEL_API_URL`.
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    pub(crate) fn missing_keys(&self) -> Vec<&'static str> {
        if self.is_configured() {
            Vec::new()
        } else {
            vec!["api.base_url (VERCEL_API_URL)"]
        }
    }
}
