//! # autoleads-config
//!
//! Layered configuration loading for autoleads using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AUTOLEADS_*` prefix, `__` as separator)
//! 2. Legacy flat variables (`VERCEL_API_URL`, `SUPABASE_URL`, `SUPABASE_ANON_KEY`)
//! 3. `autoleads.toml` in the working directory (or an explicit file)
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AUTOLEADS_STORE__URL` -> `store.url`,
//! `AUTOLEADS_STORE__OUTPUT_TABLE` -> `store.output_table`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use autoleads_config::LeadsConfig;
//!
//! let config = LeadsConfig::load_with_dotenv(None).expect("config");
//! config.validate().expect("api and store must be configured");
//! println!("reading topics from {}", config.store.input_table);
//! ```

mod api;
mod error;
mod store;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "autoleads.toml";

/// Flat variable names accepted for backwards compatibility, with the config
/// key each one fills.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("VERCEL_API_URL", "api.base_url"),
    ("SUPABASE_URL", "store.url"),
    ("SUPABASE_ANON_KEY", "store.key"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeadsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl LeadsConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading. Does not check required keys either; call
    /// [`Self::validate`] (or one of the `require_*` helpers) afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the working directory (if present) before building
    /// the figment. Variables already set in the process environment win over
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain.
    ///
    /// `config_file` replaces the default `autoleads.toml`. A missing file is
    /// skipped, not an error.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: TOML file
        let path = config_file.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 2: legacy flat variables
        figment = figment.merge(legacy_env());

        // Layer 3: prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("AUTOLEADS_").split("__"))
    }

    /// Check every required key. Missing configuration is fatal at startup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] naming every empty key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut keys = self.api.missing_keys();
        keys.extend(self.store.missing_keys());
        if keys.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingRequired { keys })
        }
    }

    /// Check only the keys needed to call the generation API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if `api.base_url` is empty.
    pub fn require_api(&self) -> Result<&ApiConfig, ConfigError> {
        let keys = self.api.missing_keys();
        if keys.is_empty() {
            Ok(&self.api)
        } else {
            Err(ConfigError::MissingRequired { keys })
        }
    }

    /// Check only the keys needed to reach the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the store URL or key is empty.
    pub fn require_store(&self) -> Result<&StoreConfig, ConfigError> {
        let keys = self.store.missing_keys();
        if keys.is_empty() {
            Ok(&self.store)
        } else {
            Err(ConfigError::MissingRequired { keys })
        }
    }
}

/// Provider for the flat legacy variables, renamed to their config keys.
fn legacy_env() -> Env {
    Env::raw()
        .only(&LEGACY_ENV.map(|(name, _)| name))
        .map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map_or_else(|| Uncased::from(key.as_str()), |(_, path)| Uncased::from(*path))
        })
}
