//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// One or more required keys are still empty after all sources were merged.
    #[error(
        "Missing required configuration: {} (set them in .env, autoleads.toml, or AUTOLEADS_* variables)",
        .keys.join(", ")
    )]
    MissingRequired { keys: Vec<&'static str> },
}
