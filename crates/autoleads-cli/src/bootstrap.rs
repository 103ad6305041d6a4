use anyhow::Context;
use autoleads_config::LeadsConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the config file, and the environment.
///
/// Required keys are checked per command, not here.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LeadsConfig> {
    if let Some(path) = flags.config.as_deref().filter(|path| !path.exists()) {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }

    LeadsConfig::load_with_dotenv(flags.config.as_deref()).context("failed to load configuration")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(config: Option<std::path::PathBuf>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Text,
            quiet: false,
            verbose: false,
            config,
        }
    }

    #[test]
    fn missing_config_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let error = load_config(&flags(Some(path))).unwrap_err();
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\noutput_table = \"leads_staging\"").unwrap();

        let config = load_config(&flags(Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(config.store.input_table, "target_industries");
        assert_eq!(config.store.output_table, "leads_staging");
    }
}
