use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{logging::LogConfig, output::OutputConfig};
use crate::validation::ConfigValidator;

/// Locations searched when no configuration file is given explicitly.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/cron-parser.toml", "cron-parser.toml"];

/// Prefix of environment variables overriding the configuration, e.g. `CRON_PARSER__OUTPUT__FORMAT`.
pub const ENV_PREFIX: &str = "CRON_PARSER";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    /// Layers built-in defaults, a TOML file and `CRON_PARSER__*` environment variables.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("output.format", defaults.output.format.to_string())?
            .set_default(
                "output.name_column_width",
                defaults.output.name_column_width as i64,
            )?
            .set_default("logging.level", defaults.logging.level.to_string())?
            .set_default("logging.format", defaults.logging.format.to_string())?;

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("Configuration file does not exist: {}", path));
            }
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Effective configuration as TOML, in the same shape a configuration file uses.
    pub fn to_toml(&self) -> crate::ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogFormat, LogLevel, OutputFormat};
    use std::io::Write;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.name_column_width, 14);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_printed_config_loads_back() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        config.logging.level = LogLevel::Debug;

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("format = \"json\""));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{toml_str}").unwrap();
        let loaded = AppConfig::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_width() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nname_column_width = 4").unwrap();

        let err = AppConfig::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert!(err.downcast_ref::<crate::ConfigError>().is_some());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[output]
format = "json"
name_column_width = 20

[logging]
format = "json"
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.name_column_width, 20);
        assert_eq!(config.logging.format, LogFormat::Json);
        // Not present in the file, falls back to the default.
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = AppConfig::load(Some("/nonexistent/cron-parser.toml"));
        assert!(result.is_err());
    }
}
