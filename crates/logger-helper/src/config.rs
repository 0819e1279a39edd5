//! Configuration loading.
//!
//! A logger can be described in TOML:
//!
//! ```toml
//! level = "debug"
//!
//! [formats]
//! call_log_format = "{callable}:{args}"
//! argument_format = "{name}={value}"
//! argument_separator = ","
//! ```
//!
//! Omitted keys fall back to [`Formats::default`]. Every template is validated
//! against the tokens of its slot when the configuration is loaded.

use crate::error::LoggerError;
use crate::format::Formats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` (case-insensitive).
    pub level: String,
    pub formats: Formats,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            formats: Formats::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, LoggerError> {
        let config: LoggerConfig =
            toml::from_str(content).map_err(|e| LoggerError::LoadConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LoggerError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LoggerError::LoadConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), LoggerError> {
        self.level()?;
        self.formats.validate()
    }

    pub fn level(&self) -> Result<Level, LoggerError> {
        self.level
            .parse::<Level>()
            .map_err(|_| LoggerError::LoadConfig(format!("unknown log level {:?}", self.level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LoggerConfig::from_toml_str("").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_partial_formats() {
        let config = LoggerConfig::from_toml_str(
            r#"
            level = "WARN"

            [formats]
            call_log_format = "{callable}:{args}"
            argument_separator = ","
            "#,
        )
        .unwrap();
        assert_eq!(config.level().unwrap(), Level::WARN);
        assert_eq!(config.formats.call_log_format, "{callable}:{args}");
        assert_eq!(config.formats.argument_separator, ",");
        assert_eq!(config.formats.argument_format, "{name} = {value}");
    }

    #[test]
    fn test_rejects_bad_level() {
        let err = LoggerConfig::from_toml_str(r#"level = "loud""#).unwrap_err();
        assert!(matches!(err, LoggerError::LoadConfig(_)));
    }

    #[test]
    fn test_rejects_bad_template() {
        let err = LoggerConfig::from_toml_str(
            r#"
            [formats]
            return_log_format = "{result}"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LoggerError::Configuration { .. }));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = LoggerConfig::from_toml_str("level = ").unwrap_err();
        assert!(matches!(err, LoggerError::LoadConfig(_)));
    }
}
