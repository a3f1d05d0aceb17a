//! Configuration management and validation.
//!
//! Provides configuration structures for the header markers the decoder
//! recognises, logging, and output rendering. Configuration is layered:
//! built-in defaults, then an optional JSON file, then command-line overrides.

use crate::constants::{
    APP_DIR_NAME, BULLETIN_TYPES, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, FIJI_BULLETIN_TYPE,
    HEADER_PREFIX_WIDTH, ORIGINATING_CENTER,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header markers recognised by the tokenizer and the header validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Bulletin type codes (`ASXX21`, `FSXX21`)
    pub bulletin_types: Vec<String>,

    /// Originating centre code expected after the bulletin type
    pub originating_center: String,

    /// Fiji bulletin type, only ever routed to the header validator
    pub fiji_bulletin_type: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            bulletin_types: BULLETIN_TYPES.iter().map(|s| s.to_string()).collect(),
            originating_center: ORIGINATING_CENTER.to_string(),
            fiji_bulletin_type: FIJI_BULLETIN_TYPE.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Check whether `code` is one of the configured bulletin types
    pub fn is_bulletin_type(&self, code: &str) -> bool {
        self.bulletin_types.iter().any(|t| t == code)
    }

    fn validate(&self) -> Result<()> {
        if self.bulletin_types.is_empty() {
            return Err(Error::configuration(
                "At least one bulletin type must be configured",
            ));
        }

        // The tokenizer compares the first six characters of a line
        for bulletin_type in &self.bulletin_types {
            if bulletin_type.chars().count() != HEADER_PREFIX_WIDTH {
                return Err(Error::configuration(format!(
                    "Bulletin type '{}' must be {} characters",
                    bulletin_type, HEADER_PREFIX_WIDTH
                )));
            }
        }

        if self.originating_center.trim().is_empty() {
            return Err(Error::configuration("Originating centre cannot be empty"));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Output rendering for decoded bulletins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON, one document per bulletin
    #[default]
    Json,
    /// Human-readable summary
    Summary,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decoder: DecoderConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Default configuration file location (`<config dir>/iac-decoder/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with layered approach (defaults -> file)
    ///
    /// An explicit `config_file` must exist. Without one, the default location
    /// is used when present.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.decoder.validate()?;

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}', expected one of {:?}",
                self.logging.level, LEVELS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.decoder.originating_center, "EGRR");
        assert!(config.decoder.is_bulletin_type("ASXX21"));
        assert!(config.decoder.is_bulletin_type("FSXX21"));
        assert!(!config.decoder.is_bulletin_type("ASPS20"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_bulletin_type_width() {
        let mut config = Config::default();
        config.decoder.bulletin_types = vec!["ASXX2".to_string()];
        assert!(config.validate().is_err());

        config.decoder.bulletin_types.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "decoder": {{ "originating_center": "KWBC" }}, "output": {{ "format": "summary" }} }}"#
        )
        .unwrap();

        let config = Config::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.decoder.originating_center, "KWBC");
        assert_eq!(config.decoder.bulletin_types, vec!["ASXX21", "FSXX21"]);
        assert_eq!(config.output.format, OutputFormat::Summary);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_layered(Some(Path::new("/nonexistent/iac/config.json")));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "decoder = 1").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(Error::Serialization { .. })));
    }
}
