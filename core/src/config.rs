//! Dump configuration.
//!
//! Loaded from an optional YAML file and overridden by command-line flags.
//!
//! # Example YAML
//!
//! ```yaml
//! extensions:
//!   - stylx
//!   - style
//! format: json
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputFormat;

/// File extension of ArcGIS Pro style libraries.
pub const DEFAULT_EXTENSION: &str = "stylx";

/// Errors raised while loading a [`DumpConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration contents are unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for one dump run.
///
/// # Examples
///
/// ```
/// use stylx_core::{DumpConfig, OutputFormat};
///
/// let config = DumpConfig::default();
/// assert_eq!(config.extensions, ["stylx"]);
/// assert_eq!(config.format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Extensions (without the leading dot) accepted as input, matched
    /// case-insensitively.
    pub extensions: Vec<String>,
    /// Output format written to stdout.
    pub format: OutputFormat,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            format: OutputFormat::Json,
        }
    }
}

impl DumpConfig {
    /// Loads configuration from a YAML file. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read,
    /// [`ConfigError::YamlError`] if parsing fails, or
    /// [`ConfigError::Invalid`] if no usable extension remains.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(ConfigError::Invalid(
                "at least one non-empty extension is required".to_string(),
            ));
        }
        Ok(())
    }
}
