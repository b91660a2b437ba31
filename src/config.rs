use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MetadataError, Result};

/// Environment variable naming an alternate config file
pub const CONFIG_PATH_ENV: &str = "QTI_METADATA_CONFIG";
/// Config file read when no override is set
pub const DEFAULT_CONFIG_PATH: &str = "metadata_import.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    pub default_directive: String,
    /// Directory for rolling JSON log files; `None` logs to the console only
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "qti_metadata=info".to_string(),
            directory: None,
            file_prefix: "metadata_import.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Seed the instructor-editable flags before applying assessment entries
    pub seed_editability_defaults: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            seed_editability_defaults: true,
        }
    }
}

impl Config {
    /// Load from `$QTI_METADATA_CONFIG`, falling back to `metadata_import.toml`.
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&config_path).exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            MetadataError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
