//! Application configuration.
//!
//! Configuration lives in an optional `config.toml` in the platform data
//! directory. A missing file yields the defaults, which include the
//! built-in sample batch.

use crate::report::exporter::OutputFormat;
use crate::runner::{sample_packages, FailurePolicy, Package};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Output settings
    pub output: OutputSettings,
    /// Batch settings
    pub batch: BatchSettings,
    /// Packages to process, in order
    pub packages: Vec<Package>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            output: OutputSettings::default(),
            batch: BatchSettings::default(),
            packages: sample_packages(),
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Summary format
    pub format: OutputFormat,
}

/// Batch-related settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    /// Behavior when a package fails
    pub on_failure: FailurePolicy,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, falling back to defaults
/// when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;

    tracing::debug!("Saved config to {}", path.display());

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file I/O failed: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file is not valid: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config could not be written: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
