//! Configuration management for ptag.
//!
//! Parses `ptag.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. A missing config
//! file yields the defaults; an explicit path that does not exist is an
//! error.
//!
//! The `[extension]` section controls the tag extension itself: whether it
//! registers at all, and which header labels the host's metadata parser
//! should match for the tags and filter fields.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ptag.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag extension configuration.
    pub extension: ExtensionConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tag extension configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Whether the extension registers with the host pipeline.
    pub enabled: bool,
    /// Header label for the tags field in the page meta block.
    pub tags_label: String,
    /// Header label for the filter field in the page meta block.
    pub filter_label: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tags_label: "Tags".to_owned(),
            filter_label: "Filter".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from a file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `ptag.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.extension.tags_label, "extension.tags_label")?;
        require_non_empty(&self.extension.filter_label, "extension.filter_label")?;
        Ok(())
    }
}
