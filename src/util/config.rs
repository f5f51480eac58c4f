//! Configuration file support for binmatrix.
//!
//! binmatrix supports two configuration file locations:
//! - Global: `~/.binmatrix/config.toml` - User-wide defaults
//! - Project: `.binmatrix/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builder::events::MessageFormat;

/// binmatrix configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default message format (human, json)
    pub message_format: Option<MessageFormat>,

    /// Use colors in human output
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.message_format.is_some() {
            self.output.message_format = other.output.message_format;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }

    /// Effective message format.
    pub fn message_format(&self) -> MessageFormat {
        self.output.message_format.unwrap_or_default()
    }

    /// Whether colored output is enabled.
    pub fn color(&self) -> bool {
        self.output.color.unwrap_or(true)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.binmatrix/config.toml)
/// 2. Global config (~/.binmatrix/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global binmatrix config directory (~/.binmatrix).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".binmatrix"))
}

/// Get the global config path (~/.binmatrix/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.binmatrix/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".binmatrix").join("config.toml")
}
