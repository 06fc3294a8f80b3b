//! Configuration loading for the credit-score CLI.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.credit-score/config.toml` (user)
//! 3. `/etc/credit-score/config.toml` (system)
//!
//! When no file is found the built-in defaults apply.
//!
//! ```toml
//! [model]
//! path = "/var/lib/credit-score/model.json"
//!
//! [report]
//! format = "json"
//! bar_width = 40
//!
//! [[classes]]
//! name = "Poor"
//! color = "red"
//! description = "High risk."
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ModelSource;
use crate::report::DEFAULT_BAR_WIDTH;
use crate::types::ClassOrder;
use crate::{CreditScoreError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// Class table override, lowest severity first.
    #[serde(default)]
    pub classes: Option<ClassOrder>,
}

/// Model artifact location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Path to the JSON artifact (default: [`ModelSource::default_path`]).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ModelConfig {
    /// The configured path, or the default location.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => ModelSource::default_path(),
        }
    }
}

/// Output format for assessments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Bar width in characters (default: 30).
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            bar_width: default_bar_width(),
        }
    }
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.credit-score/config.toml`
    /// 3. `/etc/credit-score/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CreditScoreError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            CreditScoreError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Class table to use: the override, or the standard five tiers.
    pub fn class_order(&self) -> ClassOrder {
        self.classes.clone().unwrap_or_default()
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(CreditScoreError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".credit-score").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/credit-score/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
