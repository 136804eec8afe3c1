//! Configuration management and validation.
//!
//! Provides configuration structures for history retention and report
//! layout. Configuration is layered: built-in defaults, then an optional
//! JSON config file, then command-line overrides applied by the CLI.

use crate::app::services::report_renderer::PageLayout;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HISTORY_CAPACITY, HISTORY_FILE_NAME,
    MAX_HISTORY_CAPACITY,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// History retention settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of uploads kept before the oldest is evicted
    pub capacity: usize,

    /// History snapshot location; the platform data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            file: None,
        }
    }
}

/// Global configuration for the equipment analyzer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,

    /// Report page geometry
    pub report: PageLayout,
}

impl Config {
    /// Set the history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history.capacity = capacity;
        self
    }

    /// Set the history snapshot file
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history.file = Some(path.into());
        self
    }

    /// Set the report page layout
    pub fn with_page_layout(mut self, layout: PageLayout) -> Self {
        self.report = layout;
        self
    }

    /// Default config file location (`<config dir>/equipment-analyzer/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Default history location (`<data dir>/equipment-analyzer/history.json`)
    pub fn default_history_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(HISTORY_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user data directory"))
    }

    /// Configured history file, falling back to the default location
    pub fn history_path(&self) -> Result<PathBuf> {
        match &self.history.file {
            Some(path) => Ok(path.clone()),
            None => Self::default_history_path(),
        }
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("Failed to parse config file {}", path.display()), e)
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, overlaid by `config_file` when given
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every setting
    pub fn validate(&self) -> Result<()> {
        if self.history.capacity == 0 {
            return Err(Error::configuration(
                "History capacity must be greater than 0",
            ));
        }

        if self.history.capacity > MAX_HISTORY_CAPACITY {
            return Err(Error::configuration(format!(
                "History capacity cannot exceed {}",
                MAX_HISTORY_CAPACITY
            )));
        }

        if let Some(file) = &self.history.file {
            if file.as_os_str().is_empty() {
                return Err(Error::configuration("History file path cannot be empty"));
            }
        }

        self.report.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.history.capacity, 5);
        assert!(config.history.file.is_none());
        assert_eq!(config.report, PageLayout::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_history_capacity(3)
            .with_history_file("/tmp/history.json")
            .with_page_layout(PageLayout::default().with_line_height(12.0));

        assert_eq!(config.history.capacity, 3);
        assert_eq!(
            config.history_path().unwrap(),
            PathBuf::from("/tmp/history.json")
        );
        assert_eq!(config.report.line_height, 12.0);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = Config::default().with_history_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_layout() {
        let config =
            Config::default().with_page_layout(PageLayout::default().with_line_height(-1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "history": { "capacity": 8 } }"#).unwrap();

        let config = Config::load_layered(Some(&path)).unwrap();
        assert_eq!(config.history.capacity, 8);
        assert_eq!(config.report, PageLayout::default());
    }

    #[test]
    fn test_invalid_config_file_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "report": { "line_height": 0 } }"#).unwrap();

        assert!(Config::load_layered(Some(&path)).is_err());
    }
}
