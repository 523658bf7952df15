//! Application configuration.
//!
//! All fields have defaults; a JSON file may override any subset of them.

use crate::list::window::{DEFAULT_BUFFER_ROWS, DEFAULT_ROW_HEIGHT};
use crate::list::ListConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Number of synthetic users to generate at startup
    pub record_count: usize,
    /// Seed for the synthetic data source
    pub seed: u64,
    /// Height of one list row in points
    pub row_height: f32,
    /// Rows kept realized beyond each viewport edge
    pub buffer_rows: usize,
    pub toast_duration_ms: u64,
    /// Background threads fetching images
    pub image_workers: usize,
    pub image_timeout_secs: u64,
    /// Log spec understood by flexi_logger (e.g. "info", "usercards=debug")
    pub log_level: String,
    /// Initial window size [width, height]
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            record_count: 100,
            seed: 0,
            row_height: DEFAULT_ROW_HEIGHT,
            buffer_rows: DEFAULT_BUFFER_ROWS,
            toast_duration_ms: 2000,
            image_workers: 4,
            image_timeout_secs: 10,
            log_level: "info".to_string(),
            window_size: [420.0, 820.0],
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional JSON file.
    ///
    /// `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.row_height > 0.0, "row_height must be positive, got {}", self.row_height);
        anyhow::ensure!(self.image_workers > 0, "image_workers must be at least 1");
        Ok(())
    }

    pub fn list_config(&self) -> ListConfig {
        ListConfig {
            row_height: self.row_height,
            buffer_rows: self.buffer_rows,
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_gives_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.record_count, 100);
    }

    #[test]
    fn test_partial_json_overrides_only_given_fields() {
        let config = AppConfig::from_json(r#"{ "record_count": 5, "buffer_rows": 1 }"#).unwrap();

        assert_eq!(config.record_count, 5);
        assert_eq!(config.buffer_rows, 1);
        assert_eq!(config.seed, 0);
        assert_eq!(config.list_config().row_height, DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_json(r#"{ "row_height": 0.0 }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "image_workers": 0 }"#).is_err());
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 7, "log_level": "debug" }}"#).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
