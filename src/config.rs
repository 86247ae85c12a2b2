//! Configuration management for the air quality advisor
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AdvisorError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the advisor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Sample data settings
    #[serde(default)]
    pub data: DataConfig,
    /// Search stub settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default request settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Sample data file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path of the CSV file with sample readings
    #[serde(default = "default_sample_csv")]
    pub sample_csv: String,
    /// Number of most recent rows used for trend detection
    #[serde(default = "default_history_window")]
    pub history_window: u32,
}

/// Search stub settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Register the search tool; when off every fetch goes to the sample data
    #[serde(default = "default_search_enabled")]
    pub enabled: bool,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Location used when the user context names none
    #[serde(default = "default_location")]
    pub location: String,
}

// Default value functions
fn default_sample_csv() -> String {
    "data/sample_data.csv".to_string()
}

fn default_history_window() -> u32 {
    7
}

fn default_search_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_location() -> String {
    "Chennai".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sample_csv: default_sample_csv(),
            history_window: default_history_window(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_search_enabled(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // AQI_ADVISOR__DATA__SAMPLE_CSV=... style overrides
        builder = builder.add_source(
            Environment::with_prefix("AQI_ADVISOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AdvisorConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aqi-advisor").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.data.sample_csv.is_empty() {
            self.data.sample_csv = default_sample_csv();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.location.trim().is_empty() {
            self.defaults.location = default_location();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.data.history_window == 0 || self.data.history_window > 365 {
            return Err(AdvisorError::config(
                "History window must be between 1 and 365 rows",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Path of the sample data file
    #[must_use]
    pub fn sample_csv_path(&self) -> PathBuf {
        PathBuf::from(&self.data.sample_csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.data.sample_csv, "data/sample_data.csv");
        assert_eq!(config.data.history_window, 7);
        assert!(config.search.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.defaults.location, "Chennai");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AdvisorConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = AdvisorConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_history_window() {
        let mut config = AdvisorConfig::default();
        config.data.history_window = 1000;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("History window"));
    }

    #[test]
    fn test_zero_history_window_is_rejected() {
        let mut config = AdvisorConfig::default();
        config.data.history_window = 0;
        config.apply_defaults();
        assert_eq!(config.data.history_window, 0);
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("History window"));
    }

    #[test]
    fn test_zero_history_window_in_file_fails_load() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[data]\nhistory_window = 0").unwrap();

        let result = AdvisorConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = AdvisorConfig::default();
        config.data.sample_csv.clear();
        config.defaults.location = "  ".to_string();
        config.apply_defaults();
        assert_eq!(config.data.sample_csv, "data/sample_data.csv");
        assert_eq!(config.defaults.location, "Chennai");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[data]\nsample_csv = \"readings.csv\"\nhistory_window = 3\n\n[search]\nenabled = false\n\n[defaults]\nlocation = \"Delhi\""
        )
        .unwrap();

        let config = AdvisorConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.data.sample_csv, "readings.csv");
        assert_eq!(config.data.history_window, 3);
        assert!(!config.search.enabled);
        assert_eq!(config.defaults.location, "Delhi");
        // Sections absent from the file keep their defaults
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = AdvisorConfig::load_from_path(Some(path)).unwrap();
        let defaults = AdvisorConfig::default();
        assert_eq!(config.data.sample_csv, defaults.data.sample_csv);
        assert_eq!(config.data.history_window, defaults.data.history_window);
        assert_eq!(config.defaults.location, defaults.defaults.location);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AdvisorConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("aqi-advisor"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
