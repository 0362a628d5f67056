//! Configuration for colstat
//!
//! Centralized settings for report rendering, histogram binning and CSV
//! parsing. Every section has defaults, so a config file only needs the
//! values it changes.

use crate::error::ConfigError;
use colstat_io::csv_reader::{CsvOptions, DEFAULT_MISSING_MARKERS};
use colstat_stats::BinRule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper limit for the number of decimals shown in reports
pub const MAX_PRECISION: usize = 12;

/// Upper limit for a fixed histogram bin count
pub const MAX_BINS: usize = 10_000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColstatConfig {
    /// Report rendering
    pub display: DisplayConfig,
    /// Histogram binning
    pub histogram: HistogramConfig,
    /// Delimited-text parsing
    pub csv: CsvConfig,
}

/// Report rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimals shown for each statistic
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Histogram configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Bin count rule
    pub bins: BinRule,
}

/// CSV parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// Whether the first line holds column names
    pub has_header: bool,
    /// Trim whitespace around cells
    pub trim: bool,
    /// Cell spellings that mean "no value"
    pub missing_markers: Vec<String>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            trim: true,
            missing_markers: DEFAULT_MISSING_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CsvConfig {
    /// Reader options for this configuration
    pub fn to_options(&self) -> Result<CsvOptions, ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::Invalid(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }
        Ok(CsvOptions {
            delimiter: self.delimiter as u8,
            has_header: self.has_header,
            trim: self.trim,
            missing_markers: self.missing_markers.clone(),
        })
    }
}

impl ColstatConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load and validate a config file; `.json` files are read as JSON,
    /// anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "display.precision must be at most {}",
                MAX_PRECISION
            )));
        }

        if let BinRule::Fixed(k) = self.histogram.bins {
            if k == 0 || k > MAX_BINS {
                return Err(ConfigError::Invalid(format!(
                    "histogram.bins must be between 1 and {}",
                    MAX_BINS
                )));
            }
        }

        self.csv.to_options()?;
        Ok(())
    }
}
