//! Error types for colstat-core
//!
//! Every failure here is an input-validation failure. None of them is fatal:
//! the session keeps its previous state and the caller reports the message.

use colstat_io::IoError;
use thiserror::Error;

/// Main error type for analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The requested column is not part of the table
    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },

    /// A filter bound is not a finite number
    #[error("Invalid filter bound '{value}': expected a finite number")]
    InvalidBound { value: String },

    /// An operation needs a table but none has been loaded
    #[error("No table loaded")]
    NoTable,

    /// Table loading errors
    #[error("Failed to load table: {0}")]
    Io(#[from] IoError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnalysisError {
    pub fn column_not_found(column: impl Into<String>) -> Self {
        AnalysisError::ColumnNotFound {
            column: column.into(),
        }
    }

    pub fn invalid_bound(value: impl Into<String>) -> Self {
        AnalysisError::InvalidBound {
            value: value.into(),
        }
    }
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Cannot read config file {path}: {message}")]
    Read { path: String, message: String },

    /// The contents do not parse
    #[error("Cannot parse config: {0}")]
    Parse(String),

    /// The config could not be written out
    #[error("Cannot serialize config: {0}")]
    Serialize(String),

    /// A value is out of its valid range
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
