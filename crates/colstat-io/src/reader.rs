//! Table reader trait and common types
//!
//! The `TableReader` trait provides a uniform interface for loading a
//! `Table` from the supported file formats.

use crate::table::Table;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for loading a table from a file format
pub trait TableReader: Send + Sync {
    /// Read the whole table
    fn read_table(&self) -> IoResult<Table>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn TableReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension. `.tsv` files use a
/// tab delimiter regardless of the configured one.
#[cfg(feature = "csv")]
pub fn open_file(path: &str, options: &crate::csv_reader::CsvOptions) -> IoResult<BoxedReader> {
    use crate::csv_reader::CsvReader;

    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" | "txt" => Ok(Box::new(CsvReader::open_with_options(path, options.clone())?)),
        "tsv" => {
            let options = crate::csv_reader::CsvOptions {
                delimiter: b'\t',
                ..options.clone()
            };
            Ok(Box::new(CsvReader::open_with_options(path, options)?))
        }
        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
        extensions.push("tsv");
        extensions.push("txt");
    }

    extensions
}
