//! CSV file reader with type inference

use crate::reader::{IoError, IoResult, TableReader};
use crate::schema::CellValue;
use crate::table::Table;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell spellings treated as missing values by default
pub const DEFAULT_MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-"];

/// Options for parsing delimited text
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Whether the first record holds column names
    pub has_header: bool,
    /// Trim surrounding whitespace from cells before parsing
    pub trim: bool,
    /// Cell spellings that mean "no value"
    pub missing_markers: Vec<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            trim: true,
            missing_markers: DEFAULT_MISSING_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CsvOptions {
    /// Classify a raw cell as a number, text, or missing value
    pub fn parse_cell(&self, raw: &str) -> CellValue {
        let value = if self.trim { raw.trim() } else { raw };

        if self.missing_markers.iter().any(|m| m == value) {
            return CellValue::Missing;
        }

        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => CellValue::Number(number),
            // "inf" and friends parse, but are not usable values
            Ok(_) => CellValue::Missing,
            Err(_) => CellValue::Text(value.to_string()),
        }
    }
}

/// CSV file reader
pub struct CsvReader {
    path: String,
    options: CsvOptions,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, CsvOptions::default())
    }

    /// Open a CSV file with options
    pub fn open_with_options(path: &str, options: CsvOptions) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        Ok(Self {
            path: path.to_string(),
            options,
        })
    }

    /// Parse a table from any byte source
    pub fn read_from<R: Read>(source: R, options: &CsvOptions) -> IoResult<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(options.has_header)
            .from_reader(source);

        let mut headers: Option<Vec<String>> = if options.has_header {
            Some(
                reader
                    .headers()?
                    .iter()
                    .map(|s| s.trim().to_string())
                    .collect(),
            )
        } else {
            None
        };

        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            if headers.is_none() {
                // Generate column names from the first record's width
                headers = Some((0..record.len()).map(|i| format!("col_{}", i)).collect());
            }
            rows.push(record.iter().map(|cell| options.parse_cell(cell)).collect());
        }

        let headers = headers.unwrap_or_default();
        if headers.is_empty() {
            return Err(IoError::InvalidFormat("no columns found".to_string()));
        }

        let table = Table::new(headers, rows)?;
        tracing::debug!(
            rows = table.num_rows(),
            columns = table.num_columns(),
            "parsed delimited table"
        );
        Ok(table)
    }
}

impl TableReader for CsvReader {
    fn read_table(&self) -> IoResult<Table> {
        let file = File::open(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let table = Self::read_from(BufReader::new(file), &self.options)?;
        tracing::info!(path = %self.path, rows = table.num_rows(), "loaded table");
        Ok(table)
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn parse(text: &str) -> Table {
        CsvReader::read_from(text.as_bytes(), &CsvOptions::default()).unwrap()
    }

    #[test]
    fn test_parse_cell_kinds() {
        let options = CsvOptions::default();
        assert_eq!(options.parse_cell(" 2.5 "), CellValue::Number(2.5));
        assert_eq!(options.parse_cell("-3"), CellValue::Number(-3.0));
        assert_eq!(options.parse_cell(""), CellValue::Missing);
        assert_eq!(options.parse_cell("NA"), CellValue::Missing);
        assert_eq!(options.parse_cell("inf"), CellValue::Missing);
        assert_eq!(options.parse_cell("abc"), CellValue::Text("abc".to_string()));
    }

    #[test]
    fn test_infer_column_types() {
        let table = parse("x,name,blank\n1,a,\n2.5,b,NA\n");
        let columns = &table.schema().columns;
        assert_eq!(columns[0].dtype, ColumnType::Numeric);
        assert_eq!(columns[1].dtype, ColumnType::Text);
        assert_eq!(columns[2].dtype, ColumnType::Empty);
    }

    #[test]
    fn test_missing_cells_preserved_in_place() {
        let table = parse("x,y\n1,\n,2\n3,4\n");
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.cell(0, "y"), Some(&CellValue::Missing));
        assert_eq!(table.cell(1, "x"), Some(&CellValue::Missing));
        assert_eq!(table.rows()[2].index, 2);
    }

    #[test]
    fn test_no_header_generates_names() {
        let options = CsvOptions {
            has_header: false,
            ..CsvOptions::default()
        };
        let table = CsvReader::read_from("1,2\n3,4\n".as_bytes(), &options).unwrap();
        assert_eq!(table.column_names(), vec!["col_0", "col_1"]);
        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn test_ragged_record_is_an_error() {
        let result = CsvReader::read_from("x,y\n1,2\n3\n".as_bytes(), &CsvOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let err = CsvReader::open("/definitely/not/here.csv").err().unwrap();
        assert!(matches!(err, IoError::FileNotFound(_)));
    }
}
