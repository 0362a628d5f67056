//! Schema and cell types for tabular data

use serde::{Deserialize, Serialize};

/// Ordered column layout of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Column descriptors, in file order
    pub columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Inferred data type
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Column data type, inferred from the cells present in the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Every present cell is a finite number
    Numeric,
    /// At least one present cell is text
    Text,
    /// Every cell is missing
    Empty,
}

impl ColumnType {
    /// Infer the type of a column from its cells
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut dtype = ColumnType::Empty;
        for cell in cells {
            match cell {
                CellValue::Text(_) => return ColumnType::Text,
                CellValue::Number(_) => dtype = ColumnType::Numeric,
                CellValue::Missing => {}
            }
        }
        dtype
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// A finite number
    Number(f64),
    /// Free text that does not parse as a number
    Text(String),
    /// Absent value (empty cell or a missing-value marker)
    Missing,
}

impl CellValue {
    /// Build a numeric cell, mapping NaN and infinities to `Missing`
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            CellValue::Number(value)
        } else {
            CellValue::Missing
        }
    }

    /// Numeric value of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_column_lookup() {
        let schema = TableSchema::new(vec![
            ColumnDescriptor::new("x", ColumnType::Numeric),
            ColumnDescriptor::new("label", ColumnType::Text),
        ]);

        assert_eq!(schema.column_index("x"), Some(0));
        assert_eq!(schema.column_index("label"), Some(1));
        assert_eq!(schema.column_index("z"), None);
        assert_eq!(schema.column_names(), vec!["x", "label"]);
    }

    #[test]
    fn test_infer_column_type() {
        let numeric = [CellValue::Number(1.0), CellValue::Missing];
        assert_eq!(ColumnType::infer(&numeric), ColumnType::Numeric);

        let mixed = [CellValue::Number(1.0), CellValue::Text("a".into())];
        assert_eq!(ColumnType::infer(&mixed), ColumnType::Text);

        let empty = [CellValue::Missing, CellValue::Missing];
        assert_eq!(ColumnType::infer(&empty), ColumnType::Empty);
    }

    #[test]
    fn test_non_finite_number_is_missing() {
        assert_eq!(CellValue::number(f64::NAN), CellValue::Missing);
        assert_eq!(CellValue::number(f64::INFINITY), CellValue::Missing);
        assert_eq!(CellValue::from(Some(2.5)), CellValue::Number(2.5));
        assert_eq!(CellValue::from(None::<f64>), CellValue::Missing);
        assert!(CellValue::number(f64::NAN).is_missing());
        assert!(!CellValue::Text("n/a".into()).is_missing());
    }
}
