//! In-memory table
//!
//! A `Table` is an ordered list of rows sharing one schema. Each row keeps
//! the position it had in the loaded file so that derived tables (filters)
//! still report where their rows came from.

use crate::reader::{IoError, IoResult};
use crate::schema::{CellValue, ColumnDescriptor, ColumnType, TableSchema};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Original 0-based position in the loaded table
    pub index: usize,

    /// One cell per schema column
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Cell at a column position
    pub fn cell(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// Immutable rectangular table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    schema: TableSchema,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from column names and row cells.
    ///
    /// Column types are inferred from the cells. Rows are indexed by their
    /// position in `rows`.
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<CellValue>>) -> IoResult<Self> {
        let names: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(IoError::DuplicateColumn(name.clone()));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(IoError::RaggedRow {
                    row: index,
                    expected: names.len(),
                    actual: row.len(),
                });
            }
        }

        let descriptors = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let dtype = ColumnType::infer(rows.iter().map(|r| &r[i]));
                ColumnDescriptor::new(name, dtype)
            })
            .collect();

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, cells)| Row { index, cells })
            .collect();

        Ok(Self {
            schema: TableSchema::new(descriptors),
            rows,
        })
    }

    /// Build a single-column numeric table, `None` entries becoming missing cells
    pub fn from_numeric_column(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let name = name.into();
        let rows: Vec<Row> = values
            .iter()
            .enumerate()
            .map(|(index, v)| Row {
                index,
                cells: vec![CellValue::from(*v)],
            })
            .collect();
        let dtype = ColumnType::infer(rows.iter().map(|r| &r.cells[0]));
        Self {
            schema: TableSchema::new(vec![ColumnDescriptor::new(name, dtype)]),
            rows,
        }
    }

    /// Table schema
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Column names, in order
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.column_names()
    }

    /// Column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.column_index(name)
    }

    /// Rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.num_columns()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at a row position and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.schema.column_index(column)?;
        self.rows.get(row)?.cell(col)
    }

    /// Derive a new table holding the rows that satisfy `keep`.
    ///
    /// The schema, column types and each row's original index are kept as-is.
    pub fn retain_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Row) -> bool,
    {
        Table {
            schema: self.schema.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
