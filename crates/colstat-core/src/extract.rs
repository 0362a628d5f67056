//! Column extraction
//!
//! Turns one column of a table into a `NumericSeries`. Missing and text cells
//! are dropped; the remaining values keep their order and original row index.

use crate::error::{AnalysisError, AnalysisResult};
use colstat_io::{CellValue, Table};
use colstat_stats::NumericSeries;

/// Extract the numeric values of `column`
///
/// Fails with `ColumnNotFound` when the column is absent. A column without
/// any numeric cell yields an empty series.
pub fn extract(table: &Table, column: &str) -> AnalysisResult<NumericSeries> {
    let col = table
        .column_index(column)
        .ok_or_else(|| AnalysisError::column_not_found(column))?;

    let series = NumericSeries::from_points(
        table
            .rows()
            .iter()
            .filter_map(|row| row.cell(col)?.as_f64().map(|v| (row.index, v))),
    );

    let dropped = table.num_rows() - series.len();
    if dropped > 0 {
        let missing = table
            .rows()
            .iter()
            .filter(|row| row.cell(col).map_or(true, CellValue::is_missing))
            .count();
        tracing::debug!(
            column,
            missing,
            text = dropped - missing,
            "dropped non-numeric cells"
        );
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colstat_stats::SeriesPoint;

    fn table() -> Table {
        Table::new(
            vec!["x", "label"],
            vec![
                vec![CellValue::Number(4.0), "a".into()],
                vec![CellValue::Missing, "b".into()],
                vec!["n/a".into(), "c".into()],
                vec![CellValue::Number(-1.0), CellValue::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_extract_drops_missing_and_keeps_index() {
        let series = extract(&table(), "x").unwrap();

        assert_eq!(
            series.points(),
            &[
                SeriesPoint { index: 0, value: 4.0 },
                SeriesPoint { index: 3, value: -1.0 },
            ]
        );
    }

    #[test]
    fn test_extract_text_column_is_empty() {
        let series = extract(&table(), "label").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_extract_unknown_column() {
        let err = extract(&table(), "missing_col").unwrap_err();
        assert!(matches!(err, AnalysisError::ColumnNotFound { column } if column == "missing_col"));
    }
}
