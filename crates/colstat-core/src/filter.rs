//! Inclusive range filtering of table rows

use crate::error::{AnalysisError, AnalysisResult};
use colstat_io::Table;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bound with finite ends
///
/// `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterBound {
    min: f64,
    max: f64,
}

impl FilterBound {
    /// Create a bound, rejecting NaN and infinite ends
    pub fn new(min: f64, max: f64) -> AnalysisResult<Self> {
        for end in [min, max] {
            if !end.is_finite() {
                return Err(AnalysisError::invalid_bound(end.to_string()));
            }
        }
        Ok(Self { min, max })
    }

    /// Parse a bound from user-entered text
    pub fn parse(min: &str, max: &str) -> AnalysisResult<Self> {
        Self::new(parse_end(min)?, parse_end(max)?)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies inside the bound
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

fn parse_end(text: &str) -> AnalysisResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AnalysisError::invalid_bound(text)),
    }
}

/// A bound together with the column it applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub column: String,
    pub bound: FilterBound,
}

impl RangeFilter {
    pub fn new(column: impl Into<String>, bound: FilterBound) -> Self {
        Self {
            column: column.into(),
            bound,
        }
    }

    /// Apply this filter to `table`
    pub fn apply(&self, table: &Table) -> AnalysisResult<Table> {
        filter_bound(table, &self.column, &self.bound)
    }
}

/// Keep the rows whose `column` value lies in `[min, max]`
///
/// Rows with a missing or non-numeric value in `column` are dropped. The
/// input table is not modified; every column and the row order are kept.
pub fn filter(table: &Table, column: &str, min: f64, max: f64) -> AnalysisResult<Table> {
    filter_bound(table, column, &FilterBound::new(min, max)?)
}

/// `filter` with an already-validated bound
pub fn filter_bound(table: &Table, column: &str, bound: &FilterBound) -> AnalysisResult<Table> {
    let col = table
        .column_index(column)
        .ok_or_else(|| AnalysisError::column_not_found(column))?;

    let filtered = table.retain_rows(|row| {
        row.cell(col)
            .and_then(|cell| cell.as_f64())
            .is_some_and(|v| bound.contains(v))
    });

    tracing::debug!(
        column,
        min = bound.min,
        max = bound.max,
        kept = filtered.num_rows(),
        total = table.num_rows(),
        "applied range filter"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colstat_io::CellValue;

    fn table() -> Table {
        Table::new(
            vec!["x", "tag"],
            vec![
                vec![CellValue::Number(1.0), "a".into()],
                vec![CellValue::Number(5.0), "b".into()],
                vec![CellValue::Missing, "c".into()],
                vec![CellValue::Number(3.0), "d".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let filtered = filter(&table(), "x", 1.0, 3.0).unwrap();

        let indices: Vec<usize> = filtered.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 3]);
        // Other columns travel with their rows
        assert_eq!(filtered.cell(1, "tag"), Some(&CellValue::Text("d".into())));
    }

    #[test]
    fn test_inverted_bound_is_empty() {
        let filtered = filter(&table(), "x", 3.0, 1.0).unwrap();
        assert!(filtered.is_empty());
        assert_eq!(filtered.column_names(), vec!["x", "tag"]);
    }

    #[test]
    fn test_filter_unknown_column() {
        let err = filter(&table(), "y", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, AnalysisError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        assert!(matches!(
            filter(&table(), "x", f64::NAN, 1.0),
            Err(AnalysisError::InvalidBound { .. })
        ));
        assert!(matches!(
            FilterBound::new(0.0, f64::INFINITY),
            Err(AnalysisError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_parse_bound() {
        let bound = FilterBound::parse(" 1.5", "2e3 ").unwrap();
        assert_eq!((bound.min(), bound.max()), (1.5, 2000.0));

        let err = FilterBound::parse("1", "ten").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidBound { value } if value == "ten"));

        assert!(FilterBound::parse("NaN", "1").is_err());
        assert!(FilterBound::parse("", "1").is_err());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let bound = FilterBound::new(1.0, 3.0).unwrap();
        let filter = RangeFilter::new("x", bound);

        let once = filter.apply(&table()).unwrap();
        let twice = filter.apply(&once).unwrap();
        assert_eq!(once, twice);
    }
}
