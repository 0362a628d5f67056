//! Numeric series extracted from a table column

use serde::{Deserialize, Serialize};

/// A value together with the row it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Original 0-based row position
    pub index: usize,
    /// Finite value
    pub value: f64,
}

/// Ordered sequence of finite values with their row positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericSeries {
    points: Vec<SeriesPoint>,
}

impl NumericSeries {
    /// Build a series from `(index, value)` pairs.
    ///
    /// Non-finite values are dropped; order is preserved.
    pub fn from_points(points: impl IntoIterator<Item = (usize, f64)>) -> Self {
        Self {
            points: points
                .into_iter()
                .filter(|(_, v)| v.is_finite())
                .map(|(index, value)| SeriesPoint { index, value })
                .collect(),
        }
    }

    /// Build a series from plain values, indexing them 0..n
    pub fn from_values(values: &[f64]) -> Self {
        Self::from_points(values.iter().copied().enumerate())
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Values in row order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Values in ascending order
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
