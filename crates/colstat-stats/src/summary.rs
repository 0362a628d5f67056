//! Summary statistics for a numeric series
//!
//! Provides the full descriptive record shown for a selected column:
//! - Count, arithmetic / geometric / harmonic / quadratic means
//! - Sample variance and standard deviation
//! - Min, max, range, median
//! - Mode (smallest value among the most frequent ones)

use crate::quantile::median_sorted;
use crate::series::NumericSeries;
use crate::statistic::{Statistic, UndefinedReason};
use serde::{Deserialize, Serialize};

/// Descriptive statistics for a numeric series
///
/// Every field except `count` is a `Statistic`; fields that have no meaning
/// for the input carry an `UndefinedReason` instead of a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: Statistic,
    /// Sample variance (divisor n - 1)
    pub variance: Statistic,
    /// max - min
    pub range: Statistic,
    /// Maximum value
    pub max: Statistic,
    /// Minimum value
    pub min: Statistic,
    /// nth root of the product; requires every value > 0
    pub geometric_mean: Statistic,
    /// n / sum(1/x); requires every value != 0
    pub harmonic_mean: Statistic,
    /// Root mean square
    pub quadratic_mean: Statistic,
    /// Middle value (mean of the two middle values for even n)
    pub median: Statistic,
    /// Square root of the sample variance
    pub std_dev: Statistic,
    /// Most frequent value
    pub mode: Statistic,
}

impl StatisticsRecord {
    /// Compute the record for a series
    pub fn compute(series: &NumericSeries) -> Self {
        Self::from_values(&series.values())
    }

    /// Compute the record from plain values
    ///
    /// Non-finite values are ignored.
    pub fn from_values(data: &[f64]) -> Self {
        let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        if sorted.is_empty() {
            return Self::empty();
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let n = count as f64;

        let min = sorted[0];
        let max = sorted[count - 1];
        let mean = sorted.iter().sum::<f64>() / n;

        let variance = if count < 2 {
            Statistic::undefined(UndefinedReason::InsufficientData)
        } else {
            let sum_sq: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
            Statistic::finite(sum_sq / (n - 1.0))
        };

        let quadratic_mean = (sorted.iter().map(|x| x * x).sum::<f64>() / n).sqrt();

        Self {
            count,
            mean: Statistic::finite(mean),
            variance,
            range: Statistic::finite(max - min),
            max: Statistic::Value(max),
            min: Statistic::Value(min),
            geometric_mean: geometric_mean(&sorted),
            harmonic_mean: harmonic_mean(&sorted),
            quadratic_mean: Statistic::finite(quadratic_mean),
            median: median_sorted(&sorted).map_or(
                Statistic::undefined(UndefinedReason::EmptySeries),
                Statistic::finite,
            ),
            std_dev: variance.map(f64::sqrt),
            mode: mode_sorted(&sorted),
        }
    }

    /// Record for an empty series: count 0, everything else undefined
    pub fn empty() -> Self {
        let undefined = Statistic::undefined(UndefinedReason::EmptySeries);
        Self {
            count: 0,
            mean: undefined,
            variance: undefined,
            range: undefined,
            max: undefined,
            min: undefined,
            geometric_mean: undefined,
            harmonic_mean: undefined,
            quadratic_mean: undefined,
            median: undefined,
            std_dev: undefined,
            mode: undefined,
        }
    }

    /// Labelled fields in display order
    pub fn fields(&self) -> [(&'static str, Statistic); 11] {
        [
            ("Mean", self.mean),
            ("Variance", self.variance),
            ("Range", self.range),
            ("Max", self.max),
            ("Min", self.min),
            ("Geometric mean", self.geometric_mean),
            ("Harmonic mean", self.harmonic_mean),
            ("Quadratic mean", self.quadratic_mean),
            ("Median", self.median),
            ("Std dev", self.std_dev),
            ("Mode", self.mode),
        ]
    }
}

impl Default for StatisticsRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// Geometric mean, evaluated in log space. Zero and negative values both
/// make it undefined.
fn geometric_mean(data: &[f64]) -> Statistic {
    if data.iter().any(|&x| x <= 0.0) {
        return Statistic::undefined(UndefinedReason::NonPositiveValues);
    }
    let log_mean = data.iter().map(|x| x.ln()).sum::<f64>() / data.len() as f64;
    Statistic::finite(log_mean.exp())
}

/// Harmonic mean. Only zero makes it undefined; negative values are allowed.
fn harmonic_mean(data: &[f64]) -> Statistic {
    if data.iter().any(|&x| x == 0.0) {
        return Statistic::undefined(UndefinedReason::ZeroValue);
    }
    let reciprocal_sum: f64 = data.iter().map(|x| 1.0 / x).sum();
    // Reciprocals of mixed-sign data can cancel out
    Statistic::finite(data.len() as f64 / reciprocal_sum)
}

/// Mode of ascending data. Ties for the highest frequency resolve to the
/// smallest tied value.
fn mode_sorted(sorted: &[f64]) -> Statistic {
    if sorted.is_empty() {
        return Statistic::undefined(UndefinedReason::EmptySeries);
    }

    let mut best_value = sorted[0];
    let mut best_count = 0;
    let mut run_start = 0;

    for i in 1..=sorted.len() {
        if i == sorted.len() || sorted[i] != sorted[run_start] {
            let run = i - run_start;
            // Strictly greater keeps the earlier (smaller) value on ties
            if run > best_count {
                best_count = run;
                best_value = sorted[run_start];
            }
            run_start = i;
        }
    }

    if best_count == 1 && sorted.len() > 1 {
        Statistic::undefined(UndefinedReason::NoUniqueMode)
    } else {
        Statistic::Value(best_value)
    }
}
