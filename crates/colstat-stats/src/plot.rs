//! Plot-data preparers
//!
//! Each preparer turns a `NumericSeries` into exactly the numbers one plot
//! needs. Nothing here draws; an empty series yields an empty result that the
//! renderer shows as "no data".

use crate::quantile::quantile_sorted;
use crate::series::{NumericSeries, SeriesPoint};
use serde::{Deserialize, Serialize};

/// Multiplier of the interquartile range used for whisker fences
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Points of a value-by-row-index scatter plot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    /// `(row index, value)` in row order
    pub points: Vec<(usize, f64)>,
}

impl ScatterData {
    pub fn from_series(series: &NumericSeries) -> Self {
        Self {
            points: series.points().iter().map(|p| (p.index, p.value)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Five-number summary plus Tukey whiskers for a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    /// First quartile
    pub q1: f64,
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    pub max: f64,
    /// Smallest value not below `q1 - 1.5 * iqr`, capped at `q1`
    pub whisker_low: f64,
    /// Largest value not above `q3 + 1.5 * iqr`, floored at `q3`
    pub whisker_high: f64,
    /// Points beyond the whiskers, in row order
    pub outliers: Vec<SeriesPoint>,
}

impl BoxSummary {
    /// Summarize a series; `None` when it is empty
    pub fn from_series(series: &NumericSeries) -> Option<Self> {
        let sorted = series.sorted_values();
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;

        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let within = |v: f64| v >= low_fence && v <= high_fence;
        // Whiskers never end inside the box
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| within(v))
            .map_or(q1, |v| v.min(q1));
        let whisker_high = sorted
            .iter()
            .copied()
            .rev()
            .find(|&v| within(v))
            .map_or(q3, |v| v.max(q3));

        Some(Self {
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            whisker_low,
            whisker_high,
            outliers: series
                .points()
                .iter()
                .filter(|p| !within(p.value))
                .copied()
                .collect(),
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// How many histogram bins to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    /// `ceil(sqrt(n))`
    SquareRoot,
    /// `ceil(log2(n)) + 1`
    Sturges,
    /// A caller-supplied count, kept between one and the number of values
    Fixed(usize),
}

impl Default for BinRule {
    fn default() -> Self {
        BinRule::SquareRoot
    }
}

impl BinRule {
    /// Bin count for `n` values; zero only when `n` is zero, never above `n`
    pub fn bin_count(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let count = match self {
            BinRule::SquareRoot => (n as f64).sqrt().ceil() as usize,
            BinRule::Sturges => (n as f64).log2().ceil() as usize + 1,
            BinRule::Fixed(k) => *k,
        };
        count.clamp(1, n)
    }
}

/// One histogram bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Uniform-width histogram covering `[min, max]` of a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bins in ascending order; every bin is half-open except the last
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn from_series(series: &NumericSeries, rule: BinRule) -> Self {
        Self::from_values(&series.values(), rule)
    }

    pub fn from_values(values: &[f64], rule: BinRule) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self::default();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let num_bins = rule.bin_count(finite.len());
        let width = (max - min) / num_bins as f64;

        // Constant data (or a span too wide to divide) collapses to one bin
        if width <= 0.0 || !width.is_finite() {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: finite.len(),
                }],
            };
        }

        let mut counts = vec![0usize; num_bins];
        for v in &finite {
            let idx = ((v - min) / width).floor() as usize;
            counts[idx.min(num_bins - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + i as f64 * width,
                upper: if i + 1 == num_bins {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count,
            })
            .collect();

        Self { bins }
    }

    /// Total number of values counted
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
