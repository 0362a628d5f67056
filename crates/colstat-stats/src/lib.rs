//! colstat-stats - Descriptive statistics for a single numeric column
//!
//! This crate provides pure computations over a `NumericSeries`:
//!
//! - **StatisticsRecord**: count, means, dispersion, order statistics, mode
//! - **Quantiles**: linear interpolation between order statistics
//! - **Plot data**: scatter points, box-and-whisker summary, histogram bins
//!
//! # Undefined statistics
//!
//! A statistic that has no meaningful value for its input (the mean of an
//! empty series, the geometric mean of a series containing zero) is not an
//! error. It is reported as `Statistic::Undefined` with a reason, so a
//! record can always be computed and every field can be inspected on its own.

pub mod plot;
pub mod quantile;
pub mod series;
pub mod statistic;
pub mod summary;

pub use plot::*;
pub use quantile::*;
pub use series::*;
pub use statistic::*;
pub use summary::*;
