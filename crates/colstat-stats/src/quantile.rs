//! Quantiles by linear interpolation between order statistics
//!
//! Uses the `(n - 1) * p` position rule, so `quantile(0.5)` is the usual
//! median (mean of the two middle values for even `n`) and the 0 and 1
//! quantiles are the minimum and maximum.

/// Quantile `p` in `[0, 1]` of ascending `sorted` data
///
/// Returns `None` when the data is empty or `p` lies outside `[0, 1]`.
/// The caller must pass data sorted in non-decreasing order.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let lower = h.floor() as usize;
    let frac = h - h.floor();

    if lower + 1 >= n {
        Some(sorted[n - 1])
    } else if frac == 0.0 {
        Some(sorted[lower])
    } else {
        let (a, b) = (sorted[lower], sorted[lower + 1]);
        let span = b - a;
        let value = if span.is_finite() {
            a + frac * span
        } else {
            // The gap between the two order statistics overflows
            a * (1.0 - frac) + b * frac
        };
        Some(value.clamp(a, b))
    }
}

/// Quantile `p` of unsorted data
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p)
}

/// Median of ascending data
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    quantile_sorted(sorted, 0.5)
}
