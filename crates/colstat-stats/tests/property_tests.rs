//! Property tests for the statistics record and plot data

use colstat_stats::{BinRule, BoxSummary, Histogram, NumericSeries, StatisticsRecord};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn finite_values(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, min_len..200)
}

fn positive_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0e-3..1.0e6f64, 1..200)
}

fn close_or_less(a: f64, b: f64) -> bool {
    a <= b + TOLERANCE * b.abs().max(1.0)
}

proptest! {
    #[test]
    fn test_order_statistics_are_consistent(data in finite_values(1)) {
        let stats = StatisticsRecord::compute(&NumericSeries::from_values(&data));
        let min = stats.min.value().unwrap();
        let median = stats.median.value().unwrap();
        let max = stats.max.value().unwrap();

        prop_assert!(min <= median && median <= max);
        prop_assert_eq!(stats.range.value().unwrap(), max - min);
        prop_assert_eq!(stats.count, data.len());
    }

    #[test]
    fn test_am_gm_hm_inequality(data in positive_values()) {
        let stats = StatisticsRecord::from_values(&data);
        let am = stats.mean.value().unwrap();
        let gm = stats.geometric_mean.value().unwrap();
        let hm = stats.harmonic_mean.value().unwrap();

        prop_assert!(close_or_less(gm, am), "gm {} > am {}", gm, am);
        prop_assert!(close_or_less(hm, gm), "hm {} > gm {}", hm, gm);
    }

    #[test]
    fn test_std_dev_is_root_of_variance(data in finite_values(2)) {
        let stats = StatisticsRecord::from_values(&data);
        let variance = stats.variance.value().unwrap();
        let std_dev = stats.std_dev.value().unwrap();

        prop_assert!(variance >= 0.0);
        prop_assert!((std_dev * std_dev - variance).abs() <= 1e-6 * variance.max(1.0));
    }

    #[test]
    fn test_mode_is_a_member(data in prop::collection::vec(0i32..20, 2..100)) {
        let values: Vec<f64> = data.iter().map(|&v| v as f64).collect();
        let stats = StatisticsRecord::from_values(&values);

        if let Some(mode) = stats.mode.value() {
            prop_assert!(values.contains(&mode));
        }
    }

    #[test]
    fn test_box_summary_ordered(data in finite_values(1)) {
        let summary = BoxSummary::from_series(&NumericSeries::from_values(&data)).unwrap();

        prop_assert!(summary.min <= summary.whisker_low);
        prop_assert!(summary.whisker_low <= summary.q1);
        prop_assert!(summary.q1 <= summary.median);
        prop_assert!(summary.median <= summary.q3);
        prop_assert!(summary.q3 <= summary.whisker_high);
        prop_assert!(summary.whisker_high <= summary.max);
    }

    #[test]
    fn test_histogram_counts_every_value(data in finite_values(1), bins in 1usize..50) {
        let histogram = Histogram::from_values(&data, BinRule::Fixed(bins));

        prop_assert_eq!(histogram.total(), data.len());
        for pair in histogram.bins.windows(2) {
            prop_assert!(pair[0].lower < pair[1].lower);
        }
    }
}

#[test]
fn test_median_matches_box_median() {
    let series = NumericSeries::from_values(&[9.0, 1.0, 4.0, 4.0, 7.0, 2.0]);
    let stats = StatisticsRecord::compute(&series);
    let summary = BoxSummary::from_series(&series).unwrap();

    assert_eq!(stats.median.value(), Some(summary.median));
}
