//! Text rendering of a statistics record

use colstat_stats::StatisticsRecord;
use serde::Serialize;
use std::fmt;

/// A labelled, formatted statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub text: String,
}

/// Fixed-precision rendering of a `StatisticsRecord`
///
/// Numbers are shown with `precision` decimals; undefined statistics show
/// their reason instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub lines: Vec<ReportLine>,
}

impl StatisticsReport {
    pub fn new(record: &StatisticsRecord, precision: usize) -> Self {
        let mut lines = vec![ReportLine {
            label: "Count",
            text: record.count.to_string(),
        }];
        lines.extend(record.fields().into_iter().map(|(label, stat)| ReportLine {
            label,
            text: stat.format(precision),
        }));
        Self { lines }
    }

    /// Text of the line with `label`
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.text.as_str())
    }
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
        for line in &self.lines {
            writeln!(f, "{:<width$}  {}", format!("{}:", line.label), line.text, width = width + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_report() {
        let record = StatisticsRecord::from_values(&[0.0, 1.0, 2.0]);
        let report = StatisticsReport::new(&record, 2);

        assert_eq!(report.get("Count"), Some("3"));
        assert_eq!(report.get("Mean"), Some("1.00"));
        assert_eq!(report.get("Variance"), Some("1.00"));
        assert_eq!(report.get("Harmonic mean"), Some("requires nonzero values"));
        assert_eq!(
            report.get("Geometric mean"),
            Some("requires strictly positive values")
        );
        assert_eq!(report.get("Mode"), Some("no unique mode"));
    }

    #[test]
    fn test_display_lines() {
        let record = StatisticsRecord::from_values(&[2.0, 2.0]);
        let text = StatisticsReport::new(&record, 1).to_string();

        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().next().unwrap().starts_with("Count:"));
        assert!(text.contains("Std dev:"));
        assert!(text.lines().any(|l| l.starts_with("Mode:") && l.ends_with("2.0")));
    }
}
