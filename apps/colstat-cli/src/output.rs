//! Text rendering for the console

use std::fmt::Write;

use colstat_core::ColumnAnalysis;
use colstat_io::Table;

/// Column listing with inferred types
pub fn render_columns(table: &Table) -> String {
    let mut out = String::new();
    for column in &table.schema().columns {
        let _ = writeln!(out, "{}\t{:?}", column.name, column.dtype);
    }
    out
}

/// Statistics report, optionally followed by the plot data
pub fn render_text(analysis: &ColumnAnalysis, precision: usize, plots: bool) -> String {
    let mut out = String::new();

    let _ = write!(out, "Column: {}", analysis.column);
    if let Some(filter) = &analysis.filter {
        let _ = write!(
            out,
            " (filtered on {} in [{}, {}], {} rows)",
            filter.column,
            filter.bound.min(),
            filter.bound.max(),
            analysis.rows
        );
    }
    out.push('\n');
    out.push_str(&analysis.report(precision).to_string());

    if !plots {
        return out;
    }

    out.push_str("\nBox plot:\n");
    match &analysis.boxplot {
        Some(b) => {
            let _ = writeln!(
                out,
                "  min {:.p$}  q1 {:.p$}  median {:.p$}  q3 {:.p$}  max {:.p$}",
                b.min,
                b.q1,
                b.median,
                b.q3,
                b.max,
                p = precision
            );
            let _ = writeln!(
                out,
                "  whiskers [{:.p$}, {:.p$}]  outliers {}",
                b.whisker_low,
                b.whisker_high,
                b.outliers.len(),
                p = precision
            );
        }
        None => out.push_str("  no data\n"),
    }

    out.push_str("\nHistogram:\n");
    if analysis.histogram.is_empty() {
        out.push_str("  no data\n");
    }
    for bin in &analysis.histogram.bins {
        let _ = writeln!(
            out,
            "  [{:.p$}, {:.p$}]  {}",
            bin.lower,
            bin.upper,
            bin.count,
            p = precision
        );
    }

    out
}
