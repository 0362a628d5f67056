//! Analysis session management
//!
//! A session owns the state the surrounding application would otherwise keep
//! in globals:
//! - The loaded base table and the active (possibly filtered) table
//! - The selected column
//! - The active range filter
//! - The analysis snapshot for (active table) x (selected column)
//!
//! Each change computes a complete new snapshot before touching any state, so
//! a failed change leaves the previous snapshot in place and a successful one
//! never shows stale statistics.

use crate::config::ColstatConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::extract::extract;
use crate::filter::{FilterBound, RangeFilter};
use crate::report::StatisticsReport;
use colstat_io::Table;
use colstat_stats::{BinRule, BoxSummary, Histogram, NumericSeries, ScatterData, StatisticsRecord};
use serde::Serialize;
use std::sync::Arc;

/// Everything computed for one column of the active table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAnalysis {
    /// Analyzed column
    pub column: String,
    /// Filter the active table was derived with
    pub filter: Option<RangeFilter>,
    /// Rows in the active table
    pub rows: usize,
    /// Extracted values
    pub series: NumericSeries,
    /// Descriptive statistics
    pub stats: StatisticsRecord,
    /// Scatter-by-index plot data
    pub scatter: ScatterData,
    /// Box plot data (`None` for an empty series)
    pub boxplot: Option<BoxSummary>,
    /// Histogram plot data
    pub histogram: Histogram,
}

impl ColumnAnalysis {
    /// Analyze `column` of `table`
    pub fn compute(
        table: &Table,
        column: &str,
        filter: Option<RangeFilter>,
        bins: BinRule,
    ) -> AnalysisResult<Self> {
        let series = extract(table, column)?;
        let stats = StatisticsRecord::compute(&series);

        Ok(Self {
            column: column.to_string(),
            filter,
            rows: table.num_rows(),
            scatter: ScatterData::from_series(&series),
            boxplot: BoxSummary::from_series(&series),
            histogram: Histogram::from_series(&series, bins),
            stats,
            series,
        })
    }

    /// Render the statistics with `precision` decimals
    pub fn report(&self, precision: usize) -> StatisticsReport {
        StatisticsReport::new(&self.stats, precision)
    }
}

/// Caller-owned analysis state
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    config: ColstatConfig,
    base: Option<Arc<Table>>,
    active: Option<Arc<Table>>,
    column: Option<String>,
    filter: Option<RangeFilter>,
    analysis: Option<ColumnAnalysis>,
}

impl AnalysisSession {
    /// Create an empty session
    pub fn new(config: ColstatConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ColstatConfig {
        &self.config
    }

    /// The table as loaded
    pub fn base_table(&self) -> Option<&Arc<Table>> {
        self.base.as_ref()
    }

    /// The table the analysis runs on: the base table, or its filtered view
    pub fn active_table(&self) -> Option<&Arc<Table>> {
        self.active.as_ref()
    }

    pub fn selected_column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn active_filter(&self) -> Option<&RangeFilter> {
        self.filter.as_ref()
    }

    /// Current analysis snapshot
    pub fn analysis(&self) -> Option<&ColumnAnalysis> {
        self.analysis.as_ref()
    }

    /// Report for the current analysis at the configured precision
    pub fn report(&self) -> Option<StatisticsReport> {
        self.analysis
            .as_ref()
            .map(|a| a.report(self.config.display.precision))
    }

    /// Replace the loaded table
    ///
    /// Clears any filter and selects the first column.
    pub fn load_table(&mut self, table: Table) -> AnalysisResult<Option<&ColumnAnalysis>> {
        let table = Arc::new(table);
        let column = table.column_names().first().map(|s| s.to_string());

        let analysis = match &column {
            Some(name) => Some(ColumnAnalysis::compute(
                &table,
                name,
                None,
                self.config.histogram.bins,
            )?),
            None => None,
        };

        tracing::info!(
            rows = table.num_rows(),
            columns = table.num_columns(),
            column = column.as_deref().unwrap_or(""),
            "table loaded"
        );

        self.base = Some(Arc::clone(&table));
        self.active = Some(table);
        self.column = column;
        self.filter = None;
        self.analysis = analysis;
        Ok(self.analysis.as_ref())
    }

    /// Read a file with the configured CSV options and load it
    pub fn load_file(&mut self, path: &str) -> AnalysisResult<Option<&ColumnAnalysis>> {
        let options = self.config.csv.to_options()?;
        let table = colstat_io::open_file(path, &options)?.read_table()?;
        self.load_table(table)
    }

    /// Select the column to analyze
    pub fn select_column(&mut self, column: &str) -> AnalysisResult<&ColumnAnalysis> {
        let active = self.active.as_ref().ok_or(AnalysisError::NoTable)?;
        let analysis = ColumnAnalysis::compute(
            active,
            column,
            self.filter.clone(),
            self.config.histogram.bins,
        )?;

        tracing::debug!(column, count = analysis.stats.count, "column selected");
        self.column = Some(column.to_string());
        Ok(self.analysis.insert(analysis))
    }

    /// Parse a bound from text and filter on the selected column
    pub fn apply_filter(&mut self, min: &str, max: &str) -> AnalysisResult<&ColumnAnalysis> {
        let bound = FilterBound::parse(min, max).map_err(|e| {
            tracing::warn!(min, max, "rejected filter bound");
            e
        })?;
        self.apply_bound(bound)
    }

    /// Filter the base table on the selected column, replacing any previous filter
    pub fn apply_bound(&mut self, bound: FilterBound) -> AnalysisResult<&ColumnAnalysis> {
        let base = self.base.as_ref().ok_or(AnalysisError::NoTable)?;
        let column = self.column.clone().ok_or(AnalysisError::NoTable)?;

        let filter = RangeFilter::new(column, bound);
        let filtered = Arc::new(filter.apply(base)?);
        let analysis = ColumnAnalysis::compute(
            &filtered,
            &filter.column,
            Some(filter.clone()),
            self.config.histogram.bins,
        )?;

        tracing::info!(
            column = %filter.column,
            min = bound.min(),
            max = bound.max(),
            rows = filtered.num_rows(),
            "filter applied"
        );
        self.active = Some(filtered);
        self.filter = Some(filter);
        Ok(self.analysis.insert(analysis))
    }

    /// Drop the active filter and analyze the full table again
    pub fn clear_filter(&mut self) -> AnalysisResult<Option<&ColumnAnalysis>> {
        let base = self.base.clone().ok_or(AnalysisError::NoTable)?;
        let analysis = match &self.column {
            Some(column) => Some(ColumnAnalysis::compute(
                &base,
                column,
                None,
                self.config.histogram.bins,
            )?),
            None => None,
        };

        self.active = Some(base);
        self.filter = None;
        self.analysis = analysis;
        Ok(self.analysis.as_ref())
    }

    /// Change the histogram bin rule and rebuild the analysis
    pub fn set_bin_rule(&mut self, bins: BinRule) -> AnalysisResult<Option<&ColumnAnalysis>> {
        let analysis = match (&self.active, &self.column) {
            (Some(active), Some(column)) => Some(ColumnAnalysis::compute(
                active,
                column,
                self.filter.clone(),
                bins,
            )?),
            _ => None,
        };

        self.config.histogram.bins = bins;
        if analysis.is_some() {
            self.analysis = analysis;
        }
        Ok(self.analysis.as_ref())
    }
}
