//! Command-line arguments

use clap::{Parser, ValueEnum};
use colstat_core::ColstatConfig;
use colstat_stats::BinRule;

/// Descriptive statistics for one column of a CSV/TSV file
#[derive(Debug, Parser)]
#[command(name = "colstat", version, about)]
pub struct Cli {
    /// Input file (.csv, .tsv, .txt)
    pub file: String,

    /// Column to analyze (defaults to the first column)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Lower bound of the outlier filter (inclusive)
    #[arg(long, requires = "max", allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Upper bound of the outlier filter (inclusive)
    #[arg(long, requires = "min", allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Fixed number of histogram bins
    #[arg(long, conflicts_with = "bin_rule")]
    pub bins: Option<usize>,

    /// Rule for choosing the histogram bin count
    #[arg(long, value_enum)]
    pub bin_rule: Option<BinRuleArg>,

    /// Decimals shown for each statistic
    #[arg(long)]
    pub precision: Option<usize>,

    /// Field delimiter for .csv/.txt files
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(long)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print box plot and histogram data
    #[arg(long)]
    pub plots: bool,

    /// List the columns and their inferred types, then exit
    #[arg(long)]
    pub list_columns: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BinRuleArg {
    Sqrt,
    Sturges,
}

impl Cli {
    /// Filter bounds, when both were given
    pub fn bounds(&self) -> Option<(&str, &str)> {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => Some((min.as_str(), max.as_str())),
            _ => None,
        }
    }

    /// Let command-line flags win over the config file
    pub fn apply_overrides(&self, config: &mut ColstatConfig) {
        if let Some(bins) = self.bins {
            config.histogram.bins = BinRule::Fixed(bins);
        }
        if let Some(rule) = self.bin_rule {
            config.histogram.bins = match rule {
                BinRuleArg::Sqrt => BinRule::SquareRoot,
                BinRuleArg::Sturges => BinRule::Sturges,
            };
        }
        if let Some(precision) = self.precision {
            config.display.precision = precision;
        }
        if let Some(delimiter) = self.delimiter {
            config.csv.delimiter = delimiter;
        }
    }
}
