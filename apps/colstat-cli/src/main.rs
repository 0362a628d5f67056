//! colstat - Column statistics console
//!
//! Loads a delimited file, analyzes one column, optionally restricted to an
//! inclusive value range, and prints the statistics and plot data.

mod args;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, OutputFormat};
use colstat_core::{AnalysisSession, ColstatConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).inspect_err(|err| tracing::error!("{err}"))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ColstatConfig::load(path)?,
        None => ColstatConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    tracing::debug!(file = %cli.file, ?config, "starting analysis");

    let mut session = AnalysisSession::new(config);
    session.load_file(&cli.file)?;

    if cli.list_columns {
        let table = session.active_table().ok_or("no table loaded")?;
        print!("{}", output::render_columns(table));
        return Ok(());
    }

    if let Some(column) = &cli.column {
        session.select_column(column)?;
    }

    if let Some((min, max)) = cli.bounds() {
        session.apply_filter(min, max)?;
    }

    let analysis = session.analysis().ok_or("the file has no columns")?;
    match cli.format {
        OutputFormat::Text => {
            let precision = session.config().display.precision;
            print!("{}", output::render_text(analysis, precision, cli.plots));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(analysis)?);
        }
    }

    Ok(())
}
