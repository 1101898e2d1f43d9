use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, LevelFilter};

use param_metrics::{MetricsAggregator, ScanOptions};

/// Compute parameter-count metrics for a directory of signature XML documents
#[derive(Debug, Parser)]
#[command(name = "param_metrics", version, about)]
struct Cli {
    /// Directory containing the .xml documents to scan
    directory: PathBuf,

    /// Directory the report file is written into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Log each element as it is accumulated
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let aggregator = MetricsAggregator::new(ScanOptions {
        verbose_elements: cli.verbose,
        output_dir: cli.output_dir,
    });

    aggregator
        .run(&cli.directory)
        .with_context(|| format!("metrics scan failed for {}", cli.directory.display()))?;

    Ok(())
}
