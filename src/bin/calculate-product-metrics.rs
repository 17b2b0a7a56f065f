use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use catalog_datasets::cli::{self, MetricsArgs};
use catalog_datasets::config::Settings;
use catalog_datasets::logging;

/// Calculate product metrics from CSV
#[derive(Parser, Debug)]
#[command(name = "calculate-product-metrics", version)]
struct Cli {
    #[command(flatten)]
    args: MetricsArgs,
}

fn main() -> Result<ExitCode> {
    let parsed = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let _guard = logging::init_logging(settings.log_dir.as_deref(), "calculate-product-metrics")?;

    Ok(cli::run_metrics(&parsed.args, &settings).into())
}
