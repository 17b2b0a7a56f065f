use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use catalog_datasets::cli::{self, ExploreArgs};
use catalog_datasets::config::Settings;
use catalog_datasets::logging;

/// Exploratory analysis of the product dataset
#[derive(Parser, Debug)]
#[command(name = "exploratory-analysis", version)]
struct Cli {
    #[command(flatten)]
    args: ExploreArgs,
}

fn main() -> Result<ExitCode> {
    let parsed = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let _guard = logging::init_logging(settings.log_dir.as_deref(), "exploratory-analysis")?;

    Ok(cli::run_explore(&parsed.args, &settings).into())
}
