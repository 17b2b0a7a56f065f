use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use catalog_datasets::cli::{self, CheckArgs};
use catalog_datasets::config::Settings;
use catalog_datasets::logging;

/// Check integrity of the product dataset (CSV)
#[derive(Parser, Debug)]
#[command(name = "check-dataset-integrity", version)]
struct Cli {
    #[command(flatten)]
    args: CheckArgs,
}

fn main() -> Result<ExitCode> {
    let parsed = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let _guard = logging::init_logging(settings.log_dir.as_deref(), "check-dataset-integrity")?;

    Ok(cli::run_check(&parsed.args, &settings).into())
}
