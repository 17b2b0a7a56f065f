use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use catalog_datasets::cli::{self, GenerateArgs};
use catalog_datasets::config::Settings;
use catalog_datasets::logging;

/// Generate a synthetic product dataset and save it as CSV
#[derive(Parser, Debug)]
#[command(name = "create-product-dataset", version)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> Result<ExitCode> {
    let parsed = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let _guard = logging::init_logging(settings.log_dir.as_deref(), "create-product-dataset")?;

    Ok(cli::run_generate(&parsed.args, &settings).into())
}
