use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use catalog_datasets::cli::{self, CheckArgs, ExploreArgs, GenerateArgs, MetricsArgs};
use catalog_datasets::config::Settings;
use catalog_datasets::logging;

#[derive(Parser)]
#[command(name = "catalog_datasets")]
#[command(about = "Product catalog dataset pipeline: generate, check and analyze CSV datasets")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic product dataset and save it as CSV
    Generate(GenerateArgs),
    /// Check the integrity of a product dataset
    Check(CheckArgs),
    /// Calculate product metrics from a dataset
    Metrics(MetricsArgs),
    /// Preview a dataset and summarize its averages
    Explore(ExploreArgs),
}

fn main() -> Result<ExitCode> {
    let parsed = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let _guard = logging::init_logging(settings.log_dir.as_deref(), "catalog_datasets")?;

    let status = match &parsed.command {
        Commands::Generate(args) => cli::run_generate(args, &settings),
        Commands::Check(args) => cli::run_check(args, &settings),
        Commands::Metrics(args) => cli::run_metrics(args, &settings),
        Commands::Explore(args) => cli::run_explore(args, &settings),
    };
    Ok(status.into())
}
