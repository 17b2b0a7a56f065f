//! Entry points of the four pipeline stages.
//!
//! Each stage prints its bilingual report on stdout and returns an
//! [`ExitStatus`]; the binaries turn that into the process exit code.

use chrono::Local;
use clap::Args;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, span, Level};

use crate::analysis::{self, exploratory};
use crate::config::Settings;
use crate::constants::METRICS_COLUMNS;
use crate::dataset::{self, RawTable};
use crate::error::Result;
use crate::generator::{self, GeneratorConfig};
use crate::integrity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Number of products to generate (default: 50)
    #[arg(long = "num-samples", value_parser = clap::value_parser!(u64).range(1..))]
    pub num_samples: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output CSV path (default: backend/datasets/product_dataset.csv)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// CSV to validate (default: backend/datasets/product_dataset.csv)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Exit with code 1 when any issue is detected
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MetricsArgs {
    /// CSV to analyze (default: backend/datasets/product_dataset.csv)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Also save the metrics as JSON
    #[arg(long = "json-out")]
    pub json_out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExploreArgs {
    /// CSV to analyze (default: backend/datasets/product_dataset.csv)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Rows to show in the preview (default: 5)
    #[arg(long = "head-rows")]
    pub head_rows: Option<usize>,

    /// Also save the summary as JSON
    #[arg(long = "json-out")]
    pub json_out: Option<PathBuf>,
}

/// Generate a synthetic dataset and write it as CSV.
pub fn run_generate(args: &GenerateArgs, settings: &Settings) -> ExitStatus {
    let out_path = args.out.clone().unwrap_or_else(|| settings.resolved_dataset_path());
    let num_samples = args
        .num_samples
        .map(|n| n as usize)
        .unwrap_or(settings.num_samples)
        .max(1);

    let span = span!(Level::INFO, "generate", path = %out_path.display());
    let _enter = span.enter();

    let config = GeneratorConfig {
        num_samples,
        seed: args.seed,
        reference_time: Local::now().naive_local(),
    };
    let products = generator::generate_dataset(&config);

    match dataset::write_products(&out_path, &products) {
        Ok(()) => {
            println!(
                "✅ Product dataset generated successfully at: {} \nDataset de productos generado exitosamente!",
                out_path.display()
            );
            ExitStatus::Success
        }
        Err(e) => {
            error!("Failed to write dataset: {}", e);
            println!("❌ ERROR writing CSV / error al escribir CSV: {}", e);
            ExitStatus::Failure
        }
    }
}

/// Validate a dataset; in strict mode any issue fails the run.
pub fn run_check(args: &CheckArgs, settings: &Settings) -> ExitStatus {
    let path = args.path.clone().unwrap_or_else(|| settings.resolved_dataset_path());
    let span = span!(Level::INFO, "check", path = %path.display());
    let _enter = span.enter();

    let table = match load_or_report(dataset::load_table(&path)) {
        Some(table) => table,
        None => return ExitStatus::Failure,
    };
    println!("Dataset loaded: {} rows / filas\n", table.len());

    let report = integrity::check_integrity(&table);
    print!("{report}");
    println!("\n=== Done / Listo! ===");

    let total = report.tally.total();
    info!(total_issues = total, strict = args.strict, "Integrity check finished");
    if args.strict && total > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

/// Compute global and per-category metrics, optionally saving them as JSON.
pub fn run_metrics(args: &MetricsArgs, settings: &Settings) -> ExitStatus {
    let path = args.path.clone().unwrap_or_else(|| settings.resolved_dataset_path());
    let span = span!(Level::INFO, "metrics", path = %path.display());
    let _enter = span.enter();

    let table = match load_or_report(dataset::load_columns(&path, &METRICS_COLUMNS)) {
        Some(table) => table,
        None => return ExitStatus::Failure,
    };
    println!("Dataset loaded: {} rows / filas", table.len());

    let metrics = analysis::compute_metrics(&table);
    print!("{metrics}");

    if let Some(out) = &args.json_out {
        if !save_json(out, &metrics, "Metrics saved to") {
            return ExitStatus::Failure;
        }
    }

    println!("\n✅ All metrics calculated successfully / Todas las métricas calculadas correctamente");
    ExitStatus::Success
}

/// Preview the first rows, then summarize column averages.
pub fn run_explore(args: &ExploreArgs, settings: &Settings) -> ExitStatus {
    let path = args.path.clone().unwrap_or_else(|| settings.resolved_dataset_path());
    let head_rows = args.head_rows.unwrap_or(settings.head_rows);
    let span = span!(Level::INFO, "explore", path = %path.display());
    let _enter = span.enter();

    let head = match load_or_report(dataset::load_head(&path, head_rows)) {
        Some(head) => head,
        None => return ExitStatus::Failure,
    };
    println!("{}", exploratory::render_head(&head));

    let table = match load_or_report(dataset::load_columns(&path, &METRICS_COLUMNS)) {
        Some(table) => table,
        None => return ExitStatus::Failure,
    };
    println!("Dataset loaded for metrics: {} rows / filas\n", table.len());

    let summary = analysis::summarize(&table);
    print!("{summary}");

    if let Some(out) = &args.json_out {
        if !save_json(out, &summary, "Summary saved to") {
            return ExitStatus::Failure;
        }
    }

    println!("\n✅ Exploratory analysis completed successfully / Análisis exploratorio completado");
    ExitStatus::Success
}

fn load_or_report(result: Result<RawTable>) -> Option<RawTable> {
    match result {
        Ok(table) => Some(table),
        Err(e) => {
            error!(load_failure = e.is_load_failure(), "Failed to load dataset: {}", e);
            println!("❌ ERROR: {}", e);
            None
        }
    }
}

fn save_json<T: serde::Serialize>(out: &Path, value: &T, label: &str) -> bool {
    match analysis::write_json(out, value) {
        Ok(()) => {
            println!("\n{label}: {}", out.display());
            true
        }
        Err(e) => {
            error!("Failed to write JSON: {}", e);
            println!("❌ ERROR writing JSON / error al escribir JSON: {}", e);
            false
        }
    }
}
