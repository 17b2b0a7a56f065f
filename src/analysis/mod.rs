//! Numeric aggregates over product tables.

pub mod accumulator;
pub mod exploratory;
pub mod grouping;
pub mod product_metrics;

pub use accumulator::Accumulator;
pub use exploratory::{summarize, ExploratorySummary};
pub use grouping::CategoryKey;
pub use product_metrics::{compute_metrics, CategoryMetrics, ProductMetrics};

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// Write a summary as pretty JSON, creating the parent directory.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "Summary written");
    Ok(())
}
