use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "catalog_datasets=info";

/// Initializes logging: human-readable output on stderr and, when `log_dir`
/// is set, a daily-rolling JSON file.
///
/// stdout is left to the stage reports. Keep the returned guard alive until
/// exit so buffered file logs are flushed.
pub fn init_logging(log_dir: Option<&Path>, file_prefix: &str) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .context("Invalid log filter directive")?;

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::daily(dir, format!("{file_prefix}.log"));
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().json().with_writer(non_blocking_writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // The subscriber is process-global, so this is the only test that installs it.
    #[test]
    fn test_init_logging_with_file_output() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let guard = init_logging(Some(log_dir.as_path()), "catalog_test").unwrap();
        assert!(guard.is_some());
        assert!(log_dir.is_dir());

        tracing::info!("log file smoke test");
        drop(guard);

        assert!(init_logging(None, "catalog_test").is_err());
    }
}
