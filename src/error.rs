use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("CSV not found / no encontrado: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("No columns to parse / CSV sin columnas: {}", path.display())]
    EmptyDataset { path: PathBuf },

    #[error("CSV parse failed / error al leer CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DatasetError {
    /// True for failures that happen before any table is available:
    /// a missing input file or a CSV that cannot be read.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            DatasetError::NotFound { .. } | DatasetError::EmptyDataset { .. } | DatasetError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_bilingual() {
        let err = DatasetError::NotFound { path: PathBuf::from("missing.csv") };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("no encontrado"));
        assert!(msg.contains("missing.csv"));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_config_error_is_not_a_load_failure() {
        let err = DatasetError::Config("bad".to_string());
        assert!(!err.is_load_failure());
    }
}
