use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE_NAME, CONFIG_PATH_ENV, DATASET_PATH_ENV, DEFAULT_HEAD_ROWS, DEFAULT_NUM_SAMPLES,
    LOG_DIR_ENV,
};
use crate::error::{DatasetError, Result};

/// Runtime settings shared by every pipeline stage.
///
/// Values come from built-in defaults, then an optional TOML file, then
/// environment variables. CLI flags are applied last by each stage.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub dataset_path: Option<PathBuf>,
    pub num_samples: usize,
    pub head_rows: usize,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            num_samples: DEFAULT_NUM_SAMPLES,
            head_rows: DEFAULT_HEAD_ROWS,
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `.env`, the config file and the process environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME));

        let mut settings = Self::from_file(&config_path)?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Read a TOML settings file. A file that does not exist yields defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            DatasetError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATASET_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.dataset_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_dir = Some(PathBuf::from(dir));
        }
    }

    /// The dataset path to use when the caller did not pass one explicitly.
    pub fn resolved_dataset_path(&self) -> PathBuf {
        self.dataset_path.clone().unwrap_or_else(default_dataset_path)
    }
}

/// `<crate root>/backend/datasets/product_dataset.csv`
pub fn default_dataset_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("backend")
        .join("datasets")
        .join("product_dataset.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.num_samples, 50);
        assert_eq!(settings.head_rows, 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog_datasets.toml");
        fs::write(&path, "num_samples = 12\ndataset_path = \"data/products.csv\"\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.num_samples, 12);
        assert_eq!(settings.head_rows, 5);
        assert_eq!(settings.dataset_path, Some(PathBuf::from("data/products.csv")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "num_samples = \"many\"").unwrap();
        assert!(matches!(Settings::from_file(&path), Err(DatasetError::Toml(_))));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut settings = Settings {
            dataset_path: Some(PathBuf::from("from_file.csv")),
            ..Settings::default()
        };
        let env: HashMap<&str, &str> =
            HashMap::from([(DATASET_PATH_ENV, "from_env.csv"), (LOG_DIR_ENV, "")]);
        settings.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.resolved_dataset_path(), PathBuf::from("from_env.csv"));
        assert_eq!(settings.log_dir, None);
    }

    #[test]
    fn test_default_path_points_into_backend_datasets() {
        let path = default_dataset_path();
        assert!(path.ends_with("backend/datasets/product_dataset.csv"));
        assert!(path.starts_with(env!("CARGO_MANIFEST_DIR")));
    }
}
