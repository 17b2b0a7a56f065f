use std::fs;
use std::path::Path;
use tracing::info;

use crate::domain::ProductRecord;
use crate::error::Result;

/// Write products as CSV with a header row, creating the parent directory.
pub fn write_products(path: &Path, products: &[ProductRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = products.len(), "Product dataset written");
    Ok(())
}
