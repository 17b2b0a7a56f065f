use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use super::table::RawTable;
use crate::error::{DatasetError, Result};

/// Read the whole CSV at `path` into memory.
pub fn load_table(path: &Path) -> Result<RawTable> {
    read_rows(path, None)
}

/// Read the CSV keeping only `columns`; wanted columns that the file lacks
/// are left out rather than treated as an error.
pub fn load_columns(path: &Path, columns: &[&str]) -> Result<RawTable> {
    let table = read_rows(path, None)?;
    let projected = table.project(columns);
    debug!(
        wanted = columns.len(),
        found = projected.headers().len(),
        "Projected dataset columns"
    );
    Ok(projected)
}

/// Read only the first `max(1, n)` data rows.
pub fn load_head(path: &Path, n: usize) -> Result<RawTable> {
    read_rows(path, Some(n.max(1)))
}

fn read_rows(path: &Path, limit: Option<usize>) -> Result<RawTable> {
    if !path.exists() {
        return Err(DatasetError::NotFound { path: path.to_path_buf() });
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| normalize_header(idx, name))
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(DatasetError::EmptyDataset { path: path.to_path_buf() });
    }

    let mut table = RawTable::new(headers);
    for record in reader.records() {
        if limit.is_some_and(|max| table.len() >= max) {
            break;
        }
        let record = record?;
        table.push_row(record.iter().map(|cell| Some(cell.to_string())).collect());
    }

    info!(path = %path.display(), rows = table.len(), columns = table.headers().len(), "Dataset loaded");
    Ok(table)
}

fn normalize_header(idx: usize, name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a BOM.
    let name = if idx == 0 { name.trim_start_matches('\u{feff}') } else { name };
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        assert!(matches!(load_table(&path), Err(DatasetError::EmptyDataset { .. })));
    }

    #[test]
    fn test_ragged_row_is_a_csv_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b\n1,2\n1,2,3\n").unwrap();
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.csv");
        fs::write(&path, "\u{feff}Id,Name\n1,x\n").unwrap();
        let table = load_table(&path).unwrap();
        assert!(table.has_column("Id"));
    }

    #[test]
    fn test_load_head_and_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "Category,Cost,Extra\nA,1,x\nB,2,y\nC,,z\n").unwrap();

        assert_eq!(load_head(&path, 2).unwrap().len(), 2);
        assert_eq!(load_head(&path, 0).unwrap().len(), 1);

        let projected = load_columns(&path, &["Category", "Cost", "BaseYield"]).unwrap();
        assert_eq!(projected.headers(), &["Category".to_string(), "Cost".to_string()]);
        assert_eq!(projected.len(), 3);
        assert_eq!(projected.null_count("Cost"), Some(1));
    }
}
