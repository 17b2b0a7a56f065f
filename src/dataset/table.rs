use crate::coerce::{is_null_token, parse_duration, parse_number};
use chrono::Duration;

/// A product table as read from disk: header names plus string cells.
///
/// Null cells (empty or NA tokens) are stored as `None`. Columns are looked
/// up by name; nothing is assumed about which columns exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Build a table from literal cells; `None` and NA tokens become null.
    pub fn from_rows<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = Vec<Option<&'static str>>>,
    {
        let mut table = Self::new(headers.into_iter().map(Into::into).collect());
        for row in rows {
            table.push_row(row.into_iter().map(|c| c.map(str::to_string)).collect());
        }
        table
    }

    /// Append a row. Cells are trimmed and null tokens become `None`;
    /// short rows are padded with nulls.
    pub fn push_row(&mut self, cells: Vec<Option<String>>) {
        let mut row: Vec<Option<String>> = cells
            .into_iter()
            .map(|cell| cell.filter(|c| !is_null_token(c)).map(|c| c.trim().to_string()))
            .collect();
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of a column, or `None` when the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = Option<&str>> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_deref()))
    }

    pub fn null_count(&self, name: &str) -> Option<usize> {
        self.column(name).map(|cells| cells.filter(Option::is_none).count())
    }

    /// A numeric column with each cell coerced; unparseable cells are `None`.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|cells| cells.map(|cell| cell.and_then(parse_number)).collect())
    }

    /// A duration column with each cell coerced; unparseable cells are `None`.
    pub fn duration_column(&self, name: &str) -> Option<Vec<Option<Duration>>> {
        self.column(name)
            .map(|cells| cells.map(|cell| cell.and_then(parse_duration)).collect())
    }

    /// Keep only the named columns that exist, in the order given.
    pub fn project(&self, names: &[&str]) -> RawTable {
        let picked: Vec<(String, usize)> = names
            .iter()
            .filter_map(|name| self.column_index(name).map(|idx| (name.to_string(), idx)))
            .collect();

        RawTable {
            headers: picked.iter().map(|(name, _)| name.clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| picked.iter().map(|(_, idx)| row[*idx].clone()).collect())
                .collect(),
        }
    }

    /// Render the table as aligned text, nulls shown as `NaN`.
    pub fn render(&self) -> String {
        const NULL_CELL: &str = "NaN";

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .map(|row| row[idx].as_deref().unwrap_or(NULL_CELL).chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&" ".repeat(index_width));
        for (header, width) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("  {header:>width$}"));
        }
        for (row_idx, row) in self.rows.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("{row_idx:<index_width$}"));
            for (cell, width) in row.iter().zip(&widths) {
                let cell = cell.as_deref().unwrap_or(NULL_CELL);
                out.push_str(&format!("  {cell:>width$}"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawTable {
        RawTable::from_rows(
            ["Category", "BaseYield", "Extra"],
            vec![
                vec![Some("A"), Some("100"), Some("x")],
                vec![Some("B"), Some("oops"), None],
                vec![None, Some(""), Some("NaN")],
            ],
        )
    }

    #[test]
    fn test_null_tokens_are_stored_as_none() {
        let table = sample();
        assert_eq!(table.null_count("Category"), Some(1));
        assert_eq!(table.null_count("BaseYield"), Some(1));
        assert_eq!(table.null_count("Extra"), Some(2));
        assert_eq!(table.null_count("Missing"), None);
    }

    #[test]
    fn test_numeric_column_coerces_each_cell() {
        let table = sample();
        assert_eq!(table.numeric_column("BaseYield"), Some(vec![Some(100.0), None, None]));
    }

    #[test]
    fn test_project_skips_absent_columns() {
        let projected = sample().project(&["BaseYield", "Cost", "Category"]);
        assert_eq!(projected.headers(), &["BaseYield".to_string(), "Category".to_string()]);
        assert_eq!(projected.len(), 3);
        assert_eq!(projected.rows()[0], vec![Some("100".to_string()), Some("A".to_string())]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = RawTable::new(vec!["a".into(), "b".into()]);
        table.push_row(vec![Some("1".into())]);
        assert_eq!(table.rows()[0], vec![Some("1".to_string()), None]);
    }

    #[test]
    fn test_render_aligns_columns() {
        let rendered = sample().project(&["Category"]).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("Category"));
        assert!(lines[3].ends_with("NaN"));
    }
}
