use chrono::Duration;
use std::fmt;
use tracing::{debug, warn};

use crate::constants::{COL_SHELF_LIFE, NON_NULLABLE_COLUMNS, NUMERIC_COLUMNS, REQUIRED_COLUMNS};
use crate::dataset::RawTable;

/// The four issue counters of an integrity check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueTally {
    pub missing_columns: usize,
    pub nulls: usize,
    pub negatives: usize,
    pub invalid_shelf_life: usize,
}

impl IssueTally {
    pub fn total(&self) -> usize {
        self.missing_columns + self.nulls + self.negatives + self.invalid_shelf_life
    }

    /// Counters in report order.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("missing_columns", self.missing_columns),
            ("nulls", self.nulls),
            ("negatives", self.negatives),
            ("invalid_shelf_life", self.invalid_shelf_life),
        ]
    }
}

/// Range check of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumnStats {
    pub column: String,
    pub negatives: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// ShelfLife check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLifeStats {
    pub unparseable: usize,
    pub non_positive: usize,
}

/// Everything an integrity check found, including the details that are
/// reported but do not feed the tally.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityReport {
    pub rows: usize,
    pub tally: IssueTally,
    pub missing_columns: Vec<String>,
    pub null_counts: Vec<(String, usize)>,
    pub numeric: Vec<NumericColumnStats>,
    /// `None` when the column is absent.
    pub shelf_life: Option<ShelfLifeStats>,
}

/// Validate schema and value constraints of a product table.
pub fn check_integrity(table: &RawTable) -> IntegrityReport {
    let mut tally = IssueTally::default();

    let missing_columns: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| c.to_string())
        .collect();
    tally.missing_columns = missing_columns.len();

    let null_counts: Vec<(String, usize)> = NON_NULLABLE_COLUMNS
        .iter()
        .filter_map(|c| table.null_count(c).map(|n| (c.to_string(), n)))
        .collect();
    tally.nulls = null_counts.iter().map(|(_, n)| n).sum();

    let numeric: Vec<NumericColumnStats> = NUMERIC_COLUMNS
        .iter()
        .filter_map(|c| table.numeric_column(c).map(|values| numeric_stats(c, &values)))
        .collect();
    tally.negatives = numeric.iter().map(|s| s.negatives).sum();

    let shelf_life = table.duration_column(COL_SHELF_LIFE).map(|values| shelf_life_stats(&values));
    match shelf_life {
        Some(stats) => tally.invalid_shelf_life = stats.unparseable + stats.non_positive,
        // Counted a second time on top of the required-columns pass.
        None => tally.missing_columns += 1,
    }

    if tally.total() > 0 {
        warn!(
            missing_columns = tally.missing_columns,
            nulls = tally.nulls,
            negatives = tally.negatives,
            invalid_shelf_life = tally.invalid_shelf_life,
            "Dataset integrity issues detected"
        );
    } else {
        debug!(rows = table.len(), "Dataset passed integrity checks");
    }

    IntegrityReport {
        rows: table.len(),
        tally,
        missing_columns,
        null_counts,
        numeric,
        shelf_life,
    }
}

fn numeric_stats(column: &str, values: &[Option<f64>]) -> NumericColumnStats {
    let present = values.iter().flatten().copied();
    NumericColumnStats {
        column: column.to_string(),
        negatives: values.iter().flatten().filter(|v| **v < 0.0).count(),
        min: present.clone().reduce(f64::min),
        max: present.reduce(f64::max),
    }
}

fn shelf_life_stats(values: &[Option<Duration>]) -> ShelfLifeStats {
    ShelfLifeStats {
        unparseable: values.iter().filter(|v| v.is_none()).count(),
        non_positive: values.iter().flatten().filter(|d| **d <= Duration::zero()).count(),
    }
}

/// Bilingual, human-readable report of every check and the summary.
impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Checking required columns / Verificando columnas obligatorias ===")?;
        for col in &self.missing_columns {
            writeln!(f, "Missing column: {col} / Falta columna: {col}")?;
        }

        writeln!(f, "\n=== Checking non-null values / Verificando valores nulos ===")?;
        if self.null_counts.is_empty() {
            writeln!(f, "No non-nullable columns found present / No se hallaron columnas no nulas presentes")?;
        }
        for (col, count) in &self.null_counts {
            writeln!(f, "{col}: {count} null values / valores nulos")?;
        }

        writeln!(f, "\n=== Checking numeric ranges / Verificando rangos numéricos ===")?;
        for stats in &self.numeric {
            if stats.negatives > 0 {
                writeln!(
                    f,
                    "Warning: {} has {} negative values / valores negativos",
                    stats.column, stats.negatives
                )?;
            }
            writeln!(
                f,
                "{} - min: {}, max: {}",
                stats.column,
                format_optional(stats.min),
                format_optional(stats.max)
            )?;
        }

        writeln!(f, "\n=== Checking ShelfLife positive / Verificando ShelfLife positiva ===")?;
        match &self.shelf_life {
            Some(stats) => {
                writeln!(f, "ShelfLife invalid (NaT): {}", stats.unparseable)?;
                writeln!(f, "ShelfLife <= 0 days: {} products / productos", stats.non_positive)?;
            }
            None => writeln!(f, "Column 'ShelfLife' not present / Columna 'ShelfLife' no presente")?,
        }

        writeln!(f, "\n=== Summary / Resumen ===")?;
        for (name, value) in self.tally.entries() {
            writeln!(f, "{name}: {value}")?;
        }
        writeln!(f, "Total issues: {}", self.tally.total())
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "nan".to_string(), |v| v.to_string())
}
