use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

use super::accumulator::Accumulator;
use super::grouping::{group_by_category, CategoryKey, MetricColumns};
use crate::dataset::RawTable;

/// Aggregates of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMetrics {
    pub count: usize,
    #[serde(rename = "AvgYield")]
    pub avg_yield: Option<f64>,
    #[serde(rename = "TotalCost")]
    pub total_cost: Option<f64>,
    #[serde(rename = "AvgEnvImpact")]
    pub avg_env_impact: Option<f64>,
}

/// Global and per-category aggregates of a product table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMetrics {
    pub rows: usize,
    pub average_base_yield: Option<f64>,
    pub total_cost: Option<f64>,
    pub average_environmental_impact: Option<f64>,
    pub by_category: BTreeMap<CategoryKey, CategoryMetrics>,
}

/// Compute metrics over the present values of each column.
///
/// Global figures are `None` only when the column is missing from the table,
/// except means, which are also `None` when no value is present.
/// Per-category figures are `None` whenever the category has no present value.
pub fn compute_metrics(table: &RawTable) -> ProductMetrics {
    let columns = MetricColumns::from_table(table);
    let global = |column: &Option<Vec<Option<f64>>>| -> Option<Accumulator> {
        column.as_ref().map(|values| values.iter().copied().collect())
    };

    let by_category = group_by_category(table, &columns)
        .unwrap_or_default()
        .into_iter()
        .map(|(key, group)| {
            let metrics = CategoryMetrics {
                count: group.rows,
                avg_yield: group.base_yield.mean(),
                total_cost: group.cost.sum_if_any(),
                avg_env_impact: group.environmental_impact.mean(),
            };
            (key, metrics)
        })
        .collect();

    let metrics = ProductMetrics {
        rows: table.len(),
        average_base_yield: global(&columns.base_yield).and_then(|acc| acc.mean()),
        total_cost: global(&columns.cost).map(|acc| acc.sum()),
        average_environmental_impact: global(&columns.environmental_impact).and_then(|acc| acc.mean()),
        by_category,
    };

    info!(rows = metrics.rows, categories = metrics.by_category.len(), "Computed product metrics");
    metrics
}

/// Bilingual console summary.
impl fmt::Display for ProductMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            global_line("Average BaseYield / Rendimiento promedio", "Average BaseYield", self.average_base_yield)
        )?;
        writeln!(f, "{}", global_line("Total Cost / Costo acumulado", "Total Cost", self.total_cost))?;
        writeln!(
            f,
            "{}",
            global_line(
                "Average Environmental Impact / Impacto ambiental promedio",
                "Average Environmental Impact",
                self.average_environmental_impact
            )
        )?;

        if !self.by_category.is_empty() {
            writeln!(f, "\nMetrics by Category / Métricas por categoría:")?;
            for (category, m) in &self.by_category {
                writeln!(
                    f,
                    "- {category}: count={}, AvgYield={}, TotalCost={}, AvgEnvImpact={}",
                    m.count,
                    display_value(m.avg_yield),
                    display_value(m.total_cost),
                    display_value(m.avg_env_impact)
                )?;
            }
        }
        Ok(())
    }
}

fn global_line(label: &str, short_label: &str, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{label}: {v:.2}"),
        None => format!("{short_label}: N/A"),
    }
}

/// Per-category values are shown unrounded; absent ones as `None`.
pub(crate) fn display_value(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{v:?}"))
}
