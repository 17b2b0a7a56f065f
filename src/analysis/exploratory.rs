//! Quick look at a dataset: a preview of its first rows followed by column
//! averages, overall and per category.

use serde::Serialize;
use std::fmt;
use tracing::info;

use super::accumulator::Accumulator;
use super::grouping::{group_by_category, MetricColumns};
use super::product_metrics::display_value;
use crate::constants::MISSING_CATEGORY_KEY;
use crate::dataset::RawTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Averages {
    #[serde(rename = "BaseYield")]
    pub base_yield: Option<f64>,
    #[serde(rename = "Cost")]
    pub cost: Option<f64>,
    #[serde(rename = "EnvironmentalImpact")]
    pub environmental_impact: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// `None` for the bucket of rows without a category.
    #[serde(rename = "Category")]
    pub category: Option<String>,
    pub count: usize,
    #[serde(rename = "AvgYield")]
    pub avg_yield: Option<f64>,
    #[serde(rename = "AvgCost")]
    pub avg_cost: Option<f64>,
    #[serde(rename = "AvgEnvImpact")]
    pub avg_env_impact: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExploratorySummary {
    pub averages: Averages,
    pub by_category: Vec<CategorySummary>,
}

/// Column means over present values, overall and per category.
pub fn summarize(table: &RawTable) -> ExploratorySummary {
    let columns = MetricColumns::from_table(table);
    let mean = |column: &Option<Vec<Option<f64>>>| -> Option<f64> {
        column
            .as_ref()
            .and_then(|values| values.iter().copied().collect::<Accumulator>().mean())
    };

    let averages = Averages {
        base_yield: mean(&columns.base_yield),
        cost: mean(&columns.cost),
        environmental_impact: mean(&columns.environmental_impact),
    };

    let by_category: Vec<CategorySummary> = group_by_category(table, &columns)
        .unwrap_or_default()
        .into_iter()
        .map(|(key, group)| CategorySummary {
            category: key.as_option().map(str::to_string),
            count: group.rows,
            avg_yield: group.base_yield.mean(),
            avg_cost: group.cost.mean(),
            avg_env_impact: group.environmental_impact.mean(),
        })
        .collect();

    info!(rows = table.len(), categories = by_category.len(), "Summarized dataset");
    ExploratorySummary { averages, by_category }
}

/// Heading plus aligned preview of the first rows.
pub fn render_head(head: &RawTable) -> String {
    format!("Dataset head ({} rows):\n{}\n", head.len(), head.render())
}

impl fmt::Display for ExploratorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average metrics / Promedio de métricas:")?;
        for (name, value) in [
            ("BaseYield", self.averages.base_yield),
            ("Cost", self.averages.cost),
            ("EnvironmentalImpact", self.averages.environmental_impact),
        ] {
            writeln!(f, "{name:<20} {}", display_value(value))?;
        }

        if !self.by_category.is_empty() {
            writeln!(f, "\nMetrics by Category / Métricas por categoría:")?;
            for row in &self.by_category {
                writeln!(
                    f,
                    "- {}: count={}, AvgYield={}, AvgCost={}, AvgEnvImpact={}",
                    row.category.as_deref().unwrap_or(MISSING_CATEGORY_KEY),
                    row.count,
                    display_value(row.avg_yield),
                    display_value(row.avg_cost),
                    display_value(row.avg_env_impact)
                )?;
            }
        }
        Ok(())
    }
}
