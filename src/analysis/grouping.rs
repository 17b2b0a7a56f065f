use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::accumulator::Accumulator;
use crate::constants::{COL_BASE_YIELD, COL_CATEGORY, COL_COST, COL_ENVIRONMENTAL_IMPACT, MISSING_CATEGORY_KEY};
use crate::dataset::RawTable;

/// Grouping key: a category value, or the bucket for rows without one.
///
/// Orders named categories lexicographically with the missing bucket last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    Named(String),
    Missing,
}

impl CategoryKey {
    pub fn as_option(&self) -> Option<&str> {
        match self {
            CategoryKey::Named(name) => Some(name.as_str()),
            CategoryKey::Missing => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option().unwrap_or(MISSING_CATEGORY_KEY))
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accumulators of the metric columns for one group of rows.
#[derive(Debug, Clone, Default)]
pub struct GroupAccumulators {
    pub rows: usize,
    pub base_yield: Accumulator,
    pub cost: Accumulator,
    pub environmental_impact: Accumulator,
}

/// Metric columns of a table after numeric coercion; `None` marks a column
/// the table does not have.
pub struct MetricColumns {
    pub base_yield: Option<Vec<Option<f64>>>,
    pub cost: Option<Vec<Option<f64>>>,
    pub environmental_impact: Option<Vec<Option<f64>>>,
}

impl MetricColumns {
    pub fn from_table(table: &RawTable) -> Self {
        Self {
            base_yield: table.numeric_column(COL_BASE_YIELD),
            cost: table.numeric_column(COL_COST),
            environmental_impact: table.numeric_column(COL_ENVIRONMENTAL_IMPACT),
        }
    }
}

fn cell(column: &Option<Vec<Option<f64>>>, row: usize) -> Option<f64> {
    column.as_ref().and_then(|values| values[row])
}

/// Accumulate metric columns per category in one pass over the rows.
/// Returns `None` when the table has no `Category` column.
pub fn group_by_category(
    table: &RawTable,
    columns: &MetricColumns,
) -> Option<BTreeMap<CategoryKey, GroupAccumulators>> {
    let categories = table.column(COL_CATEGORY)?;

    let mut groups: BTreeMap<CategoryKey, GroupAccumulators> = BTreeMap::new();
    for (row, category) in categories.enumerate() {
        let key = match category {
            Some(name) => CategoryKey::Named(name.to_string()),
            None => CategoryKey::Missing,
        };
        let group = groups.entry(key).or_default();
        group.rows += 1;
        group.base_yield.push(cell(&columns.base_yield, row));
        group.cost.push(cell(&columns.cost, row));
        group.environmental_impact.push(cell(&columns.environmental_impact, row));
    }
    Some(groups)
}
