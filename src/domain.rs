use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::coerce::format_days;

/// Product category, mirroring the catalog's fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Food,
    Supplement,
    Beverage,
    Material,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Supplement,
        Category::Beverage,
        Category::Material,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Supplement => "Supplement",
            Category::Beverage => "Beverage",
            Category::Material => "Material",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shelf life in whole days, written as `"<n> days"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLife(pub i64);

impl Serialize for ShelfLife {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_days(self.0))
    }
}

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub category: Category,
    #[serde(serialize_with = "serialize_flag")]
    pub is_active: bool,
    #[serde(serialize_with = "serialize_timestamp")]
    pub discontinued_at: Option<NaiveDateTime>,
    pub base_yield: f64,
    pub nutritional_value: f64,
    pub cost: f64,
    pub environmental_impact: f64,
    pub notes: Option<String>,
    pub supplier: Option<String>,
    pub shelf_life: ShelfLife,
}

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

fn serialize_timestamp<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_text_matches_serialized_value() {
        for category in Category::ALL {
            assert_eq!(serde_json::to_value(category).unwrap(), category.to_string());
        }
        assert_eq!(Category::Beverage.as_str(), "Beverage");
    }
}
