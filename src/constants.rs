/// Column names of the product dataset, in file order.
pub const COL_ID: &str = "Id";
pub const COL_NAME: &str = "Name";
pub const COL_CODE: &str = "Code";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_CATEGORY: &str = "Category";
pub const COL_IS_ACTIVE: &str = "IsActive";
pub const COL_DISCONTINUED_AT: &str = "DiscontinuedAt";
pub const COL_BASE_YIELD: &str = "BaseYield";
pub const COL_NUTRITIONAL_VALUE: &str = "NutritionalValue";
pub const COL_COST: &str = "Cost";
pub const COL_ENVIRONMENTAL_IMPACT: &str = "EnvironmentalImpact";
pub const COL_NOTES: &str = "Notes";
pub const COL_SUPPLIER: &str = "Supplier";
pub const COL_SHELF_LIFE: &str = "ShelfLife";

pub const ALL_COLUMNS: [&str; 14] = [
    COL_ID,
    COL_NAME,
    COL_CODE,
    COL_DESCRIPTION,
    COL_CATEGORY,
    COL_IS_ACTIVE,
    COL_DISCONTINUED_AT,
    COL_BASE_YIELD,
    COL_NUTRITIONAL_VALUE,
    COL_COST,
    COL_ENVIRONMENTAL_IMPACT,
    COL_NOTES,
    COL_SUPPLIER,
    COL_SHELF_LIFE,
];

/// Columns the integrity checker expects to find.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    COL_ID,
    COL_NAME,
    COL_CODE,
    COL_CATEGORY,
    COL_IS_ACTIVE,
    COL_BASE_YIELD,
    COL_NUTRITIONAL_VALUE,
    COL_COST,
    COL_ENVIRONMENTAL_IMPACT,
    COL_SHELF_LIFE,
];

/// Columns that must never hold nulls.
pub const NON_NULLABLE_COLUMNS: [&str; 5] = [COL_ID, COL_NAME, COL_CODE, COL_CATEGORY, COL_IS_ACTIVE];

/// Numeric columns that must not be negative.
pub const NUMERIC_COLUMNS: [&str; 4] = [
    COL_BASE_YIELD,
    COL_NUTRITIONAL_VALUE,
    COL_COST,
    COL_ENVIRONMENTAL_IMPACT,
];

/// The subset of columns the metrics stages read.
pub const METRICS_COLUMNS: [&str; 4] = [COL_CATEGORY, COL_BASE_YIELD, COL_COST, COL_ENVIRONMENTAL_IMPACT];

/// Cell values read back as null.
pub const NA_TOKENS: [&str; 11] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "<NA>", "#N/A",
];

/// Key of the per-category bucket for rows without a category.
pub const MISSING_CATEGORY_KEY: &str = "nan";

pub const DEFAULT_NUM_SAMPLES: usize = 50;
pub const DEFAULT_HEAD_ROWS: usize = 5;

// Configuration sources
pub const CONFIG_FILE_NAME: &str = "catalog_datasets.toml";
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";
pub const DATASET_PATH_ENV: &str = "CATALOG_DATASET_PATH";
pub const LOG_DIR_ENV: &str = "CATALOG_LOG_DIR";
