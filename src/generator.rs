use chrono::{Duration, NaiveDateTime};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::domain::{Category, ProductRecord, ShelfLife};

const ACTIVE_PROBABILITY: f64 = 0.9;
const DISCONTINUED_PROBABILITY: f64 = 0.1;
const SUPPLIER_COUNT: usize = 5;
const CODE_OFFSET: usize = 1000;

/// Inputs of one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rows, at least one.
    pub num_samples: usize,
    /// Same seed and reference time give the same table.
    pub seed: Option<u64>,
    /// `DiscontinuedAt` values are measured back from this instant.
    pub reference_time: NaiveDateTime,
}

/// Generate a synthetic product table.
pub fn generate_dataset(config: &GeneratorConfig) -> Vec<ProductRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let products: Vec<ProductRecord> = (0..config.num_samples)
        .map(|i| generate_product(&mut rng, i, config.reference_time))
        .collect();

    info!(rows = products.len(), seed = ?config.seed, "Generated product dataset");
    products
}

fn generate_product(rng: &mut StdRng, index: usize, reference_time: NaiveDateTime) -> ProductRecord {
    let number = index + 1;

    let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    let is_active = rng.gen_bool(ACTIVE_PROBABILITY);
    let discontinued_at = if rng.gen_bool(DISCONTINUED_PROBABILITY) {
        Some(reference_time - Duration::days(rng.gen_range(0..365)))
    } else {
        None
    };

    ProductRecord {
        id,
        name: format!("Product_{number}"),
        code: format!("P{}", index + CODE_OFFSET),
        description: Some(format!("Description of product {number}")),
        category,
        is_active,
        discontinued_at,
        base_yield: rng.gen_range(50.0..100.0),
        nutritional_value: rng.gen_range(1.0..10.0),
        cost: rng.gen_range(10.0..100.0),
        environmental_impact: rng.gen_range(0.1..5.0),
        notes: Some(format!("Note {number}")),
        supplier: Some(format!("Supplier {}", index % SUPPLIER_COUNT + 1)),
        shelf_life: ShelfLife(rng.gen_range(30..365)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config(num_samples: usize, seed: Option<u64>) -> GeneratorConfig {
        GeneratorConfig {
            num_samples,
            seed,
            reference_time: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let first = generate_dataset(&config(25, Some(123)));
        let second = generate_dataset(&config(25, Some(123)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_dataset(&config(25, Some(1)));
        let second = generate_dataset(&config(25, Some(2)));
        assert_ne!(first, second);
    }

    #[test]
    fn test_row_count_and_sequential_fields() {
        for n in [1, 7, 10] {
            let products = generate_dataset(&config(n, Some(42)));
            assert_eq!(products.len(), n);
        }

        let products = generate_dataset(&config(6, Some(42)));
        assert_eq!(products[0].name, "Product_1");
        assert_eq!(products[0].code, "P1000");
        assert_eq!(products[5].supplier.as_deref(), Some("Supplier 1"));
        assert_eq!(products[4].notes.as_deref(), Some("Note 5"));
    }

    #[test]
    fn test_values_stay_in_their_ranges() {
        let cfg = config(500, Some(7));
        let products = generate_dataset(&cfg);

        for p in &products {
            assert!((50.0..100.0).contains(&p.base_yield));
            assert!((1.0..10.0).contains(&p.nutritional_value));
            assert!((10.0..100.0).contains(&p.cost));
            assert!((0.1..5.0).contains(&p.environmental_impact));
            assert!((30..365).contains(&p.shelf_life.0));
            if let Some(ts) = p.discontinued_at {
                let age = cfg.reference_time - ts;
                assert!(age >= Duration::zero() && age < Duration::days(365));
            }
        }

        let ids: std::collections::HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());

        let active = products.iter().filter(|p| p.is_active).count();
        assert!(active > 400, "expected roughly 90% active, got {active}");
    }
}
