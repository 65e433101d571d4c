//! Synthetic Catalog Generator
//!
//! Bulk-loads the store at startup. Identifiers, brands and categories are derived
//! from the id so the catalog layout is deterministic; only the description words
//! are random.

use super::store::ProductStore;
use super::types::{ADJECTIVES, BRANDS, CATEGORIES, PRODUCT_TYPES, Product};

use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

/// Builds the product with the given id, drawing description words from `rng`.
pub fn build_product<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Product {
    let brand = BRANDS[(id % BRANDS.len() as u64) as usize];
    let category = CATEGORIES[(id % CATEGORIES.len() as u64) as usize];
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or(ADJECTIVES[0]);
    let product_type = PRODUCT_TYPES.choose(rng).copied().unwrap_or(PRODUCT_TYPES[0]);

    Product {
        id,
        name: format!("Product {} {}", brand, id),
        category: category.to_string(),
        description: format!(
            "{} {} {} - High quality product for your needs",
            adjective, brand, product_type
        ),
        brand: brand.to_string(),
    }
}

/// Inserts products `1..=count` into `store`.
pub fn generate_products(store: &ProductStore, count: u64) {
    generate_products_with_rng(store, count, &mut rand::thread_rng());
}

/// Same as `generate_products`, with a caller-supplied source of randomness.
pub fn generate_products_with_rng<R: Rng + ?Sized>(store: &ProductStore, count: u64, rng: &mut R) {
    let started = Instant::now();

    for id in 1..=count {
        store.insert(build_product(id, rng));
    }

    tracing::info!(
        "Generated {} products in {:.3}s",
        count,
        started.elapsed().as_secs_f64()
    );
}
