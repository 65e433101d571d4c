//! Catalog Data Types
//!
//! The product entity served by the search API and the fixed vocabularies used to
//! generate it.

use serde::{Deserialize, Serialize};

/// Brand names. A product's brand is picked by `id % BRANDS.len()`.
pub const BRANDS: [&str; 10] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
];

/// Category names. A product's category is picked by `id % CATEGORIES.len()`.
pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Books",
    "Home",
    "Sports",
    "Toys",
    "Fashion",
    "Garden",
    "Automotive",
    "Health",
    "Office",
];

/// Adjectives drawn at random for product descriptions.
pub const ADJECTIVES: [&str; 10] = [
    "Premium",
    "Professional",
    "Essential",
    "Ultimate",
    "Advanced",
    "Basic",
    "Deluxe",
    "Standard",
    "Plus",
    "Pro",
];

/// Product type words drawn at random for product descriptions.
pub const PRODUCT_TYPES: [&str; 10] = [
    "Device",
    "Tool",
    "Kit",
    "System",
    "Solution",
    "Package",
    "Bundle",
    "Set",
    "Collection",
    "Series",
];

/// A single catalog entry.
///
/// Immutable once inserted into the `ProductStore`. The JSON shape is
/// `{id, name, category, description, brand}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub brand: String,
}

impl Product {
    /// Case-insensitive substring match against name or category.
    ///
    /// `needle` must already be lowercased. Description and brand are not searched.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}
