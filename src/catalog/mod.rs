//! Product Catalog Module
//!
//! Holds every product the node serves, keyed by a dense numeric identifier.
//!
//! ## Core Concepts
//! - **Write-once**: Products are inserted exactly once during the startup bulk load and
//!   are never mutated or removed afterwards.
//! - **Concurrent access**: `ProductStore` is a sharded map plus an atomic counter, so
//!   lookups and inserts never need external locking.
//! - **Vocabulary**: Brands, categories and descriptor words are immutable constant
//!   tables shared by the whole process.
//!
//! ## Submodules
//! - **`generator`**: Synthetic bulk load producing ids `1..=N`.
//! - **`store`**: The concurrent product store.
//! - **`types`**: The `Product` entity and vocabulary tables.

pub mod generator;
pub mod store;
pub mod types;
