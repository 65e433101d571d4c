use super::types::Product;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent, write-once product store.
///
/// Products live in a sharded `DashMap` keyed by id. A separate atomic counter tracks
/// how many products were inserted; it is bumped after the map write with `Release`
/// ordering and read with `Acquire`, so a reader that observes a count of `n` can see
/// every product whose insert contributed to it.
pub struct ProductStore {
    products: DashMap<u64, Product>,
    count: AtomicU64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            count: AtomicU64::new(0),
        }
    }

    /// Pre-sizes the map for a bulk load of `capacity` products.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            products: DashMap::with_capacity(capacity),
            count: AtomicU64::new(0),
        }
    }

    /// Inserts a product under its id.
    ///
    /// Returns `false` and leaves the existing entry untouched if the id is already
    /// taken. The count only grows on a successful insert.
    pub fn insert(&self, product: Product) -> bool {
        let id = product.id;
        let inserted = match self.products.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(product);
                self.count.fetch_add(1, Ordering::Release);
                true
            }
        };

        // Shard lock is released once the entry above is dropped
        if !inserted {
            tracing::warn!("Ignoring duplicate insert for product {}", id);
        }
        inserted
    }

    pub fn get(&self, id: u64) -> Option<Product> {
        self.products.get(&id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: u64) -> bool {
        self.products.contains_key(&id)
    }

    /// Number of products inserted so far. Never decreases.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
