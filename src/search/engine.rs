use super::error::SearchError;
use super::types::{SearchConfig, SearchOutcome, StatsResponse};
use crate::catalog::store::ProductStore;
use crate::catalog::types::{BRANDS, CATEGORIES};

use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

/// Bounded-cost product search.
///
/// Every call looks up exactly `window_size` consecutive ids starting at a random
/// offset, so latency does not grow with the catalog. Matches outside the window are
/// never seen.
pub struct BoundedSearch {
    store: Arc<ProductStore>,
    config: SearchConfig,
}

impl BoundedSearch {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: Arc<ProductStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<ProductStore> {
        &self.store
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        self.search_with_rng(query, &mut rand::thread_rng())
    }

    /// Runs a search whose window start is drawn from `rng`.
    pub fn search_with_rng<R: Rng + ?Sized>(
        &self,
        query: &str,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        let needle = normalize_query(query)?;
        let window_start = self.pick_window_start(rng);

        Ok(self.scan(&needle, window_start, started))
    }

    /// Scans the window beginning at `window_start` instead of a random one.
    pub fn search_window(&self, query: &str, window_start: u64) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        let needle = normalize_query(query)?;

        Ok(self.scan(&needle, window_start, started))
    }

    pub fn stats(&self) -> StatsResponse {
        StatsResponse {
            total_products: self.store.count(),
            products_per_search: self.config.window_size,
            max_results: self.config.max_results,
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            brands: BRANDS.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Picks a start in `[1, count - window_size]`.
    ///
    /// A catalog no larger than one window has no room for a random offset; the window
    /// is pinned at id 1 and covers the whole catalog.
    fn pick_window_start<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let count = self.store.count();
        if count <= self.config.window_size {
            tracing::debug!(
                "Catalog holds {} products, scanning from id 1 instead of a random window",
                count
            );
            return 1;
        }
        rng.gen_range(1..=count - self.config.window_size)
    }

    fn scan(&self, needle: &str, window_start: u64, started: Instant) -> SearchOutcome {
        let mut products = Vec::with_capacity(self.config.max_results);
        let mut total_found = 0;
        let mut examined = 0;

        for id in window_start..window_start.saturating_add(self.config.window_size) {
            let lookup = self.store.get(id);
            examined += 1;

            let Some(product) = lookup else {
                continue;
            };

            if product.matches(needle) {
                total_found += 1;
                if products.len() < self.config.max_results {
                    products.push(product);
                }
            }
        }

        let elapsed = started.elapsed();
        tracing::debug!(
            "Search '{}' window {}..{} found {} (returned {}) in {:?}",
            needle,
            window_start,
            window_start.saturating_add(examined),
            total_found,
            products.len(),
            elapsed
        );

        SearchOutcome {
            products,
            total_found,
            elapsed,
            window_start,
            examined,
        }
    }
}

/// Lowercases the query, rejecting empty input.
///
/// Whitespace is significant: `" "` is a valid query that matches every multi-word name.
pub fn normalize_query(query: &str) -> Result<String, SearchError> {
    if query.is_empty() {
        return Err(SearchError::InvalidQuery);
    }
    Ok(query.to_lowercase())
}
