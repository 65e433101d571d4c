use crate::catalog::types::Product;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Products examined by a single search call.
pub const PRODUCTS_PER_SEARCH: u64 = 100;
/// Upper bound on products returned by a single search call.
pub const MAX_RESULTS: usize = 20;

/// Fixed tuning of the bounded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Width of the id window scanned per call.
    pub window_size: u64,
    /// Cap on returned products; matches beyond it are only counted.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_size: PRODUCTS_PER_SEARCH,
            max_results: MAX_RESULTS,
        }
    }
}

/// What one bounded search saw and kept.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching products in scan order, at most `max_results`.
    pub products: Vec<Product>,
    /// Matches inside the window, including those not returned.
    pub total_found: usize,
    pub elapsed: Duration,
    /// First id of the scanned window.
    pub window_start: u64,
    /// Number of id slots looked up.
    pub examined: u64,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub total_found: usize,
    /// Scan duration rendered as seconds, e.g. `"0.001s"`.
    pub search_time: String,
    pub search_time_seconds: f64,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        let seconds = outcome.elapsed.as_secs_f64();
        Self {
            products: outcome.products,
            total_found: outcome.total_found,
            search_time: format!("{:.3}s", seconds),
            search_time_seconds: seconds,
        }
    }
}

/// Read-only diagnostics snapshot served by `/stats`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_products: u64,
    pub products_per_search: u64,
    pub max_results: usize,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
