//! Bounded Product Catalog Library
//!
//! This library crate defines the core modules of the catalog search node.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`catalog`**: The in-memory product store. A write-once, concurrently readable map
//!   from product id to product, filled once at startup by a synthetic bulk load.
//! - **`search`**: The bounded search engine. Every query inspects a fixed window of 100
//!   products, so response time stays flat regardless of catalog size.
//! - **`config`**: Startup settings (bind address, catalog size, log level).

pub mod catalog;
pub mod config;
pub mod search;

use axum::{Extension, Router, routing::get};
use search::engine::BoundedSearch;
use search::handlers::{handle_not_found, handle_search, handle_stats};
use std::sync::Arc;

/// Builds the HTTP router serving `/search` and `/stats`.
pub fn router(engine: Arc<BoundedSearch>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/stats", get(handle_stats))
        .fallback(handle_not_found)
        .layer(Extension(engine))
}
