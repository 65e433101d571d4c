//! Search Service Module
//!
//! Answers product queries with a bounded amount of work per request.
//!
//! ## Overview
//! A query never walks the whole catalog. Each call picks a random window of 100
//! consecutive product ids, checks every product in it, and returns the first 20
//! matches together with the number of matches found inside the window. Latency is
//! therefore flat no matter how many products are loaded, at the price of missing
//! matches that fall outside the window.
//!
//! ## Submodules
//! - **`engine`**: Window selection and the scan itself.
//! - **`error`**: Error taxonomy and its HTTP mapping.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Tuning constants and Data Transfer Objects (DTOs).

pub mod engine;
pub mod error;
pub mod handlers;
pub mod types;
