//! Search error types and their HTTP mapping.

use super::types::ErrorResponse;

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Errors surfaced by the search API.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search term was missing or blank.
    #[error("query parameter 'q' is required")]
    InvalidQuery,
}

impl SearchError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuery => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
