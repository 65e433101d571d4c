use super::engine::BoundedSearch;
use super::error::SearchError;
use super::types::{SearchParams, SearchResponse, StatsResponse};

use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(engine): Extension<Arc<BoundedSearch>>,
) -> Response {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return SearchError::InvalidQuery.into_response(),
    };

    match engine.search(&query) {
        Ok(outcome) => (
            StatusCode::OK,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(SearchResponse::from(outcome)),
        )
            .into_response(),
        Err(e) => {
            tracing::debug!("Rejected search '{}': {}", query, e);
            e.into_response()
        }
    }
}

pub async fn handle_stats(Extension(engine): Extension<Arc<BoundedSearch>>) -> Json<StatsResponse> {
    Json(engine.stats())
}

pub async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
