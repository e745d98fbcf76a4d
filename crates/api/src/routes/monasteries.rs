//! Monastery listing, lookup, region filter and search endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use catalog::MonasteryId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/monasteries: every monastery in catalog order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Response {
    Json(state.query.monasteries()).into_response()
}

/// GET /api/monasteries/:id: one monastery, 404 when absent.
///
/// A non-numeric id cannot match anything and is reported the same way.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let monastery = id
        .parse::<MonasteryId>()
        .ok()
        .and_then(|id| state.query.monastery(id))
        .ok_or_else(ApiError::monastery_not_found)?;
    Ok(Json(monastery).into_response())
}

/// GET /api/monasteries/region/:region: case-insensitive region filter.
#[tracing::instrument(skip(state))]
pub async fn by_region(
    State(state): State<Arc<AppState>>,
    Path(region): Path<String>,
) -> Response {
    Json(state.query.by_region(&region)).into_response()
}

/// GET /api/search?q=: text search; a missing or empty `q` returns everything.
#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    Json(state.query.search(params.q.as_deref())).into_response()
}

/// GET /api/tours: monasteries offering a virtual tour.
#[tracing::instrument(skip(state))]
pub async fn tours(State(state): State<Arc<AppState>>) -> Response {
    Json(state.query.virtual_tours()).into_response()
}
