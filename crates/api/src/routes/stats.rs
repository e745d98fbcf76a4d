//! Catalog statistics endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use query::CatalogStats;

use crate::state::AppState;

/// GET /api/stats: counts, region facet and upcoming-event total.
#[tracing::instrument(skip(state))]
pub async fn get(State(state): State<Arc<AppState>>) -> Json<CatalogStats> {
    Json(state.query.stats(state.today()))
}
