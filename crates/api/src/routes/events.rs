//! Event listing and category endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use catalog::{Event, MonasteryId};
use query::EventFilter;

use crate::state::AppState;

/// GET /api/events: every event in catalog order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Response {
    Json(state.query.events()).into_response()
}

/// GET /api/events/upcoming: events from today on, earliest first.
#[tracing::instrument(skip(state))]
pub async fn upcoming(State(state): State<Arc<AppState>>) -> Response {
    Json(state.query.upcoming_events(state.today())).into_response()
}

/// GET /api/events/monastery/:monasteryId: events hosted by one monastery.
///
/// A non-numeric id matches nothing and yields an empty list.
#[tracing::instrument(skip(state))]
pub async fn for_monastery(
    State(state): State<Arc<AppState>>,
    Path(monastery_id): Path<String>,
) -> Response {
    let events: Vec<&Event> = match monastery_id.parse::<MonasteryId>() {
        Ok(id) => state.query.events_for(id),
        Err(_) => Vec::new(),
    };
    Json(events).into_response()
}

/// GET /api/events/filter/:filter: events in a category, earliest first.
///
/// Unknown filter keys behave like `all`.
#[tracing::instrument(skip(state))]
pub async fn by_category(
    State(state): State<Arc<AppState>>,
    Path(filter): Path<String>,
) -> Response {
    let filter = EventFilter::parse_lenient(&filter);
    Json(state.query.events_by_category(filter, state.today())).into_response()
}
