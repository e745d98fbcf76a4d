//! Frontend configuration endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Presentation-safe settings the frontend needs to boot the map.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigResponse {
    pub google_maps_api_key: Option<String>,
    pub google_maps_map_id: String,
}

/// GET /api/config: returns map provider settings.
pub async fn get(State(state): State<Arc<AppState>>) -> Json<ClientConfigResponse> {
    Json(ClientConfigResponse {
        google_maps_api_key: state.maps.api_key.clone(),
        google_maps_map_id: state.maps.map_id.clone(),
    })
}
