//! Read-only HTTP API for the monastery catalog.
//!
//! Serves the catalog's query engine as JSON under `/api`, with structured
//! logging (tracing), Prometheus metrics and optional static frontend hosting.

pub mod clock;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use catalog::Catalog;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use state::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// When `static_dir` is given, paths outside `/api`, `/health` and
/// `/metrics` are served from it, with `index.html` at `/`.
pub fn create_app(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    static_dir: Option<&Path>,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::ops::metrics))
        .with_state(metrics_handle);

    let api = Router::new()
        .route("/config", get(routes::client_config::get))
        .route("/monasteries", get(routes::monasteries::list))
        .route("/monasteries/{id}", get(routes::monasteries::get))
        .route(
            "/monasteries/region/{region}",
            get(routes::monasteries::by_region),
        )
        .route("/search", get(routes::monasteries::search))
        .route("/tours", get(routes::monasteries::tours))
        .route("/events", get(routes::events::list))
        .route("/events/upcoming", get(routes::events::upcoming))
        .route(
            "/events/monastery/{monastery_id}",
            get(routes::events::for_monastery),
        )
        .route("/events/filter/{filter}", get(routes::events::by_category))
        .route("/stats", get(routes::stats::get))
        .fallback(routes::api_not_found);

    let mut app = Router::new()
        .route("/health", get(routes::ops::health))
        .nest("/api", api)
        .with_state(state)
        .merge(metrics_router);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
}

/// Loads the catalog named by `config` and builds the application state.
///
/// Never fails: unreadable sources leave the matching collection empty.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    let catalog = Catalog::load(&config.data_dir);

    metrics::gauge!("catalog_monasteries").set(catalog.monasteries().len() as f64);
    metrics::gauge!("catalog_events").set(catalog.events().len() as f64);
    if catalog.is_empty() {
        tracing::warn!(data_dir = %config.data_dir.display(), "serving an empty catalog");
    }

    Arc::new(AppState::new(catalog, config.maps.clone()))
}
