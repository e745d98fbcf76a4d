//! Integration tests for the API server.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use api::clock::FixedClock;
use api::config::{Config, MapsConfig};
use api::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog::{Catalog, Event, EventId, Monastery, MonasteryId};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn mid(n: u64) -> MonasteryId {
    MonasteryId::new(n).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_catalog() -> Catalog {
    let monasteries = vec![
        Monastery::new(mid(1), "Rumtek Monastery", "East")
            .with_description("Seat of the Karmapa")
            .with_coordinates(27.2885, 88.5615)
            .with_virtual_tour("https://tours.example/rumtek"),
        Monastery::new(mid(2), "Pemayangtse Monastery", "west")
            .with_description("Perfect sublime lotus"),
    ];
    let events = vec![
        Event::new(
            EventId::new(1).unwrap(),
            mid(1),
            "Losar",
            day(2024, 1, 1),
            "Festival",
        )
        .with_monastery_name("Rumtek Monastery"),
        Event::new(
            EventId::new(2).unwrap(),
            mid(2),
            "Bumchu",
            day(2024, 6, 1),
            "Sacred Ritual",
        )
        .with_monastery_name("Pemayangtse Monastery"),
        Event::new(
            EventId::new(3).unwrap(),
            mid(1),
            "Cham Dance",
            day(2024, 4, 10),
            "Dance Festival",
        )
        .with_monastery_name("Rumtek Monastery"),
    ];
    Catalog::from_parts(monasteries, events)
}

fn state_with(catalog: Catalog, maps: MapsConfig) -> Arc<AppState> {
    Arc::new(AppState::new(catalog, maps).with_clock(FixedClock(day(2024, 3, 1))))
}

fn setup() -> axum::Router {
    let state = state_with(sample_catalog(), MapsConfig::default());
    api::create_app(state, get_metrics_handle(), None)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

fn ids(json: &serde_json::Value) -> Vec<u64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check_reports_catalog_size() {
    let (status, json) = get_json(setup(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["monasteries"], 2);
    assert_eq!(json["events"], 3);
}

#[tokio::test]
async fn test_config_defaults() {
    let (status, json) = get_json(setup(), "/api/config").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["googleMapsApiKey"].is_null());
    assert_eq!(json["googleMapsMapId"], "YOUR_MAP_ID_HERE");
}

#[tokio::test]
async fn test_config_exposes_map_settings() {
    let maps = MapsConfig {
        api_key: Some("key-123".to_string()),
        map_id: "map-456".to_string(),
    };
    let app = api::create_app(
        state_with(sample_catalog(), maps),
        get_metrics_handle(),
        None,
    );

    let (_, json) = get_json(app, "/api/config").await;

    assert_eq!(json["googleMapsApiKey"], "key-123");
    assert_eq!(json["googleMapsMapId"], "map-456");
}

#[tokio::test]
async fn test_list_monasteries() {
    let (status, json) = get_json(setup(), "/api/monasteries").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 2]);
    assert_eq!(json[0]["virtualTourUrl"], "https://tours.example/rumtek");
    assert!(json[1].get("virtualTourUrl").is_none());
}

#[tokio::test]
async fn test_get_monastery() {
    let (status, json) = get_json(setup(), "/api/monasteries/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Pemayangtse Monastery");
    assert_eq!(json["region"], "west");
}

#[tokio::test]
async fn test_get_nonexistent_monastery() {
    let (status, json) = get_json(setup(), "/api/monasteries/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Monastery not found");
}

#[tokio::test]
async fn test_get_monastery_with_non_numeric_id() {
    let (status, json) = get_json(setup(), "/api/monasteries/rumtek").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Monastery not found");
}

#[tokio::test]
async fn test_monasteries_by_region_ignores_case() {
    let (status, json) = get_json(setup(), "/api/monasteries/region/WEST").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![2]);

    let (_, json) = get_json(setup(), "/api/monasteries/region/South").await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_search() {
    let (_, json) = get_json(setup(), "/api/search?q=LOTUS").await;
    assert_eq!(ids(&json), vec![2]);

    let (_, json) = get_json(setup(), "/api/search?q=monastery").await;
    assert_eq!(ids(&json), vec![1, 2]);

    let (_, json) = get_json(setup(), "/api/search?q=nothing-matches").await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_search_without_query_returns_everything() {
    let (_, json) = get_json(setup(), "/api/search").await;
    assert_eq!(ids(&json), vec![1, 2]);

    let (_, json) = get_json(setup(), "/api/search?q=").await;
    assert_eq!(ids(&json), vec![1, 2]);
}

#[tokio::test]
async fn test_tours_lists_monasteries_with_virtual_tour() {
    let (_, json) = get_json(setup(), "/api/tours").await;
    assert_eq!(ids(&json), vec![1]);
}

#[tokio::test]
async fn test_list_events_in_catalog_order() {
    let (status, json) = get_json(setup(), "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 2, 3]);
    assert_eq!(json[0]["type"], "Festival");
    assert_eq!(json[0]["date"], "2024-01-01");
    assert_eq!(json[0]["monasteryName"], "Rumtek Monastery");
}

#[tokio::test]
async fn test_upcoming_events_use_injected_clock() {
    let (status, json) = get_json(setup(), "/api/events/upcoming").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![3, 2]);
}

#[tokio::test]
async fn test_events_for_monastery() {
    let (_, json) = get_json(setup(), "/api/events/monastery/1").await;
    assert_eq!(ids(&json), vec![1, 3]);

    let (_, json) = get_json(setup(), "/api/events/monastery/42").await;
    assert_eq!(json, serde_json::json!([]));

    let (status, json) = get_json(setup(), "/api/events/monastery/abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_events_by_category() {
    let (_, json) = get_json(setup(), "/api/events/filter/festivals").await;
    assert_eq!(ids(&json), vec![1, 3]);

    let (_, json) = get_json(setup(), "/api/events/filter/rituals").await;
    assert_eq!(ids(&json), vec![2]);

    let (_, json) = get_json(setup(), "/api/events/filter/upcoming").await;
    assert_eq!(ids(&json), vec![3, 2]);

    let (_, all) = get_json(setup(), "/api/events/filter/all").await;
    let (_, unknown) = get_json(setup(), "/api/events/filter/unknown-key").await;
    assert_eq!(ids(&all), vec![1, 3, 2]);
    assert_eq!(all, unknown);
}

#[tokio::test]
async fn test_stats() {
    let (status, json) = get_json(setup(), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "totalMonasteries": 2,
            "totalEvents": 3,
            "regions": ["East", "west"],
            "upcomingEvents": 2
        })
    );
}

#[tokio::test]
async fn test_unknown_api_route_returns_json_404() {
    let (status, json) = get_json(setup(), "/api/pilgrimages").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Route not found");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_default_state_with_missing_data_serves_empty_catalog() {
    let config = Config {
        data_dir: "/definitely/not/a/data/dir".into(),
        ..Config::default()
    };
    let app = api::create_app(
        api::create_default_state(&config),
        get_metrics_handle(),
        None,
    );

    let (status, json) = get_json(app.clone(), "/api/monasteries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));

    let (_, json) = get_json(app, "/api/stats").await;
    assert_eq!(json["totalMonasteries"], 0);
    assert_eq!(json["regions"], serde_json::json!([]));
}

#[tokio::test]
async fn test_default_state_loads_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(Catalog::MONASTERIES_FILE),
        r#"[{"id": 7, "name": "Enchey Monastery", "region": "East"}]"#,
    )
    .unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let app = api::create_app(
        api::create_default_state(&config),
        get_metrics_handle(),
        None,
    );

    let (status, json) = get_json(app, "/api/monasteries/7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Enchey Monastery");
}

#[tokio::test]
async fn test_static_dir_serves_frontend() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Monastery360</h1>").unwrap();
    let state = state_with(sample_catalog(), MapsConfig::default());
    let app = api::create_app(state, get_metrics_handle(), Some(Path::new(dir.path())));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"<h1>Monastery360</h1>");

    let (status, json) = get_json(app, "/api/monasteries/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Rumtek Monastery");
}
