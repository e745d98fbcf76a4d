//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error type that maps to HTTP responses.
///
/// Queries never fail; this only carries the HTTP-facing translation of
/// "nothing matched" for single-resource lookups and unknown API paths.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
}

impl ApiError {
    /// The not-found error for a monastery lookup.
    pub fn monastery_not_found() -> Self {
        ApiError::NotFound("Monastery not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}
