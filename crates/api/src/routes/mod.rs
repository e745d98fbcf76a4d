//! HTTP handlers grouped by resource.

pub mod client_config;
pub mod events;
pub mod monasteries;
pub mod ops;
pub mod stats;

use crate::error::ApiError;

/// Fallback for unmatched `/api/*` paths, so API clients get JSON rather
/// than a static-file 404.
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
