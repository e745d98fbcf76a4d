//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Default map id handed to the frontend when none is configured.
pub const DEFAULT_MAP_ID: &str = "YOUR_MAP_ID_HERE";

/// Map provider settings exposed to the frontend through `/api/config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsConfig {
    pub api_key: Option<String>,
    pub map_id: String,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            map_id: DEFAULT_MAP_ID.to_string(),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DATA_DIR`: directory holding `monasteries.json` and `events.json` (default: `"data"`)
/// - `STATIC_DIR`: frontend assets to serve at `/` (default: none)
/// - `GOOGLE_MAPS_API_KEY`: map provider key (default: none)
/// - `GOOGLE_MAPS_MAP_ID`: map style id (default: [`DEFAULT_MAP_ID`])
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub data_dir: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub maps: MapsConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            data_dir: get("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            maps: MapsConfig {
                api_key: get("GOOGLE_MAPS_API_KEY"),
                map_id: get("GOOGLE_MAPS_MAP_ID").unwrap_or(defaults.maps.map_id),
            },
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            data_dir: PathBuf::from("data"),
            static_dir: None,
            maps: MapsConfig::default(),
        }
    }
}

/// Loads a `.env` file from the working directory or its parents, if present.
///
/// Returns the path that was loaded. A missing file is not an error.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
