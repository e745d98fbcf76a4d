//! Shared application state.

use std::sync::Arc;

use catalog::Catalog;
use chrono::NaiveDate;
use query::QueryEngine;

use crate::clock::{Clock, SystemClock};
use crate::config::MapsConfig;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub query: QueryEngine,
    pub maps: MapsConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state over `catalog` using the system clock.
    pub fn new(catalog: Catalog, maps: MapsConfig) -> Self {
        Self {
            query: QueryEngine::new(Arc::new(catalog)),
            maps,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for upcoming-event queries.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("monasteries", &self.query.monasteries().len())
            .field("events", &self.query.events().len())
            .field("maps", &self.maps)
            .finish()
    }
}
