//! The immutable catalog snapshot.

use std::path::Path;

use crate::loader::{dedupe_by_id, load_collection};
use crate::model::{Event, Monastery};

/// Immutable snapshot of the monastery and event collections.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
/// There is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    monasteries: Vec<Monastery>,
    events: Vec<Event>,
}

impl Catalog {
    /// File name of the monastery collection inside a data directory.
    pub const MONASTERIES_FILE: &'static str = "monasteries.json";

    /// File name of the event collection inside a data directory.
    pub const EVENTS_FILE: &'static str = "events.json";

    /// Loads both collections from `data_dir`.
    ///
    /// Each collection falls back to empty independently, so a broken
    /// events file still leaves the monasteries available.
    #[tracing::instrument(skip_all, fields(data_dir = %data_dir.as_ref().display()))]
    pub fn load(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            monasteries: load_collection(&data_dir.join(Self::MONASTERIES_FILE)),
            events: load_collection(&data_dir.join(Self::EVENTS_FILE)),
        }
    }

    /// Builds a catalog from already-decoded records.
    ///
    /// Duplicate ids are dropped the same way as when loading from files.
    pub fn from_parts(monasteries: Vec<Monastery>, events: Vec<Event>) -> Self {
        Self {
            monasteries: dedupe_by_id(monasteries),
            events: dedupe_by_id(events),
        }
    }

    /// Returns all monasteries in source order.
    pub fn monasteries(&self) -> &[Monastery] {
        &self.monasteries
    }

    /// Returns all events in source order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns true if both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.monasteries.is_empty() && self.events.is_empty()
    }
}
