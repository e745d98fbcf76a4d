//! Lookups, filters and search over an immutable catalog.

use std::sync::Arc;

use catalog::{Catalog, Event, Monastery, MonasteryId};
use chrono::NaiveDate;

use crate::filter::EventFilter;
use crate::stats::{CatalogStats, distinct_regions};

/// Read-only query surface over a shared [`Catalog`] snapshot.
///
/// Cloning is cheap and every method takes `&self`, so one engine can serve
/// any number of concurrent callers without locking. Results borrow from
/// the snapshot and keep source order unless documented otherwise.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    /// Creates an engine over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns the underlying snapshot.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns every monastery.
    pub fn monasteries(&self) -> &[Monastery] {
        self.catalog.monasteries()
    }

    /// Returns every event.
    pub fn events(&self) -> &[Event] {
        self.catalog.events()
    }

    /// Looks up a monastery by id.
    pub fn monastery(&self, id: MonasteryId) -> Option<&Monastery> {
        self.monasteries().iter().find(|m| m.id == id)
    }

    /// Monasteries whose region equals `region`, ignoring case.
    pub fn by_region(&self, region: &str) -> Vec<&Monastery> {
        let region = region.to_lowercase();
        self.monasteries()
            .iter()
            .filter(|m| m.region.to_lowercase() == region)
            .collect()
    }

    /// Case-insensitive substring search over name, description and region.
    ///
    /// A missing or empty query returns every monastery.
    pub fn search(&self, query: Option<&str>) -> Vec<&Monastery> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return self.monasteries().iter().collect();
        };
        let needle = query.to_lowercase();
        self.monasteries()
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&needle)
                    || m.description.to_lowercase().contains(&needle)
                    || m.region.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Monasteries that offer a virtual tour.
    pub fn virtual_tours(&self) -> Vec<&Monastery> {
        self.monasteries()
            .iter()
            .filter(|m| m.has_virtual_tour())
            .collect()
    }

    /// Events hosted by `monastery_id`.
    pub fn events_for(&self, monastery_id: MonasteryId) -> Vec<&Event> {
        self.events()
            .iter()
            .filter(|e| e.monastery_id == monastery_id)
            .collect()
    }

    /// Events on or after `today`, earliest first.
    ///
    /// Events sharing a date keep their source order.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&Event> {
        self.events_by_category(EventFilter::Upcoming, today)
    }

    /// Events in `filter`'s category, earliest first.
    ///
    /// The date ordering applies to every category, `All` included.
    pub fn events_by_category(&self, filter: EventFilter, today: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events()
            .iter()
            .filter(|e| filter.matches(e, today))
            .collect();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Distinct regions in first-seen order.
    pub fn regions(&self) -> Vec<String> {
        distinct_regions(self.monasteries())
    }

    /// Aggregate counts as of `today`.
    pub fn stats(&self, today: NaiveDate) -> CatalogStats {
        CatalogStats::compute(&self.catalog, today)
    }
}
