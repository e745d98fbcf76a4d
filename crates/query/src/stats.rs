//! Aggregate statistics over the catalog.

use std::collections::HashSet;

use catalog::{Catalog, Monastery};
use chrono::NaiveDate;
use serde::Serialize;

/// Summary counts and the region facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_monasteries: usize,
    pub total_events: usize,
    /// Distinct regions in first-seen order.
    pub regions: Vec<String>,
    /// Number of events on or after the reference date.
    #[serde(rename = "upcomingEvents")]
    pub upcoming_event_count: usize,
}

impl CatalogStats {
    /// Computes statistics for `catalog` as of `today`.
    pub fn compute(catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            total_monasteries: catalog.monasteries().len(),
            total_events: catalog.events().len(),
            regions: distinct_regions(catalog.monasteries()),
            upcoming_event_count: catalog
                .events()
                .iter()
                .filter(|e| e.is_upcoming(today))
                .count(),
        }
    }
}

/// Distinct region strings in first-seen order.
///
/// Deduplication is exact; differently-cased spellings stay separate facets.
pub fn distinct_regions(monasteries: &[Monastery]) -> Vec<String> {
    let mut seen = HashSet::new();
    monasteries
        .iter()
        .filter(|m| seen.insert(m.region.as_str()))
        .map(|m| m.region.clone())
        .collect()
}
