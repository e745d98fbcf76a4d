//! Reading record collections from JSON sources.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{Event, Monastery};
use crate::{CatalogError, EventId, MonasteryId, Result};

/// A record type that can be loaded as a collection.
pub trait Record: DeserializeOwned {
    /// Identity type, unique within a collection.
    type Id: Copy + Eq + Hash + Display;

    /// Collection name used in diagnostics and metric labels.
    const KIND: &'static str;

    /// Returns the record's identity.
    fn id(&self) -> Self::Id;
}

impl Record for Monastery {
    type Id = MonasteryId;
    const KIND: &'static str = "monasteries";

    fn id(&self) -> MonasteryId {
        self.id
    }
}

impl Record for Event {
    type Id = EventId;
    const KIND: &'static str = "events";

    fn id(&self) -> EventId {
        self.id
    }
}

/// Loads a collection, falling back to an empty one on any source failure.
///
/// Failures are reported through `tracing` and the
/// `catalog_load_failures_total` counter; they never propagate.
pub fn load_collection<T: Record>(path: &Path) -> Vec<T> {
    match read_collection::<T>(path) {
        Ok(records) => {
            tracing::info!(
                kind = T::KIND,
                path = %path.display(),
                count = records.len(),
                "catalog collection loaded"
            );
            metrics::counter!("catalog_records_loaded_total", "kind" => T::KIND)
                .increment(records.len() as u64);
            records
        }
        Err(err) => {
            tracing::warn!(
                kind = T::KIND,
                path = %path.display(),
                error = %err,
                "catalog source unavailable, using empty collection"
            );
            metrics::counter!("catalog_load_failures_total", "kind" => T::KIND).increment(1);
            Vec::new()
        }
    }
}

/// Reads and decodes a collection file.
pub fn read_collection<T: Record>(path: &Path) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collection(&raw)
}

/// Decodes a JSON array of records.
///
/// Records that fail validation are skipped and duplicate ids keep their
/// first occurrence. Only a document that is not a JSON array is an error.
pub fn parse_collection<T: Record>(raw: &str) -> Result<Vec<T>> {
    let items = match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(kind = T::KIND, index, error = %err, "skipping malformed record");
            }
        }
    }
    Ok(dedupe_by_id(records))
}

/// Drops records whose id was already seen, preserving order.
pub(crate) fn dedupe_by_id<T: Record>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let id = record.id();
            let first = seen.insert(id);
            if !first {
                tracing::warn!(kind = T::KIND, %id, "duplicate id, keeping first occurrence");
            }
            first
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
