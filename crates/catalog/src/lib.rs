//! Catalog store for monasteries and their events.
//!
//! This crate owns the data side of the application:
//! - [`Monastery`] and [`Event`] records with lenient, schema-checked decoding
//! - [`load_collection`] for reading a JSON array of records with fallback to empty
//! - [`Catalog`], the immutable snapshot shared by the query layer

pub mod error;
mod fields;
pub mod loader;
pub mod model;
pub mod store;

pub use common::{EventId, MonasteryId};
pub use error::{CatalogError, Result};
pub use loader::{Record, load_collection, parse_collection, read_collection};
pub use model::{ContactInfo, Event, Monastery};
pub use store::Catalog;
