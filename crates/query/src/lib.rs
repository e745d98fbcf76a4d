//! Query engine for the monastery catalog.
//!
//! Every operation is a pure read over an immutable [`catalog::Catalog`]:
//! - [`QueryEngine`] for lookups, region filters, text search and event views
//! - [`EventFilter`] for the closed set of event categories
//! - [`CatalogStats`] for aggregate counts and the region facet
//!
//! "Today" is always passed in by the caller; nothing here reads the clock.

pub mod engine;
pub mod filter;
pub mod stats;

pub use engine::QueryEngine;
pub use filter::EventFilter;
pub use stats::CatalogStats;
