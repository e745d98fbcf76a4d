//! Shared types for the monastery catalog crates.

pub mod types;

pub use types::{EventId, InvalidId, MonasteryId};
