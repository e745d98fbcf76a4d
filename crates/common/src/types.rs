use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a raw value cannot be normalized into an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier {0:?}: expected a positive integer")]
pub struct InvalidId(pub String);

/// Wire representation accepted for identifiers.
///
/// Source documents are hand-edited, so ids show up both as JSON numbers
/// as whole floats (`2.0`) and as numeric strings. All normalize to the
/// same integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Float(f64),
    Text(String),
}

fn normalize(raw: RawId) -> Result<u64, InvalidId> {
    match raw {
        RawId::Number(0) => Err(InvalidId("0".to_string())),
        RawId::Number(n) => Ok(n),
        RawId::Float(f) if is_whole_positive(f) => Ok(f as u64),
        RawId::Float(f) => Err(InvalidId(f.to_string())),
        RawId::Text(s) => parse_positive(&s),
    }
}

fn is_whole_positive(f: f64) -> bool {
    f.is_finite() && f >= 1.0 && f.fract() == 0.0 && f < u64::MAX as f64
}

fn parse_positive(s: &str) -> Result<u64, InvalidId> {
    match s.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InvalidId(s.to_string())),
    }
}

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a positive integer.
            pub fn new(value: u64) -> Result<Self, InvalidId> {
                normalize(RawId::Number(value)).map(Self)
            }

            /// Returns the underlying integer.
            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_positive(s).map(Self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = RawId::deserialize(deserializer)?;
                normalize(raw).map(Self).map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id!(
    /// Unique identifier for a monastery in the catalog.
    MonasteryId
);

integer_id!(
    /// Unique identifier for a scheduled event.
    EventId
);
