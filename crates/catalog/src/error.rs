//! Catalog loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a catalog source.
///
/// These never escape [`crate::Catalog::load`]; the store logs them and
/// substitutes an empty collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid JSON.
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source parsed, but its top-level value is not an array.
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
