//! Error types for catalog lookups and flag-asset retrieval.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A strict lookup or parse found no entry for the given key.
    #[error("no {catalog} entry matches {key:?}")]
    NotFound {
        /// Which catalog was searched.
        catalog: &'static str,
        /// The key, long code, or free-text input that missed.
        key: String,
    },

    /// A strict parse was handed no input at all.
    #[error("no {0} value provided")]
    MissingInput(&'static str),

    /// A flag asset file could not be opened or read.
    #[error("failed to read flag asset {path:?}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The image engine could not decode, scale, or encode a flag asset.
    #[error("failed to rasterize flag asset {path:?}: {reason}")]
    Rasterization { path: PathBuf, reason: String },

    /// JSON encoding of a record failed.
    #[error("record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using the crate's [`CatalogError`] type.
pub type Result<T> = std::result::Result<T, CatalogError>;
