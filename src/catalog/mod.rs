//! Closed reference catalogs and the generic lookup engine over them.
//!
//! # Module Organization
//!
//! - [`lookup`]: the generic [`Catalog`] engine shared by both vocabularies
//! - [`country`] / [`region`]: the two catalog specializations
//! - [`error`]: the crate error taxonomy
//! - `flag`: flag-asset retrieval and rasterization, surfaced through
//!   [`Country`] methods
//! - `dataset`: the embedded static tables both catalogs read from
//!
//! Catalog data is compiled into the binary and never mutated, so every
//! lookup is a plain read against immutable state and concurrent readers
//! need no synchronization. Only the flag-asset operations touch external
//! resources (a blocking file read and a blocking raster encode).

pub mod country;
pub mod error;
pub mod lookup;
pub mod region;

mod dataset;
mod flag;

pub use country::Country;
pub use error::{CatalogError, Result};
pub use flag::DEFAULT_PNG_WIDTH;
pub use lookup::{Catalog, ParseInput};
pub use region::Region;
