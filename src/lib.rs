//! # country-catalog
//!
//! Closed, immutable catalogs of countries and their administrative
//! regions (states/provinces), with bidirectional code translation,
//! label and demonym lookup, flag-asset retrieval, and country→region
//! navigation.
//!
//! Every entry is addressable three ways: the catalog key (`"US"`,
//! `"US_CA"`), the snake_case long code (`"united_states"`,
//! `"united_states_california"`), and, through [`Catalog::parse`], an
//! already-resolved entry. Strict lookups fail on a miss; `try_*`
//! variants return `None` instead.

pub mod catalog;

// Re-export the main types for convenience
pub use catalog::{
    error::{CatalogError, Result},
    Catalog,
    Country,
    ParseInput,
    Region,
    DEFAULT_PNG_WIDTH,
};
