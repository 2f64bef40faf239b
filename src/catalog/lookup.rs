//! The generic lookup engine shared by the country and region catalogs.
//!
//! Both vocabularies expose the same retrieval surface: exact and tolerant
//! key lookup, long-code lookup, free-text parsing, random selection, and
//! enumeration. The engine is written once here as provided trait methods;
//! each catalog contributes its static table and field projections.

use rand::seq::IndexedRandom;
use serde_json::{Map, Value};

use super::error::{CatalogError, Result};

/// Input accepted by [`Catalog::parse`] and [`Catalog::try_parse`]: either
/// an already-resolved entry (passed through unchanged) or a raw code
/// string to resolve.
#[derive(Debug)]
pub enum ParseInput<'a, T: 'static> {
    /// An entry that is already resolved; parsing is a no-op.
    Entry(&'static T),
    /// A raw catalog key to resolve.
    Code(&'a str),
}

impl<'a, T: 'static> From<&'a str> for ParseInput<'a, T> {
    fn from(code: &'a str) -> Self {
        ParseInput::Code(code)
    }
}

impl<'a, T: 'static> From<&'a String> for ParseInput<'a, T> {
    fn from(code: &'a String) -> Self {
        ParseInput::Code(code)
    }
}

/// A closed catalog of immutable entries with a generic lookup surface.
///
/// Matching is exact and case-sensitive throughout: strict operations
/// (`from_*`, [`parse`](Catalog::parse)) fail with
/// [`CatalogError::NotFound`] on a miss, tolerant ones (`try_*`) return
/// `None` and never fail. Entries live in `static` tables and are handed
/// out by reference; nothing is allocated for a lookup itself.
pub trait Catalog: Sized + 'static {
    /// Catalog name used in diagnostics.
    const NAME: &'static str;

    /// Every entry, in declaration order.
    fn all() -> &'static [Self];

    /// The unique catalog key (short code for countries, composite code
    /// for regions).
    fn code(&self) -> &'static str;

    /// The unique snake_case long code.
    fn long_code(&self) -> &'static str;

    /// Human-readable name.
    fn label(&self) -> &'static str;

    /// Inserts the catalog-specific record fields between `value` and
    /// `code` (see [`Catalog::to_record`]).
    fn extra_fields(&self, record: &mut Map<String, Value>);

    /// Every catalog key, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::all().iter().map(Self::code).collect()
    }

    /// Resolves an entry by its catalog key.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no entry has that key.
    fn from_code(code: &str) -> Result<&'static Self> {
        Self::try_from_code(code).ok_or_else(|| CatalogError::NotFound {
            catalog: Self::NAME,
            key: code.to_owned(),
        })
    }

    /// Tolerant form of [`Catalog::from_code`].
    fn try_from_code(code: &str) -> Option<&'static Self> {
        Self::all().iter().find(|entry| entry.code() == code)
    }

    /// Resolves an entry by its long code.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no entry has that long code.
    fn from_long_code(long_code: &str) -> Result<&'static Self> {
        Self::try_from_long_code(long_code).ok_or_else(|| CatalogError::NotFound {
            catalog: Self::NAME,
            key: long_code.to_owned(),
        })
    }

    /// Tolerant form of [`Catalog::from_long_code`].
    fn try_from_long_code(long_code: &str) -> Option<&'static Self> {
        Self::all().iter().find(|entry| entry.long_code() == long_code)
    }

    /// Resolves an entry from either an already-resolved entry or a raw
    /// key string.
    ///
    /// Entry input passes through unchanged, so the operation is
    /// idempotent. `None` is an error here, not a tolerated miss.
    ///
    /// # Errors
    /// Returns [`CatalogError::MissingInput`] for `None` input and
    /// [`CatalogError::NotFound`] for an unknown key.
    fn parse<'a, I>(input: Option<I>) -> Result<&'static Self>
    where
        I: Into<ParseInput<'a, Self>>,
    {
        match input {
            None => Err(CatalogError::MissingInput(Self::NAME)),
            Some(input) => match input.into() {
                ParseInput::Entry(entry) => Ok(entry),
                ParseInput::Code(code) => Self::from_code(code),
            },
        }
    }

    /// Tolerant form of [`Catalog::parse`]: an unknown key and `None`
    /// input both yield `None`.
    fn try_parse<'a, I>(input: Option<I>) -> Option<&'static Self>
    where
        I: Into<ParseInput<'a, Self>>,
    {
        match input?.into() {
            ParseInput::Entry(entry) => Some(entry),
            ParseInput::Code(code) => Self::try_from_code(code),
        }
    }

    /// One uniformly-selected entry.
    fn random() -> &'static Self {
        Self::all()
            .choose(&mut rand::rng())
            .expect("catalog tables are never empty")
    }

    /// Ordered `(key, label)` pairs for every entry.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::all()
            .iter()
            .map(|entry| (entry.code(), entry.label()))
            .collect()
    }

    /// Projects the entry into its canonical ordered record: `label`,
    /// `value` (the key), the catalog-specific fields, then `code` (the
    /// long code).
    fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("label".to_owned(), self.label().into());
        record.insert("value".to_owned(), self.code().into());
        self.extra_fields(&mut record);
        record.insert("code".to_owned(), self.long_code().into());
        record
    }

    /// Renders [`Catalog::to_record`] as JSON text.
    ///
    /// # Errors
    /// Propagates the encoder's failure, which cannot occur for the
    /// record's fixed scalar/array shape.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }
}
