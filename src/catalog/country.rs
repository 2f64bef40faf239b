//! The country catalog: one entry per shipped country.

use std::path::PathBuf;

use serde_json::{Map, Value};

use super::dataset;
use super::error::Result;
use super::flag;
use super::lookup::{Catalog, ParseInput};
use super::region::Region;

/// One entry in the country catalog.
///
/// Obtained by reference through the lookup engine
/// ([`Catalog::from_code`] and friends); never constructed by consumers.
#[derive(Debug, PartialEq, Eq)]
pub struct Country {
    pub(crate) code: &'static str,
    pub(crate) label: &'static str,
    pub(crate) demonym: &'static str,
    pub(crate) long_code: &'static str,
}

impl Catalog for Country {
    const NAME: &'static str = "country";

    fn all() -> &'static [Self] {
        dataset::COUNTRIES
    }

    fn code(&self) -> &'static str {
        self.code
    }

    fn long_code(&self) -> &'static str {
        self.long_code
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn extra_fields(&self, record: &mut Map<String, Value>) {
        record.insert("regions".to_owned(), self.region_codes().into());
    }
}

impl Country {
    /// Adjectival/national-identity form of the country name.
    pub fn demonym(&self) -> &'static str {
        self.demonym
    }

    /// Composite codes of this country's regions, in catalog order.
    ///
    /// Empty for countries without modeled subdivisions.
    pub fn region_codes(&self) -> Vec<&'static str> {
        Region::values_for(self)
    }

    /// This country's regions, resolved, in catalog order.
    pub fn regions(&self) -> Vec<&'static Region> {
        Region::for_country(self)
    }

    /// Path of the vector flag asset shipped for this country.
    ///
    /// The referenced file exists for every cataloged country.
    pub fn svg_flag_path(&self) -> PathBuf {
        flag::svg_path(self.code)
    }

    /// Raw contents of the vector flag asset.
    ///
    /// # Errors
    /// Returns [`AssetRead`](crate::CatalogError::AssetRead) if the asset
    /// file is missing or unreadable.
    pub fn svg_flag_contents(&self) -> Result<Vec<u8>> {
        flag::read_svg(&self.svg_flag_path())
    }

    /// The flag rasterized to PNG at `width` pixels, or at
    /// [`DEFAULT_PNG_WIDTH`](crate::DEFAULT_PNG_WIDTH) when `None`.
    ///
    /// # Errors
    /// Returns [`AssetRead`](crate::CatalogError::AssetRead) if the asset
    /// file cannot be read, and
    /// [`Rasterization`](crate::CatalogError::Rasterization) if the image
    /// engine cannot decode, scale, or encode it.
    pub fn png_flag_contents(&self, width: impl Into<Option<u32>>) -> Result<Vec<u8>> {
        let width = width.into().unwrap_or(flag::DEFAULT_PNG_WIDTH);
        flag::rasterize(&self.svg_flag_path(), width)
    }
}

impl<'a> From<&'static Country> for ParseInput<'a, Country> {
    fn from(entry: &'static Country) -> Self {
        ParseInput::Entry(entry)
    }
}
