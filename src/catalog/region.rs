//! The region catalog: administrative subdivisions keyed by composite code.

use serde_json::{Map, Value};

use super::country::Country;
use super::dataset;
use super::lookup::{Catalog, ParseInput};

/// One entry in the region catalog.
///
/// The composite `code` is `<country short code>_<subdivision>`; the
/// owning country is derived from the prefix on demand, not stored.
#[derive(Debug, PartialEq, Eq)]
pub struct Region {
    pub(crate) code: &'static str,
    pub(crate) label: &'static str,
    pub(crate) long_code: &'static str,
}

impl Catalog for Region {
    const NAME: &'static str = "region";

    fn all() -> &'static [Self] {
        dataset::REGIONS
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
        record.insert("country".to_owned(), self.country_key().into());
    }
}

impl Region {
    /// The owning country, resolved from the composite-code prefix.
    ///
    /// Always succeeds for cataloged data: every shipped region's prefix
    /// names a shipped country. A failure here means the dataset itself is
    /// corrupt, not that the caller did anything wrong.
    pub fn country(&self) -> &'static Country {
        Country::from_code(self.country_key())
            .expect("region code prefix names a cataloged country")
    }

    /// All regions belonging to `country`, in catalog order.
    ///
    /// Empty for countries without modeled subdivisions.
    pub fn for_country(country: &Country) -> Vec<&'static Region> {
        Self::all()
            .iter()
            .filter(|region| region.country_key() == country.code())
            .collect()
    }

    /// Composite codes of `country`'s regions, in catalog order.
    pub fn values_for(country: &Country) -> Vec<&'static str> {
        Self::for_country(country)
            .into_iter()
            .map(|region| region.code())
            .collect()
    }

    /// Ordered `(code, label)` pairs for `country`'s regions.
    pub fn options_for(country: &Country) -> Vec<(&'static str, &'static str)> {
        Self::for_country(country)
            .into_iter()
            .map(|region| (region.code(), region.label()))
            .collect()
    }

    fn country_key(&self) -> &'static str {
        self.code
            .split_once('_')
            .expect("composite region code has a country prefix")
            .0
    }
}

impl<'a> From<&'static Region> for ParseInput<'a, Region> {
    fn from(entry: &'static Region) -> Self {
        ParseInput::Entry(entry)
    }
}
