use country_catalog::{Catalog, CatalogError, Country, Region, DEFAULT_PNG_WIDTH};
use serde_json::Value;

const PNG_SIGNATURE: [u8; 4] = [0x89, b'P', b'N', b'G'];

/// Pixel width recorded in a PNG's IHDR chunk.
fn png_width(png: &[u8]) -> u32 {
    u32::from_be_bytes(png[16..20].try_into().unwrap())
}

#[test]
fn lists_every_country_code() {
    let values = Country::values();

    assert!(!values.is_empty());
    assert!(values.contains(&"US"));
    assert!(values.contains(&"GB"));
}

#[test]
fn codes_and_long_codes_are_unique() {
    let mut codes = Country::values();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), Country::all().len());

    let mut long_codes: Vec<_> = Country::all().iter().map(Catalog::long_code).collect();
    long_codes.sort_unstable();
    long_codes.dedup();
    assert_eq!(long_codes.len(), Country::all().len());
}

#[test]
fn resolves_by_long_code() {
    let country = Country::from_long_code("united_states").unwrap();
    assert_eq!(country.code(), "US");

    let tolerant = Country::try_from_long_code("united_states").unwrap();
    assert_eq!(tolerant.code(), "US");

    assert!(Country::try_from_long_code("non_existent_country").is_none());
}

#[test]
fn strict_lookup_fails_for_unknown_code() {
    let err = Country::from_code("not-a-real-code").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound { catalog: "country", .. }
    ));
}

#[test]
fn every_country_resolves_by_its_own_codes() {
    for country in Country::all() {
        assert_eq!(Country::from_code(country.code()).unwrap(), country);
        assert_eq!(Country::from_long_code(country.long_code()).unwrap(), country);
    }
}

#[test]
fn random_country_is_from_the_catalog() {
    let country = Country::random();
    assert!(Country::values().contains(&country.code()));
}

#[test]
fn us_label_and_demonym() {
    let us = Country::from_code("US").unwrap();

    assert_eq!(us.label(), "United States");
    assert_eq!(us.demonym(), "American");
}

#[test]
fn region_keys_resolve_back_to_their_country() {
    let us = Country::from_code("US").unwrap();
    let keys = us.region_codes();
    assert!(!keys.is_empty());

    for key in keys {
        let region = Region::from_code(key).unwrap();
        assert_eq!(region.country(), us);
    }
}

#[test]
fn regions_match_region_codes() {
    for country in Country::all() {
        let resolved: Vec<_> = country.regions().iter().map(|r| r.code()).collect();
        assert_eq!(resolved, country.region_codes());
    }
}

#[test]
fn options_pair_codes_with_labels() {
    let options = Country::options();

    assert_eq!(options.len(), Country::all().len());
    assert!(options.contains(&("US", "United States")));
}

#[test]
fn record_has_canonical_field_order() {
    let us = Country::from_code("US").unwrap();
    let record = us.to_record();

    let fields: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(fields, ["label", "value", "regions", "code"]);
}

#[test]
fn json_round_trips_the_record() {
    let us = Country::from_code("US").unwrap();
    let json = us.to_json().unwrap();
    assert!(json.contains(r#""label":"United States""#));

    let decoded: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded["value"], "US");
    assert_eq!(decoded["label"], "United States");
    assert_eq!(decoded["code"], "united_states");
    assert_eq!(
        decoded["regions"].as_array().unwrap().len(),
        us.region_codes().len()
    );
}

#[test]
fn parse_accepts_codes_and_resolved_entries() {
    let parsed = Country::parse(Some("US")).unwrap();
    assert_eq!(parsed.code(), "US");

    let ad = Country::from_code("AD").unwrap();
    let passed_through = Country::parse(Some(ad)).unwrap();
    assert_eq!(passed_through, ad);
}

#[test]
fn parse_rejects_missing_input() {
    let err = Country::parse(None::<&str>).unwrap_err();
    assert!(matches!(err, CatalogError::MissingInput("country")));
}

#[test]
fn try_parse_tolerates_unknown_and_missing_input() {
    let us = Country::try_parse(Some("US")).unwrap();
    assert_eq!(us.code(), "US");

    assert!(Country::try_parse(Some("Non Existent Country")).is_none());
    assert!(Country::try_parse(None::<&str>).is_none());
}

#[test]
fn svg_flag_asset_exists_for_every_country() {
    for country in Country::all() {
        let path = country.svg_flag_path();
        assert!(path.exists(), "missing flag asset: {}", path.display());
    }
}

#[test]
fn svg_flag_contents_are_vector_markup() {
    let us = Country::from_code("US").unwrap();
    let svg = us.svg_flag_contents().unwrap();

    assert!(svg.starts_with(b"<svg"));
}

#[test]
fn rasterized_flag_is_png_at_the_requested_width() {
    let us = Country::from_code("US").unwrap();

    let default = us.png_flag_contents(None).unwrap();
    assert!(default.starts_with(&PNG_SIGNATURE));
    assert_eq!(png_width(&default), DEFAULT_PNG_WIDTH);

    for width in [300, 150] {
        let png = us.png_flag_contents(width).unwrap();
        assert!(png.starts_with(&PNG_SIGNATURE));
        assert_eq!(png_width(&png), width);
    }
}
