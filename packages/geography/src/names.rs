//! Embedded city → county lookup table.
//!
//! The table lives in `names/counties.toml` and is compiled into the
//! binary. Adding a city means adding a `[[city]]` entry there.

use std::sync::LazyLock;

use hu_crime_map_geography_models::CountyNameTable;

/// Number of city entries in the embedded table. Enforced by a test.
#[cfg(test)]
const EXPECTED_CITY_COUNT: usize = 23;

const COUNTIES_TOML: &str = include_str!("../names/counties.toml");

static TABLE: LazyLock<CountyNameTable> = LazyLock::new(|| {
    toml::de::from_str(COUNTIES_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded county name table: {e}"))
});

/// Returns the embedded lookup table.
///
/// # Panics
///
/// Panics on first use if the embedded TOML fails to parse. The file is a
/// compile-time constant, so a parse failure is a development error.
#[must_use]
pub fn county_name_table() -> &'static CountyNameTable {
    &TABLE
}

/// Resolves a (trimmed) feature name to its canonical county name.
///
/// The city table is consulted first, then the spelling override. Names
/// found in neither pass through unchanged.
#[must_use]
pub fn resolve_county<'a>(table: &'a CountyNameTable, name: &'a str) -> &'a str {
    let mapped = table
        .cities
        .iter()
        .find(|m| m.city == name)
        .map_or(name, |m| m.county.as_str());

    if mapped == table.spelling_override.from {
        &table.spelling_override.to
    } else {
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_embedded_table() {
        let table = county_name_table();
        assert_eq!(
            table.cities.len(),
            EXPECTED_CITY_COUNT,
            "Expected {EXPECTED_CITY_COUNT} city mappings, found {}. \
             Update EXPECTED_CITY_COUNT after adding/removing cities.",
            table.cities.len()
        );
    }

    #[test]
    fn city_names_are_unique() {
        let mut seen = BTreeSet::new();
        for mapping in &county_name_table().cities {
            assert!(
                seen.insert(&mapping.city),
                "Duplicate city mapping: {}",
                mapping.city
            );
        }
    }

    #[test]
    fn no_city_maps_to_itself() {
        for mapping in &county_name_table().cities {
            assert_ne!(mapping.city, mapping.county);
        }
    }

    #[test]
    fn resolves_capital_to_surrounding_county() {
        assert_eq!(resolve_county(county_name_table(), "Budapest"), "Pest");
        assert_eq!(resolve_county(county_name_table(), "Érd"), "Pest");
    }

    #[test]
    fn resolves_spelling_override() {
        assert_eq!(
            resolve_county(county_name_table(), "Csongrád-Csanád"),
            "Csongrád"
        );
    }

    #[test]
    fn city_then_override_is_stable() {
        // Szeged maps to the canonical spelling directly.
        assert_eq!(resolve_county(county_name_table(), "Szeged"), "Csongrád");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(resolve_county(county_name_table(), "Baranya"), "Baranya");
        assert_eq!(resolve_county(county_name_table(), "Veszprém"), "Veszprém");
    }
}
