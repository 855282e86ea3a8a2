//! Name clean-up for raw boundary features.

use hu_crime_map_geography_models::{CountyNameTable, RawBoundary};

use crate::names::resolve_county;

/// Trims every feature name and rewrites it to its canonical county.
///
/// Geometries are left untouched; features that end up sharing a name are
/// merged later by [`crate::dissolve::dissolve`].
#[must_use]
pub fn normalize_boundaries(raw: Vec<RawBoundary>, table: &CountyNameTable) -> Vec<RawBoundary> {
    raw.into_iter()
        .map(|boundary| {
            let trimmed = boundary.name.trim();
            let county = resolve_county(table, trimmed);
            if county != trimmed {
                log::debug!("Remapped boundary '{trimmed}' to county '{county}'");
            }
            RawBoundary {
                name: county.to_string(),
                geometry: boundary.geometry,
            }
        })
        .collect()
}
