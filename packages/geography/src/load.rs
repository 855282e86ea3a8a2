//! Reads boundary features from a `GeoJSON` file.

use std::path::Path;

use geo::MultiPolygon;
use geojson::{Feature, GeoJson};
use hu_crime_map_geography_models::RawBoundary;

use crate::GeographyError;

/// Property holding the feature name.
const NAME_PROPERTY: &str = "name";

/// Reads every named polygon feature from the file at `path`.
///
/// # Errors
///
/// Returns [`GeographyError::Io`] if the file cannot be read, or a parse
/// error if it is not a `GeoJSON` `FeatureCollection`.
pub fn read_boundaries(path: &Path) -> Result<Vec<RawBoundary>, GeographyError> {
    let text = std::fs::read_to_string(path).map_err(|source| GeographyError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_boundaries(&text)
}

/// Parses named polygon features from `GeoJSON` text.
///
/// Features without a name or without polygonal geometry are skipped.
///
/// # Errors
///
/// Returns [`GeographyError`] if the text is not a `FeatureCollection`.
pub fn parse_boundaries(text: &str) -> Result<Vec<RawBoundary>, GeographyError> {
    let geojson: GeoJson = text.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(GeographyError::NotFeatureCollection);
    };

    Ok(collection
        .features
        .into_iter()
        .filter_map(feature_to_boundary)
        .collect())
}

fn feature_to_boundary(feature: Feature) -> Option<RawBoundary> {
    let Some(name) = feature
        .property(NAME_PROPERTY)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
    else {
        log::warn!("Skipping boundary feature without a '{NAME_PROPERTY}' property");
        return None;
    };

    let Some(geometry) = feature.geometry else {
        log::warn!("Skipping boundary '{name}': no geometry");
        return None;
    };

    let geometry = match to_multipolygon(geometry) {
        Ok(mp) => mp,
        Err(e) => {
            log::warn!("Skipping boundary '{name}': {e}");
            return None;
        }
    };

    Some(RawBoundary { name, geometry })
}

/// Converts a `GeoJSON` geometry into a [`MultiPolygon`].
/// Handles both `Polygon` and `MultiPolygon` geometry types.
fn to_multipolygon(geometry: geojson::Geometry) -> Result<MultiPolygon<f64>, GeographyError> {
    let geo_geom: geo::Geometry<f64> =
        geometry
            .try_into()
            .map_err(|e: geojson::Error| GeographyError::Conversion {
                message: e.to_string(),
            })?;

    match geo_geom {
        geo::Geometry::MultiPolygon(mp) => Ok(mp),
        geo::Geometry::Polygon(p) => Ok(MultiPolygon(vec![p])),
        _ => Err(GeographyError::Conversion {
            message: "geometry is not a Polygon or MultiPolygon".to_string(),
        }),
    }
}
