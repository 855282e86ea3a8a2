#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County boundary loading, name normalization and polygon dissolve.
//!
//! The boundary file lists counties alongside the larger cities inside
//! them. Loading runs three steps in a fixed order: read the `GeoJSON`
//! features ([`load`]), rewrite city names to their county ([`normalize`]),
//! then union every polygon sharing a name ([`dissolve`]). The result is one
//! [`GeographicRegion`] per county.

pub mod dissolve;
pub mod load;
pub mod names;
pub mod normalize;

use std::path::Path;

use hu_crime_map_geography_models::GeographicRegion;
use thiserror::Error;

/// Errors that can occur while loading boundaries.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// The boundary file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path of the boundary file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The file parsed, but is not a `FeatureCollection`.
    #[error("Expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// Reads the boundary file at `path` and returns one region per county.
///
/// # Errors
///
/// Returns [`GeographyError`] if the file is missing, unreadable, or not a
/// `GeoJSON` `FeatureCollection`.
pub fn load_regions(path: &Path) -> Result<Vec<GeographicRegion>, GeographyError> {
    let raw = load::read_boundaries(path)?;
    log::info!("Read {} boundary features from {}", raw.len(), path.display());

    let normalized = normalize::normalize_boundaries(raw, names::county_name_table());
    let regions = dissolve::dissolve(normalized);
    log::info!("Dissolved boundaries into {} counties", regions.len());

    Ok(regions)
}
