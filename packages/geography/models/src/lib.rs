#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County boundary and name lookup types.
//!
//! The raw boundary file mixes counties with large cities. These types
//! describe both sides of the clean-up: [`RawBoundary`] is one feature as
//! read from disk, [`GeographicRegion`] is one administrative county after
//! names have been remapped and polygons dissolved.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

/// A named polygon feature as read from the boundary file.
///
/// The name may be a city rather than a county.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBoundary {
    /// The feature's `name` property.
    pub name: String,
    /// Feature geometry. Single polygons are lifted into a multipolygon.
    pub geometry: MultiPolygon<f64>,
}

/// One administrative county with its dissolved boundary.
///
/// Names are unique across a region set.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicRegion {
    /// Canonical county name.
    pub name: String,
    /// Union of every polygon that was remapped to this county.
    pub boundary: MultiPolygon<f64>,
}

/// City to county lookup, deserialized from TOML.
///
/// Applied as two ordered steps: the bulk city table first, then the
/// single spelling override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyNameTable {
    /// City names and the county that contains each of them.
    #[serde(rename = "city")]
    pub cities: Vec<CityMapping>,
    /// Spelling variant rewritten to its canonical form.
    #[serde(rename = "override")]
    pub spelling_override: NameOverride,
}

/// A single city → county entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityMapping {
    /// City name as it appears in the boundary file.
    pub city: String,
    /// County that contains the city.
    pub county: String,
}

/// A single name rewrite applied after the city table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverride {
    /// Variant spelling.
    pub from: String,
    /// Canonical spelling.
    pub to: String,
}
