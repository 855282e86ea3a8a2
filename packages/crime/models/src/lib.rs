#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! County crime statistics row types and safety index rules.
//!
//! This crate defines the in-memory rows every other package works with:
//! yearly aggregate counts per county ([`CrimeRecord`]), the per-type
//! breakdown ([`CrimeTypeRecord`]) and the national category table
//! ([`CategoryTable`]), which is carried but not charted.

use serde::{Deserialize, Serialize};

/// The baseline county used whenever a selection is empty.
pub const CAPITAL_COUNTY: &str = "Budapest";

/// Labels marking aggregate "total" rows in the type breakdown. Matched as
/// lowercase substrings.
pub const TOTAL_TYPE_MARKERS: &[&str] = &["összesen", "total"];

/// Registered crime count and population for one county in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeRecord {
    /// Canonical county name (trimmed).
    pub county: String,
    /// Calendar year.
    pub year: i32,
    /// Number of registered crimes.
    pub registered_crime_count: f64,
    /// Resident population.
    pub population: f64,
    /// Crimes per 1,000 residents. `None` when the population is zero.
    pub safety_index: Option<f64>,
}

impl CrimeRecord {
    /// Creates a record and derives its [`safety_index`](Self::safety_index).
    #[must_use]
    pub fn new(county: String, year: i32, registered_crime_count: f64, population: f64) -> Self {
        Self {
            county,
            year,
            registered_crime_count,
            population,
            safety_index: safety_index(registered_crime_count, population),
        }
    }
}

/// Case count of a single crime type for one county in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeTypeRecord {
    /// Canonical county name (trimmed).
    pub county: String,
    /// Calendar year.
    pub year: i32,
    /// Crime type label as it appears in the source table.
    pub crime_type: String,
    /// Number of cases.
    pub case_count: f64,
}

impl CrimeTypeRecord {
    /// Whether this row is an aggregate "total" row rather than a real type.
    #[must_use]
    pub fn is_total(&self) -> bool {
        is_total_type(&self.crime_type)
    }
}

/// The national crime-category table, kept verbatim.
///
/// No chart reads it; it is loaded so that a missing file still fails
/// startup the same way the other inputs do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows, one string per column.
    pub rows: Vec<Vec<String>>,
}

impl CategoryTable {
    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes crimes per 1,000 residents.
///
/// Returns `None` for a zero (or non-finite) population so that the value
/// never silently turns into zero or infinity.
#[must_use]
pub fn safety_index(registered_crime_count: f64, population: f64) -> Option<f64> {
    if population == 0.0 || !population.is_finite() {
        return None;
    }
    let index = registered_crime_count / population * 1000.0;
    index.is_finite().then_some(index)
}

/// Whether a crime type label denotes an aggregate total row.
///
/// Case-insensitive, so `"Összesen"` and `"ÖSSZESEN"` both match.
#[must_use]
pub fn is_total_type(label: &str) -> bool {
    let lower = label.to_lowercase();
    TOTAL_TYPE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}
