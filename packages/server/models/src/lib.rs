#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dashboard server.
//!
//! Dashboard state, events and figures come from
//! `hu_crime_map_dashboard_models`; this crate only adds the wrappers that
//! exist purely for the HTTP contract.

use hu_crime_map_dashboard_models::{DashboardState, RenderedChart, YearRange};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
    /// Rows left after joining statistics with geometry.
    pub joined_rows: usize,
    /// Number of dissolved county regions.
    pub regions: usize,
    /// Rows in the per-type breakdown.
    pub crime_type_rows: usize,
    /// Rows in the national category table.
    pub category_rows: usize,
}

/// Query parameters for `GET /api/figures`.
///
/// Any missing parameter falls back to the initial dashboard state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiguresQueryParams {
    /// First year of the range.
    pub from: Option<i32>,
    /// Last year of the range.
    pub to: Option<i32>,
    /// Comma-separated county names.
    pub counties: Option<String>,
}

impl FiguresQueryParams {
    /// Builds the dashboard state these parameters describe, using
    /// `defaults` for anything omitted.
    #[must_use]
    pub fn into_state(self, defaults: DashboardState) -> DashboardState {
        let year_range = YearRange::new(
            self.from.unwrap_or(defaults.year_range.start),
            self.to.unwrap_or(defaults.year_range.end),
        );

        let selected_counties = self.counties.map_or(defaults.selected_counties, |s| {
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(ToString::to_string)
                .collect()
        });

        DashboardState {
            year_range,
            selected_counties,
        }
    }
}

/// Every chart rendered for one state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFigures {
    /// The state the charts were rendered for.
    pub state: DashboardState,
    /// One entry per chart.
    pub charts: Vec<RenderedChart>,
}
