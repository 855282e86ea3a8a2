//! Inner join of county regions with the aggregate crime table.

use std::collections::{BTreeMap, BTreeSet};

use hu_crime_map_crime_models::CrimeRecord;
use hu_crime_map_geography_models::GeographicRegion;

/// Regions and crime rows that matched on county name.
///
/// Every row has a region and every region has at least one row.
#[derive(Debug, Clone, Default)]
pub struct JoinedDataset {
    regions: BTreeMap<String, GeographicRegion>,
    rows: Vec<CrimeRecord>,
}

impl JoinedDataset {
    /// Matched regions keyed by county name.
    #[must_use]
    pub const fn regions(&self) -> &BTreeMap<String, GeographicRegion> {
        &self.regions
    }

    /// Looks up the region for `county`.
    #[must_use]
    pub fn region(&self, county: &str) -> Option<&GeographicRegion> {
        self.regions.get(county)
    }

    /// Matched crime rows, in source order.
    #[must_use]
    pub fn rows(&self) -> &[CrimeRecord] {
        &self.rows
    }

    /// Smallest and largest year among the rows.
    #[must_use]
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.year).min()?;
        let max = self.rows.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Smallest and largest defined safety index among the rows.
    #[must_use]
    pub fn safety_index_domain(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.safety_index)
            .fold(None, |acc, idx| match acc {
                None => Some((idx, idx)),
                Some((lo, hi)) => Some((lo.min(idx), hi.max(idx))),
            })
    }
}

/// Joins `regions` to `records` on county name, keeping only matches on
/// both sides.
#[must_use]
pub fn inner_join(regions: Vec<GeographicRegion>, records: &[CrimeRecord]) -> JoinedDataset {
    let region_names: BTreeSet<&str> = regions.iter().map(|r| r.name.as_str()).collect();

    let rows: Vec<CrimeRecord> = records
        .iter()
        .filter(|r| region_names.contains(r.county.as_str()))
        .cloned()
        .collect();

    let matched: BTreeSet<&str> = rows.iter().map(|r| r.county.as_str()).collect();

    let unmatched_counties: BTreeSet<&str> = records
        .iter()
        .map(|r| r.county.as_str())
        .filter(|c| !region_names.contains(c))
        .collect();
    for county in &unmatched_counties {
        log::debug!("No boundary for county '{county}', dropping its rows");
    }

    let regions: BTreeMap<String, GeographicRegion> = regions
        .into_iter()
        .filter(|region| {
            let keep = matched.contains(region.name.as_str());
            if !keep {
                log::debug!("No statistics for region '{}', dropping it", region.name);
            }
            keep
        })
        .map(|region| (region.name.clone(), region))
        .collect();

    log::info!(
        "Joined {} of {} crime rows to {} regions",
        rows.len(),
        records.len(),
        regions.len()
    );

    JoinedDataset { regions, rows }
}
