//! Subsets the loaded tables for one dashboard state.
//!
//! Every view that depends on the county selection goes through
//! [`effective_selection`], so an empty selection behaves exactly like a
//! selection of the capital alone.

use std::collections::BTreeMap;

use hu_crime_map_crime_models::{CAPITAL_COUNTY, CrimeRecord, CrimeTypeRecord};
use hu_crime_map_dashboard_models::YearRange;
use hu_crime_map_dataset::Dataset;
use hu_crime_map_geography_models::GeographicRegion;

/// Maximum number of counties drawn in the detailed type view.
pub const MAX_DETAILED_COUNTIES: usize = 5;

/// Per-county means over a year range, with the county's region.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyAverage<'a> {
    /// County name.
    pub county: &'a str,
    /// Dissolved county boundary.
    pub region: &'a GeographicRegion,
    /// Mean registered crime count.
    pub mean_crime_count: f64,
    /// Mean population.
    pub mean_population: f64,
    /// Mean of the defined safety indices; `None` if none were defined.
    pub mean_safety_index: Option<f64>,
}

/// Type rows for the detailed view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedView<'a> {
    /// Counties drawn, at most [`MAX_DETAILED_COUNTIES`], in selection order.
    pub counties: Vec<String>,
    /// Non-total rows of those counties, sorted by year.
    pub rows: Vec<&'a CrimeTypeRecord>,
}

/// Applies the empty-selection default and drops repeated names.
#[must_use]
pub fn effective_selection(selected: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(selected.len());
    for county in selected {
        if !out.contains(county) {
            out.push(county.clone());
        }
    }
    if out.is_empty() {
        out.push(CAPITAL_COUNTY.to_string());
    }
    out
}

/// Averages the joined rows inside `range` per county, for the map.
///
/// Results are sorted by county name.
#[must_use]
pub fn map_view(dataset: &Dataset, range: YearRange) -> Vec<CountyAverage<'_>> {
    let joined = dataset.joined();
    let mut groups: BTreeMap<&str, Vec<&CrimeRecord>> = BTreeMap::new();
    for row in joined.rows().iter().filter(|r| range.contains(r.year)) {
        groups.entry(row.county.as_str()).or_default().push(row);
    }

    groups
        .into_iter()
        .filter_map(|(county, rows)| {
            let region = joined.region(county)?;
            Some(CountyAverage {
                county,
                region,
                mean_crime_count: mean(rows.iter().map(|r| r.registered_crime_count))?,
                mean_population: mean(rows.iter().map(|r| r.population))?,
                mean_safety_index: mean(rows.iter().filter_map(|r| r.safety_index)),
            })
        })
        .collect()
}

/// Full yearly history of the selected counties, sorted by year.
///
/// The year range is not applied here; the trend chart shades it instead.
#[must_use]
pub fn trend_view<'a>(dataset: &'a Dataset, selected: &[String]) -> Vec<&'a CrimeRecord> {
    let counties = effective_selection(selected);
    let mut rows: Vec<&CrimeRecord> = dataset
        .crime_records()
        .iter()
        .filter(|r| counties.contains(&r.county))
        .collect();
    rows.sort_by_key(|r| r.year);
    rows
}

/// Type rows of at most the first five selected counties, totals removed,
/// sorted by year.
#[must_use]
pub fn detailed_view<'a>(dataset: &'a Dataset, selected: &[String]) -> DetailedView<'a> {
    let mut counties = effective_selection(selected);
    if counties.len() > MAX_DETAILED_COUNTIES {
        log::debug!(
            "Detailed view capped at {MAX_DETAILED_COUNTIES} of {} counties",
            counties.len()
        );
        counties.truncate(MAX_DETAILED_COUNTIES);
    }

    let mut rows: Vec<&CrimeTypeRecord> = dataset
        .crime_type_records()
        .iter()
        .filter(|r| counties.contains(&r.county) && !r.is_total())
        .collect();
    rows.sort_by_key(|r| r.year);

    DetailedView { counties, rows }
}

/// Arithmetic mean, `None` for an empty input.
#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
