//! Merges boundary features that share a name into one region.

use std::collections::BTreeMap;

use geo::{BooleanOps, MultiPolygon};
use hu_crime_map_geography_models::{GeographicRegion, RawBoundary};

/// Groups boundaries by name and unions the geometries of each group.
///
/// Output is sorted by name and contains exactly one region per distinct
/// input name.
#[must_use]
pub fn dissolve(boundaries: Vec<RawBoundary>) -> Vec<GeographicRegion> {
    let mut groups: BTreeMap<String, Vec<MultiPolygon<f64>>> = BTreeMap::new();
    for boundary in boundaries {
        groups
            .entry(boundary.name)
            .or_default()
            .push(boundary.geometry);
    }

    groups
        .into_iter()
        .map(|(name, geometries)| {
            if geometries.len() > 1 {
                log::debug!("Dissolving {} polygons into '{name}'", geometries.len());
            }
            GeographicRegion {
                name,
                boundary: union_all(geometries),
            }
        })
        .collect()
}

/// Unions a list of multipolygons. A single entry is returned as is.
fn union_all(geometries: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
    let mut iter = geometries.into_iter();
    let Some(first) = iter.next() else {
        return MultiPolygon(vec![]);
    };
    iter.fold(first, |acc, next| acc.union(&next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, polygon};

    fn square(x: f64, y: f64, name: &str) -> RawBoundary {
        RawBoundary {
            name: name.to_string(),
            geometry: MultiPolygon(vec![polygon![
                (x: x, y: y),
                (x: x + 1.0, y: y),
                (x: x + 1.0, y: y + 1.0),
                (x: x, y: y + 1.0),
                (x: x, y: y),
            ]]),
        }
    }

    #[test]
    fn merges_adjacent_polygons_into_one_region() {
        let regions = dissolve(vec![square(0.0, 0.0, "X"), square(1.0, 0.0, "X")]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "X");
        assert_eq!(regions[0].boundary.0.len(), 1, "adjacent squares should fuse");
        assert!((regions[0].boundary.unsigned_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_disjoint_parts_of_one_region() {
        let regions = dissolve(vec![square(0.0, 0.0, "X"), square(5.0, 5.0, "X")]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].boundary.0.len(), 2);
        assert!((regions[0].boundary.unsigned_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn overlapping_polygons_do_not_double_count() {
        let regions = dissolve(vec![square(0.0, 0.0, "X"), square(0.5, 0.0, "X")]);
        assert!((regions[0].boundary.unsigned_area() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn one_region_per_name() {
        let regions = dissolve(vec![
            square(0.0, 0.0, "B"),
            square(2.0, 0.0, "A"),
            square(4.0, 0.0, "B"),
        ]);
        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn single_member_group_is_unchanged() {
        let input = square(0.0, 0.0, "A");
        let expected = input.geometry.clone();
        let regions = dissolve(vec![input]);
        assert_eq!(regions[0].boundary, expected);
    }
}
