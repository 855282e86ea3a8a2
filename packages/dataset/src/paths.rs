//! Input file locations.
//!
//! All four inputs live in one data directory under their original file
//! names.

use std::path::{Path, PathBuf};

/// County boundary `GeoJSON`.
pub const BOUNDARIES_FILE: &str = "hungaryJSON.json";
/// Yearly registered crime count and population per county.
pub const AGGREGATE_FILE: &str = "buncs_nep_adatb.csv";
/// National crime-category totals.
pub const CATEGORIES_FILE: &str = "adatbazis_2_osszesitett_kategoriak.csv";
/// Per-county, per-year crime type counts.
pub const CRIME_TYPES_FILE: &str = "adatbazis_3_megyei_tipusok.csv";

/// Paths of every input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// County boundary `GeoJSON`.
    pub boundaries: PathBuf,
    /// Aggregate crime and population table.
    pub aggregate: PathBuf,
    /// National category table.
    pub categories: PathBuf,
    /// Detailed crime type table.
    pub crime_types: PathBuf,
}

impl DataPaths {
    /// Returns the default file names resolved against `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            boundaries: dir.join(BOUNDARIES_FILE),
            aggregate: dir.join(AGGREGATE_FILE),
            categories: dir.join(CATEGORIES_FILE),
            crime_types: dir.join(CRIME_TYPES_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_default_names() {
        let paths = DataPaths::in_dir(Path::new("data"));
        assert_eq!(paths.boundaries, Path::new("data/hungaryJSON.json"));
        assert_eq!(paths.aggregate, Path::new("data/buncs_nep_adatb.csv"));
        assert_eq!(
            paths.categories,
            Path::new("data/adatbazis_2_osszesitett_kategoriak.csv")
        );
        assert_eq!(
            paths.crime_types,
            Path::new("data/adatbazis_3_megyei_tipusok.csv")
        );
    }
}
