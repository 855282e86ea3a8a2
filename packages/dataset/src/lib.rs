#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loads county crime tables and joins them to county boundaries.
//!
//! Everything is read once at startup into a [`Dataset`]. After that the
//! dataset is only ever read, so it can be shared between request
//! handlers behind an `Arc` without locking.

pub mod join;
pub mod paths;
pub mod tables;

use std::collections::BTreeSet;

use hu_crime_map_crime_models::{CategoryTable, CrimeRecord, CrimeTypeRecord};
use hu_crime_map_geography::GeographyError;
use hu_crime_map_geography_models::GeographicRegion;
use thiserror::Error;

pub use join::JoinedDataset;
pub use paths::DataPaths;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// An input file could not be opened.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path of the input file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Path of the CSV file.
        path: String,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A required column is missing from a table header.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn {
        /// Path of the CSV file.
        path: String,
        /// Name of the missing column.
        column: String,
    },

    /// Boundary loading failed.
    #[error(transparent)]
    Geography(#[from] GeographyError),
}

/// All input tables, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    joined: JoinedDataset,
    crime_records: Vec<CrimeRecord>,
    crime_type_records: Vec<CrimeTypeRecord>,
    category_table: CategoryTable,
    counties: Vec<String>,
    safety_index_domain: Option<(f64, f64)>,
}

impl Dataset {
    /// Loads every input file and builds the joined table.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if any input is missing or unreadable.
    /// Nothing is partially loaded.
    pub fn load(paths: &DataPaths) -> Result<Self, DatasetError> {
        let regions = hu_crime_map_geography::load_regions(&paths.boundaries)?;
        let crime_records = tables::read_crime_records(&paths.aggregate)?;
        let category_table = tables::read_category_table(&paths.categories)?;
        log::info!(
            "Loaded national category table: {} rows, {} columns (not charted)",
            category_table.len(),
            category_table.headers.len()
        );
        let crime_type_records = tables::read_crime_type_records(&paths.crime_types)?;

        Ok(Self::from_parts(
            regions,
            crime_records,
            crime_type_records,
            category_table,
        ))
    }

    /// Builds a dataset from already-loaded parts.
    #[must_use]
    pub fn from_parts(
        regions: Vec<GeographicRegion>,
        crime_records: Vec<CrimeRecord>,
        crime_type_records: Vec<CrimeTypeRecord>,
        category_table: CategoryTable,
    ) -> Self {
        let joined = join::inner_join(regions, &crime_records);
        let counties = crime_records
            .iter()
            .map(|r| r.county.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let safety_index_domain = joined.safety_index_domain();

        Self {
            joined,
            crime_records,
            crime_type_records,
            category_table,
            counties,
            safety_index_domain,
        }
    }

    /// Regions and crime rows matched on county name.
    #[must_use]
    pub const fn joined(&self) -> &JoinedDataset {
        &self.joined
    }

    /// Every row of the aggregate table, matched or not.
    #[must_use]
    pub fn crime_records(&self) -> &[CrimeRecord] {
        &self.crime_records
    }

    /// Every row of the detailed type table, totals included.
    #[must_use]
    pub fn crime_type_records(&self) -> &[CrimeTypeRecord] {
        &self.crime_type_records
    }

    /// The national category table.
    #[must_use]
    pub const fn category_table(&self) -> &CategoryTable {
        &self.category_table
    }

    /// Sorted distinct county names of the aggregate table.
    #[must_use]
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    /// Min/max defined safety index across the whole joined table.
    #[must_use]
    pub const fn safety_index_domain(&self) -> Option<(f64, f64)> {
        self.safety_index_domain
    }

    /// Min/max year across the whole joined table.
    #[must_use]
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.joined.year_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn missing_boundary_file_fails_load() {
        let err = Dataset::load(&DataPaths::in_dir(Path::new("no/such/dir"))).unwrap_err();
        assert!(
            matches!(err, DatasetError::Geography(GeographyError::Io { .. })),
            "unexpected error: {err}"
        );
        assert!(err.to_string().contains("hungaryJSON.json"));
    }

    const BOUNDARIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "name": "Pest" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
            }
        }]
    }"#;

    const AGGREGATE: &str = "\
Megye_Neve,Év,Regisztrált Bűncselekmények Száma,Népesség száma
Pest,2020,1000,100000
";

    /// Fresh data directory holding the boundary file and aggregate table.
    fn partial_data_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hu_crime_map_dataset_{}_{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(paths::BOUNDARIES_FILE), BOUNDARIES).unwrap();
        std::fs::write(dir.join(paths::AGGREGATE_FILE), AGGREGATE).unwrap();
        dir
    }

    #[test]
    fn missing_category_table_fails_load() {
        let dir = partial_data_dir("no_categories");
        std::fs::write(
            dir.join(paths::CRIME_TYPES_FILE),
            "Megye_Neve,Év,Bűncselekmény_Típus,Esetszám\n",
        )
        .unwrap();

        let err = Dataset::load(&DataPaths::in_dir(&dir)).unwrap_err();
        std::fs::remove_dir_all(&dir).unwrap();

        match err {
            DatasetError::Io { path, .. } => assert!(
                path.ends_with(paths::CATEGORIES_FILE),
                "error names {path}"
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_crime_type_table_fails_load() {
        let dir = partial_data_dir("no_crime_types");
        std::fs::write(dir.join(paths::CATEGORIES_FILE), "Kategória\nVagyon elleni\n").unwrap();

        let err = Dataset::load(&DataPaths::in_dir(&dir)).unwrap_err();
        std::fs::remove_dir_all(&dir).unwrap();

        match err {
            DatasetError::Io { path, .. } => assert!(
                path.ends_with(paths::CRIME_TYPES_FILE),
                "error names {path}"
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_data_dir_loads() {
        let dir = partial_data_dir("complete");
        std::fs::write(dir.join(paths::CATEGORIES_FILE), "Kategória\nVagyon elleni\n").unwrap();
        std::fs::write(
            dir.join(paths::CRIME_TYPES_FILE),
            "Megye_Neve,Év,Bűncselekmény_Típus,Esetszám\nPest,2020,Lopás,400\n",
        )
        .unwrap();

        let dataset = Dataset::load(&DataPaths::in_dir(&dir)).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(dataset.joined().rows().len(), 1);
        assert_eq!(dataset.crime_type_records().len(), 1);
        assert_eq!(dataset.category_table().len(), 1);
    }

    #[test]
    fn counties_come_from_the_aggregate_table() {
        let dataset = Dataset::from_parts(
            vec![GeographicRegion {
                name: "Pest".to_string(),
                boundary: geo::MultiPolygon(vec![]),
            }],
            vec![
                CrimeRecord::new("Pest".to_string(), 2020, 1.0, 10.0),
                CrimeRecord::new("Budapest".to_string(), 2020, 1.0, 10.0),
                CrimeRecord::new("Pest".to_string(), 2021, 1.0, 10.0),
            ],
            vec![],
            CategoryTable::default(),
        );
        assert_eq!(dataset.counties(), ["Budapest", "Pest"]);
        assert_eq!(dataset.joined().rows().len(), 2);
        assert_eq!(dataset.year_bounds(), Some((2020, 2021)));
    }
}
