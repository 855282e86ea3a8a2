//! CSV loaders for the three statistics tables.
//!
//! Column headers are the Hungarian originals. Rows that fail to
//! deserialize are skipped; a table missing a required column fails the
//! whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hu_crime_map_crime_models::{CategoryTable, CrimeRecord, CrimeTypeRecord};
use serde::Deserialize;

use crate::DatasetError;

const COUNTY_COLUMN: &str = "Megye_Neve";
const YEAR_COLUMN: &str = "Év";
const CRIME_COUNT_COLUMN: &str = "Regisztrált Bűncselekmények Száma";
const POPULATION_COLUMN: &str = "Népesség száma";
const CRIME_TYPE_COLUMN: &str = "Bűncselekmény_Típus";
const CASE_COUNT_COLUMN: &str = "Esetszám";

#[derive(Debug, Deserialize)]
struct AggregateRow {
    #[serde(rename = "Megye_Neve")]
    county: String,
    #[serde(rename = "Év")]
    year: i32,
    #[serde(rename = "Regisztrált Bűncselekmények Száma")]
    registered_crime_count: f64,
    #[serde(rename = "Népesség száma")]
    population: f64,
}

#[derive(Debug, Deserialize)]
struct CrimeTypeRow {
    #[serde(rename = "Megye_Neve")]
    county: String,
    #[serde(rename = "Év")]
    year: i32,
    #[serde(rename = "Bűncselekmény_Típus")]
    crime_type: String,
    #[serde(rename = "Esetszám")]
    case_count: f64,
}

/// Reads the aggregate crime and population table.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened, the header is
/// unreadable, or a required column is missing.
pub fn read_crime_records(path: &Path) -> Result<Vec<CrimeRecord>, DatasetError> {
    parse_crime_records(open(path)?, &path.display().to_string())
}

/// Parses the aggregate table from any reader. `label` names the source in
/// errors and log lines.
///
/// County names are trimmed and the safety index is derived per row.
///
/// # Errors
///
/// Returns [`DatasetError`] if the header is unreadable or a required
/// column is missing.
pub fn parse_crime_records(
    reader: impl Read,
    label: &str,
) -> Result<Vec<CrimeRecord>, DatasetError> {
    let rows: Vec<AggregateRow> = deserialize_rows(
        reader,
        label,
        &[
            COUNTY_COLUMN,
            YEAR_COLUMN,
            CRIME_COUNT_COLUMN,
            POPULATION_COLUMN,
        ],
    )?;

    let records: Vec<CrimeRecord> = rows
        .into_iter()
        .map(|row| {
            CrimeRecord::new(
                row.county.trim().to_string(),
                row.year,
                row.registered_crime_count,
                row.population,
            )
        })
        .collect();

    let undefined = records.iter().filter(|r| r.safety_index.is_none()).count();
    if undefined > 0 {
        log::info!("{label}: {undefined} rows have zero population, safety index left undefined");
    }

    Ok(records)
}

/// Reads the detailed per-county crime type table.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened, the header is
/// unreadable, or a required column is missing.
pub fn read_crime_type_records(path: &Path) -> Result<Vec<CrimeTypeRecord>, DatasetError> {
    parse_crime_type_records(open(path)?, &path.display().to_string())
}

/// Parses the crime type table from any reader.
///
/// Total rows are kept here; they are removed when the detailed view is
/// filtered.
///
/// # Errors
///
/// Returns [`DatasetError`] if the header is unreadable or a required
/// column is missing.
pub fn parse_crime_type_records(
    reader: impl Read,
    label: &str,
) -> Result<Vec<CrimeTypeRecord>, DatasetError> {
    let rows: Vec<CrimeTypeRow> = deserialize_rows(
        reader,
        label,
        &[
            COUNTY_COLUMN,
            YEAR_COLUMN,
            CRIME_TYPE_COLUMN,
            CASE_COUNT_COLUMN,
        ],
    )?;

    Ok(rows
        .into_iter()
        .map(|row| CrimeTypeRecord {
            county: row.county.trim().to_string(),
            year: row.year,
            crime_type: row.crime_type,
            case_count: row.case_count,
        })
        .collect())
}

/// Reads the national category table verbatim.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened or parsed.
pub fn read_category_table(path: &Path) -> Result<CategoryTable, DatasetError> {
    parse_category_table(open(path)?, &path.display().to_string())
}

/// Parses the category table from any reader, keeping every cell as text.
///
/// # Errors
///
/// Returns [`DatasetError`] if the CSV is malformed.
pub fn parse_category_table(reader: impl Read, label: &str) -> Result<CategoryTable, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| csv_error(label, source))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|source| csv_error(label, source))?;
        rows.push(record.iter().map(|v| v.trim().to_string()).collect());
    }

    Ok(CategoryTable { headers, rows })
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn csv_error(label: &str, source: csv::Error) -> DatasetError {
    DatasetError::Csv {
        path: label.to_string(),
        source,
    }
}

/// Checks that every `required` column is present, then deserializes each
/// row, skipping malformed ones.
fn deserialize_rows<T: serde::de::DeserializeOwned>(
    reader: impl Read,
    label: &str,
    required: &[&str],
) -> Result<Vec<T>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| csv_error(label, source))?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DatasetError::MissingColumn {
                path: label.to_string(),
                column: (*column).to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    let mut skipped = 0u64;
    for result in csv_reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                log::trace!("  skipping malformed row: {e}");
                skipped += 1;
            }
        }
    }

    log::info!("{label}: loaded {} rows ({skipped} skipped)", rows.len());
    Ok(rows)
}
