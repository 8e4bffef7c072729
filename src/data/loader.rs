//! Dataset ingestion from the processed CSV tables and the GeoJSON file.
//!
//! Loading is all-or-nothing: the first missing or malformed file aborts
//! with a [`DataError`] and no partial store is returned.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

use super::store::{CountryLookup, CountryRecord, DataStore, GeoShapes, TemporalRecord, TotalRecord};
use crate::error::DataError;

/// Locations of the four dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub geojson: PathBuf,
    pub countries: PathBuf,
    pub stats_total: PathBuf,
    pub stats_temporal: PathBuf,
}

impl DataPaths {
    /// Paths under a dataset root laid out as
    /// `imported_data/countries.json` and `processed_data/*.csv`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let processed = root.join("processed_data");
        Self {
            geojson: root.join("imported_data").join("countries.json"),
            countries: processed.join("countries.csv"),
            stats_total: processed.join("stats_total.csv"),
            stats_temporal: processed.join("stats_temporal.csv"),
        }
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: FeatureProperties,
    #[serde(default)]
    geometry: Value,
}

#[derive(Deserialize)]
struct FeatureProperties {
    #[serde(alias = "ISO_A3")]
    iso_a3: String,
}

/// Load every table. Fails on the first unreadable file.
pub fn load_data(paths: &DataPaths) -> Result<DataStore, DataError> {
    let shapes = read_shapes(&paths.geojson)?;
    let countries: CountryLookup = read_csv::<CountryRecord>(&paths.countries)?
        .into_iter()
        .collect();
    let totals: Vec<TotalRecord> = read_csv(&paths.stats_total)?;
    let temporal: Vec<TemporalRecord> = read_csv(&paths.stats_temporal)?;

    info!(
        shapes = shapes.len(),
        countries = countries.len(),
        totals = totals.len(),
        temporal = temporal.len(),
        "Data loaded successfully"
    );

    Ok(DataStore::new(temporal, totals, countries, shapes))
}

fn open(path: &Path) -> Result<BufReader<File>, DataError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| DataError::from_open(path.to_path_buf(), e))
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn read_shapes(path: &Path) -> Result<GeoShapes, DataError> {
    let collection: FeatureCollection =
        serde_json::from_reader(open(path)?).map_err(|source| DataError::GeoJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut shapes = GeoShapes::default();
    for feature in collection.features {
        shapes.insert(feature.properties.iso_a3, feature.geometry);
    }
    Ok(shapes)
}
