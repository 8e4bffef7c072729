//! The read-only dataset.
//!
//! A [`DataStore`] is built once at startup and never written afterwards.
//! The engine only ever borrows it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Metric;

// ============================================================================
// Table rows
// ============================================================================

/// One row of `stats_temporal`: a country's figures for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalRecord {
    pub iso_code: String,
    pub date: NaiveDate,
    #[serde(rename = "Infections per million")]
    pub infections_per_million: f64,
    #[serde(rename = "Infections absolute")]
    pub infections_absolute: f64,
    #[serde(rename = "Deaths absolute")]
    pub deaths_absolute: f64,
    #[serde(rename = "Vaccinations per million")]
    pub vaccinations_per_million: f64,
    #[serde(rename = "Vaccinations absolute")]
    pub vaccinations_absolute: f64,
}

impl TemporalRecord {
    /// The column the map shows for `metric`.
    pub fn map_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Infections => self.infections_per_million,
            Metric::Deaths => self.deaths_absolute,
            Metric::Vaccinations => self.vaccinations_per_million,
        }
    }
}

/// One row of `stats_total`: a country's cumulative figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalRecord {
    pub iso_code: String,
    #[serde(rename = "Total infections")]
    pub total_infections: f64,
    #[serde(rename = "Total deaths")]
    pub total_deaths: f64,
    #[serde(rename = "Total vaccinations")]
    pub total_vaccinations: f64,
}

/// One row of `countries`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "CCA3")]
    pub iso_code: String,
    #[serde(rename = "Country")]
    pub name: String,
}

// ============================================================================
// Lookups
// ============================================================================

/// ISO code to display name.
///
/// Several codes may share a name; lookups go by code only. When a code
/// appears twice the first row wins.
#[derive(Debug, Clone, Default)]
pub struct CountryLookup {
    names: HashMap<String, String>,
}

impl CountryLookup {
    pub fn name(&self, iso_code: &str) -> Option<&str> {
        self.names.get(iso_code).map(String::as_str)
    }

    pub fn contains(&self, iso_code: &str) -> bool {
        self.names.contains_key(iso_code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn insert(&mut self, iso_code: String, name: String) {
        self.names.entry(iso_code).or_insert(name);
    }
}

impl FromIterator<CountryRecord> for CountryLookup {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        let mut lookup = CountryLookup::default();
        for record in iter {
            lookup.insert(record.iso_code, record.name);
        }
        lookup
    }
}

/// Country boundary geometry keyed by ISO code.
///
/// Opaque to the engine: geometries are handed through to the map payload
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct GeoShapes {
    shapes: HashMap<String, Arc<Value>>,
}

impl GeoShapes {
    pub fn get(&self, iso_code: &str) -> Option<Arc<Value>> {
        self.shapes.get(iso_code).cloned()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub(crate) fn insert(&mut self, iso_code: String, geometry: Value) {
        self.shapes.insert(iso_code, Arc::new(geometry));
    }
}

// ============================================================================
// DataStore
// ============================================================================

/// The full immutable dataset.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    temporal: Vec<TemporalRecord>,
    totals: Vec<TotalRecord>,
    countries: CountryLookup,
    shapes: GeoShapes,
}

impl DataStore {
    pub fn new(
        temporal: Vec<TemporalRecord>,
        totals: Vec<TotalRecord>,
        countries: CountryLookup,
        shapes: GeoShapes,
    ) -> Self {
        Self {
            temporal,
            totals,
            countries,
            shapes,
        }
    }

    /// Start building a store in memory.
    pub fn builder() -> DataStoreBuilder {
        DataStoreBuilder::default()
    }

    pub fn temporal(&self) -> &[TemporalRecord] {
        &self.temporal
    }

    pub fn totals(&self) -> &[TotalRecord] {
        &self.totals
    }

    pub fn countries(&self) -> &CountryLookup {
        &self.countries
    }

    pub fn shapes(&self) -> &GeoShapes {
        &self.shapes
    }
}

/// Builder for in-memory stores (fixtures, benchmarks, embedding).
#[derive(Debug, Default)]
pub struct DataStoreBuilder {
    temporal: Vec<TemporalRecord>,
    totals: Vec<TotalRecord>,
    countries: CountryLookup,
    shapes: GeoShapes,
}

impl DataStoreBuilder {
    pub fn temporal(mut self, record: TemporalRecord) -> Self {
        self.temporal.push(record);
        self
    }

    pub fn total(mut self, record: TotalRecord) -> Self {
        self.totals.push(record);
        self
    }

    pub fn country(mut self, iso_code: impl Into<String>, name: impl Into<String>) -> Self {
        self.countries.insert(iso_code.into(), name.into());
        self
    }

    pub fn shape(mut self, iso_code: impl Into<String>, geometry: Value) -> Self {
        self.shapes.insert(iso_code.into(), geometry);
        self
    }

    pub fn build(self) -> DataStore {
        DataStore::new(self.temporal, self.totals, self.countries, self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(code: &str) -> TemporalRecord {
        TemporalRecord {
            iso_code: code.to_string(),
            date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            infections_per_million: 1.5,
            infections_absolute: 10.0,
            deaths_absolute: 2.0,
            vaccinations_per_million: 7.25,
            vaccinations_absolute: 50.0,
        }
    }

    #[test]
    fn test_map_value_projects_metric_column() {
        let rec = record("FRA");
        assert_eq!(rec.map_value(Metric::Infections), 1.5);
        assert_eq!(rec.map_value(Metric::Deaths), 2.0);
        assert_eq!(rec.map_value(Metric::Vaccinations), 7.25);
    }

    #[test]
    fn test_country_lookup_first_row_wins() {
        let lookup: CountryLookup = vec![
            CountryRecord {
                iso_code: "COD".to_string(),
                name: "DR Congo".to_string(),
            },
            CountryRecord {
                iso_code: "COD".to_string(),
                name: "Congo (Kinshasa)".to_string(),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.name("COD"), Some("DR Congo"));
        assert_eq!(lookup.name("COG"), None);
    }

    #[test]
    fn test_builder_collects_all_tables() {
        let store = DataStore::builder()
            .temporal(record("FRA"))
            .total(TotalRecord {
                iso_code: "FRA".to_string(),
                total_infections: 1.0,
                total_deaths: 2.0,
                total_vaccinations: 3.0,
            })
            .country("FRA", "France")
            .shape("FRA", json!({"type": "Polygon", "coordinates": []}))
            .build();

        assert_eq!(store.temporal().len(), 1);
        assert_eq!(store.totals().len(), 1);
        assert_eq!(store.countries().name("FRA"), Some("France"));
        assert!(store.shapes().get("FRA").is_some());
        assert!(store.shapes().get("DEU").is_none());
    }
}
