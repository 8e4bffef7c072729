//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//!
//! let router = EventRouter::new(common::fixture_store()).unwrap();
//! ```

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use covid_timeline::data::{DataStore, TemporalRecord, TotalRecord};
use covid_timeline::models::DATES;

/// Per-country monthly figure: every column is `base * (index + 1)`.
pub fn monthly(iso_code: &str, index: usize, base: f64) -> TemporalRecord {
    let v = base * (index as f64 + 1.0);
    TemporalRecord {
        iso_code: iso_code.to_string(),
        date: DATES[index],
        infections_per_million: v,
        infections_absolute: v * 100.0,
        deaths_absolute: v / 10.0,
        vaccinations_per_million: v * 2.0,
        vaccinations_absolute: v * 200.0,
    }
}

pub fn total(iso_code: &str, infections: f64, deaths: f64, vaccinations: f64) -> TotalRecord {
    TotalRecord {
        iso_code: iso_code.to_string(),
        total_infections: infections,
        total_deaths: deaths,
        total_vaccinations: vaccinations,
    }
}

/// BRA, FRA and USA with a row for each of the 48 dates, cumulative totals,
/// display names and a polygon per country.
pub fn fixture_store() -> Arc<DataStore> {
    let mut builder = DataStore::builder();
    for index in 0..DATES.len() {
        builder = builder
            .temporal(monthly("BRA", index, 10.0))
            .temporal(monthly("FRA", index, 20.0))
            .temporal(monthly("USA", index, 30.0));
    }

    let square = |x: f64| {
        serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 0.0]]]
        })
    };

    Arc::new(
        builder
            .total(total("BRA", 1_000.9, 10.5, 5_000.2))
            .total(total("FRA", 2_000.4, 20.9, 6_000.7))
            .total(total("USA", 3_000.0, 30.0, 7_000.0))
            .country("BRA", "Brazil")
            .country("FRA", "France")
            .country("USA", "United States")
            .shape("BRA", square(0.0))
            .shape("FRA", square(2.0))
            .shape("USA", square(4.0))
            .build(),
    )
}

/// Write a dataset tree in the on-disk layout under `root`.
pub fn write_dataset(root: &Path) {
    let imported = root.join("imported_data");
    let processed = root.join("processed_data");
    fs::create_dir_all(&imported).unwrap();
    fs::create_dir_all(&processed).unwrap();

    fs::write(
        imported.join("countries.json"),
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"iso_a3":"BRA"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","properties":{"iso_a3":"FRA"},
             "geometry":{"type":"Polygon","coordinates":[[[2,0],[3,0],[3,1],[2,0]]]}}
        ]}"#,
    )
    .unwrap();

    fs::write(
        processed.join("countries.csv"),
        "CCA3,Country\nBRA,Brazil\nFRA,France\n",
    )
    .unwrap();

    fs::write(
        processed.join("stats_total.csv"),
        "iso_code,Total infections,Total deaths,Total vaccinations\n\
         BRA,1000,10,5000\n\
         FRA,2000,20,6000\n",
    )
    .unwrap();

    fs::write(
        processed.join("stats_temporal.csv"),
        "iso_code,date,Infections per million,Infections absolute,Deaths absolute,Vaccinations per million,Vaccinations absolute\n\
         BRA,2022-01-01,150,3000,40,900,18000\n\
         FRA,2022-01-01,300,2000,25,800,50000\n\
         BRA,2020-01-01,0,0,0,0,0\n",
    )
    .unwrap();
}
