//! Aggregation routines
//!
//! Pure functions from the dataset and a selection to the numbers each view
//! needs. Nothing here holds state or writes to the store, so calling any of
//! them twice with the same inputs gives the same output.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::data::DataStore;
use crate::models::{DateIndex, Metric, DATES, DATE_COUNT};

/// Divisor applied to the column maximum so early, low-incidence months stay
/// visible on the colour scale.
pub const RANGE_COMPRESSION: f64 = 1.5;

/// Absolute figures shown when hovering a region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AbsoluteCounts {
    pub infections: f64,
    pub deaths: f64,
    pub vaccinations: f64,
}

/// Map data for one metric and one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSeries {
    pub metric: Metric,
    pub date: NaiveDate,
    /// Metric value per ISO code. Countries without a row for the date are absent.
    pub values: BTreeMap<String, f64>,
    pub hover: BTreeMap<String, AbsoluteCounts>,
    /// Colour range `[0, max(column) / 1.5]`, the maximum taken over every
    /// date rather than only `date`.
    pub range: (f64, f64),
}

/// Summed series for the selection, one point per timeline date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub dates: Vec<NaiveDate>,
    pub infections_per_million: Vec<f64>,
    pub deaths_absolute: Vec<f64>,
    pub vaccinations_per_million: Vec<f64>,
}

impl TrendSeries {
    fn zeroed() -> Self {
        Self {
            dates: DATES.to_vec(),
            infections_per_million: vec![0.0; DATE_COUNT],
            deaths_absolute: vec![0.0; DATE_COUNT],
            vaccinations_per_million: vec![0.0; DATE_COUNT],
        }
    }

    /// The summed series that corresponds to `metric`'s map column.
    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Infections => &self.infections_per_million,
            Metric::Deaths => &self.deaths_absolute,
            Metric::Vaccinations => &self.vaccinations_per_million,
        }
    }

    /// Largest value across all three series, or 0 when everything is zero.
    pub fn max_value(&self) -> f64 {
        Metric::ALL
            .iter()
            .flat_map(|m| self.series(*m).iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Cumulative totals for the selection, truncated to integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub infections: i64,
    pub deaths: i64,
    pub vaccinations: i64,
}

/// Project `metric` for every country reporting on `date`.
pub fn map_series(store: &DataStore, metric: Metric, date: NaiveDate) -> MapSeries {
    let mut values = BTreeMap::new();
    let mut hover = BTreeMap::new();

    for row in store.temporal().iter().filter(|r| r.date == date) {
        values.insert(row.iso_code.clone(), row.map_value(metric));
        hover.insert(
            row.iso_code.clone(),
            AbsoluteCounts {
                infections: row.infections_absolute,
                deaths: row.deaths_absolute,
                vaccinations: row.vaccinations_absolute,
            },
        );
    }

    MapSeries {
        metric,
        date,
        values,
        hover,
        range: (0.0, column_max(store, metric) / RANGE_COMPRESSION),
    }
}

/// Maximum of the metric's column across the whole temporal table.
pub fn column_max(store: &DataStore, metric: Metric) -> f64 {
    let max = store
        .temporal()
        .iter()
        .map(|r| r.map_value(metric))
        .fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() {
        max
    } else {
        0.0
    }
}

/// Sum the three map columns over `selected`, per timeline date.
///
/// An empty selection yields 48 zeros per series.
pub fn trend_series(store: &DataStore, selected: &BTreeSet<String>) -> TrendSeries {
    let mut trend = TrendSeries::zeroed();

    for row in store
        .temporal()
        .iter()
        .filter(|r| selected.contains(&r.iso_code))
    {
        let Some(idx) = DateIndex::from_date(row.date) else {
            continue;
        };
        let i = idx.get();
        trend.infections_per_million[i] += row.infections_per_million;
        trend.deaths_absolute[i] += row.deaths_absolute;
        trend.vaccinations_per_million[i] += row.vaccinations_per_million;
    }

    trend
}

/// Sum cumulative totals over `selected`.
pub fn totals(store: &DataStore, selected: &BTreeSet<String>) -> Totals {
    let (infections, deaths, vaccinations) = store
        .totals()
        .iter()
        .filter(|r| selected.contains(&r.iso_code))
        .fold((0.0, 0.0, 0.0), |(i, d, v), r| {
            (
                i + r.total_infections,
                d + r.total_deaths,
                v + r.total_vaccinations,
            )
        });

    Totals {
        infections: infections as i64,
        deaths: deaths as i64,
        vaccinations: vaccinations as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{TemporalRecord, TotalRecord};

    fn date(i: usize) -> NaiveDate {
        DATES[i]
    }

    fn row(code: &str, i: usize, inf: f64, deaths: f64, vacc: f64) -> TemporalRecord {
        TemporalRecord {
            iso_code: code.to_string(),
            date: date(i),
            infections_per_million: inf,
            infections_absolute: inf * 10.0,
            deaths_absolute: deaths,
            vaccinations_per_million: vacc,
            vaccinations_absolute: vacc * 10.0,
        }
    }

    fn total(code: &str, inf: f64, deaths: f64, vacc: f64) -> TotalRecord {
        TotalRecord {
            iso_code: code.to_string(),
            total_infections: inf,
            total_deaths: deaths,
            total_vaccinations: vacc,
        }
    }

    fn store() -> DataStore {
        DataStore::builder()
            .temporal(row("BRA", 0, 1.0, 2.0, 0.0))
            .temporal(row("BRA", 24, 30.0, 40.0, 50.0))
            .temporal(row("FRA", 24, 3.0, 4.0, 5.0))
            .temporal(row("FRA", 47, 300.0, 1.0, 9.0))
            .temporal(row("USA", 24, 6.0, 7.0, 8.0))
            .total(total("BRA", 100.9, 10.5, 1000.2))
            .total(total("FRA", 200.4, 20.7, 2000.9))
            .total(total("USA", 5.0, 5.0, 5.0))
            .build()
    }

    fn set(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_map_series_filters_date_and_projects_metric() {
        let series = map_series(&store(), Metric::Deaths, date(24));

        assert_eq!(series.values.len(), 3);
        assert_eq!(series.values["BRA"], 40.0);
        assert_eq!(series.values["FRA"], 4.0);
        assert_eq!(series.hover["BRA"].infections, 300.0);
        assert_eq!(series.hover["FRA"].vaccinations, 50.0);
    }

    #[test]
    fn test_map_series_range_uses_whole_column() {
        // FRA's 300 on the last date sets the range even when viewing date 24.
        let series = map_series(&store(), Metric::Infections, date(24));
        assert_eq!(series.range, (0.0, 200.0));
    }

    #[test]
    fn test_map_series_omits_countries_without_rows() {
        let series = map_series(&store(), Metric::Infections, date(0));
        assert_eq!(series.values.len(), 1);
        assert!(series.values.contains_key("BRA"));
        assert!(!series.values.contains_key("FRA"));
    }

    #[test]
    fn test_map_series_is_pure() {
        let store = store();
        let a = map_series(&store, Metric::Vaccinations, date(24));
        let b = map_series(&store, Metric::Vaccinations, date(24));
        assert_eq!(a, b);
    }

    #[test]
    fn test_map_series_empty_store_has_zero_range() {
        let series = map_series(&DataStore::default(), Metric::Infections, date(24));
        assert!(series.values.is_empty());
        assert_eq!(series.range, (0.0, 0.0));
    }

    #[test]
    fn test_trend_series_empty_selection_is_all_zero() {
        let trend = trend_series(&store(), &BTreeSet::new());
        for metric in Metric::ALL {
            let series = trend.series(metric);
            assert_eq!(series.len(), 48);
            assert!(series.iter().all(|v| *v == 0.0));
        }
        assert_eq!(trend.dates.len(), 48);
        assert_eq!(trend.max_value(), 0.0);
    }

    #[test]
    fn test_trend_series_sums_selected_only() {
        let trend = trend_series(&store(), &set(&["BRA", "FRA"]));

        assert_eq!(trend.infections_per_million[0], 1.0);
        assert_eq!(trend.infections_per_million[24], 33.0);
        assert_eq!(trend.deaths_absolute[24], 44.0);
        assert_eq!(trend.vaccinations_per_million[24], 55.0);
        assert_eq!(trend.infections_per_million[47], 300.0);
        assert_eq!(trend.infections_per_million[10], 0.0);
        assert_eq!(trend.max_value(), 300.0);
    }

    #[test]
    fn test_trend_series_ignores_off_timeline_rows() {
        let mut off = row("BRA", 0, 99.0, 99.0, 99.0);
        off.date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let store = DataStore::builder().temporal(off).build();

        let trend = trend_series(&store, &set(&["BRA"]));
        assert_eq!(trend.max_value(), 0.0);
    }

    #[test]
    fn test_totals_empty_selection_is_zero() {
        assert_eq!(totals(&store(), &BTreeSet::new()), Totals::default());
    }

    #[test]
    fn test_totals_sum_then_truncate() {
        let t = totals(&store(), &set(&["BRA", "FRA"]));
        assert_eq!(
            t,
            Totals {
                infections: 301,
                deaths: 31,
                vaccinations: 3001,
            }
        );
    }

    #[test]
    fn test_totals_unknown_code_contributes_nothing() {
        let t = totals(&store(), &set(&["ZZZ"]));
        assert_eq!(t, Totals::default());
    }
}
