//! Line chart of the selection's summed statistics.

use chrono::NaiveDate;
use serde::Serialize;

use super::palette::{Rgb, DATE_MARKER, DEATHS_LINE, INFECTIONS_LINE, VACCINATIONS_LINE};
use crate::aggregate::trend_series;
use crate::data::DataStore;
use crate::models::Metric;
use crate::state::SelectionState;

pub const TREND_TITLE: &str = "Summed statistics of selection";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: &'static str,
    pub color: Rgb,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineSeries {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineDash {
    Solid,
    Dashed,
}

/// Vertical line at the active date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateMarker {
    pub date: NaiveDate,
    pub index: usize,
    pub color: Rgb,
    pub dash: LineDash,
}

/// Y axis bounds; `None` means "fit to data".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegendPlacement {
    TopHorizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPayload {
    pub title: &'static str,
    /// Infections per million, deaths absolute, vaccinations per million.
    pub lines: Vec<LineSeries>,
    pub marker: DateMarker,
    pub y_axis: AxisRange,
    pub legend: LegendPlacement,
}

impl TrendPayload {
    /// The line matching `metric`'s map column.
    pub fn line(&self, metric: Metric) -> &LineSeries {
        &self.lines[metric.index()]
    }

    /// Largest plotted value, 0 for an empty selection.
    pub fn max_value(&self) -> f64 {
        self.lines
            .iter()
            .flat_map(LineSeries::values)
            .fold(0.0, f64::max)
    }
}

pub fn build_trend(store: &DataStore, state: &SelectionState) -> TrendPayload {
    let trend = trend_series(store, state.countries());

    let lines = Metric::ALL
        .iter()
        .zip([INFECTIONS_LINE, DEATHS_LINE, VACCINATIONS_LINE])
        .map(|(metric, color)| LineSeries {
            label: metric.map_column(),
            color,
            points: trend
                .dates
                .iter()
                .copied()
                .zip(trend.series(*metric).iter().copied())
                .collect(),
        })
        .collect();

    TrendPayload {
        title: TREND_TITLE,
        lines,
        marker: DateMarker {
            date: state.active_date(),
            index: state.date_index().get(),
            color: DATE_MARKER,
            dash: LineDash::Dashed,
        },
        y_axis: AxisRange {
            min: Some(0.0),
            max: None,
        },
        legend: LegendPlacement::TopHorizontal,
    }
}
