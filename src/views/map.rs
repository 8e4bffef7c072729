//! Choropleth payload.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::palette::{ColorScale, Rgb, SELECTION_OUTLINE};
use crate::aggregate::{map_series, AbsoluteCounts};
use crate::data::DataStore;
use crate::models::Metric;
use crate::state::SelectionState;

/// Outline width of a selected country.
pub const BORDER_WIDTH: u8 = 3;

/// One coloured region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub iso_code: String,
    pub value: f64,
    pub color: Rgb,
    pub absolute: AbsoluteCounts,
}

/// Highlight drawn over a selected country: transparent fill, coloured outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderOverlay {
    pub iso_code: String,
    pub line_color: Rgb,
    pub line_width: u8,
    /// Boundary geometry, when the shapes file has one for this code.
    pub geometry: Option<Arc<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPayload {
    pub metric: Metric,
    pub date: NaiveDate,
    pub color_label: &'static str,
    pub scale: ColorScale,
    pub range: (f64, f64),
    /// Regions in ISO-code order.
    pub regions: Vec<Region>,
    /// One overlay per selected country, in ISO-code order.
    pub borders: Vec<BorderOverlay>,
}

impl MapPayload {
    pub fn region(&self, iso_code: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.iso_code == iso_code)
    }

    pub fn has_border(&self, iso_code: &str) -> bool {
        self.borders.iter().any(|b| b.iso_code == iso_code)
    }
}

pub fn build_map(store: &DataStore, state: &SelectionState) -> MapPayload {
    let metric = state.metric();
    let series = map_series(store, metric, state.active_date());
    let scale = metric.color_scale();

    let regions = series
        .values
        .iter()
        .map(|(code, &value)| Region {
            iso_code: code.clone(),
            value,
            color: scale.color_for(value, series.range),
            absolute: series.hover.get(code).copied().unwrap_or_default(),
        })
        .collect();

    let borders = state
        .countries()
        .iter()
        .map(|code| BorderOverlay {
            iso_code: code.clone(),
            line_color: SELECTION_OUTLINE,
            line_width: BORDER_WIDTH,
            geometry: store.shapes().get(code),
        })
        .collect();

    MapPayload {
        metric,
        date: series.date,
        color_label: metric.color_label(),
        scale,
        range: series.range,
        regions,
        borders,
    }
}
