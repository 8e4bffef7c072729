//! Selection state
//!
//! The active metric, the active date and the set of selected countries.
//! There is exactly one of these per router; all mutation goes through the
//! three methods below.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::ContractError;
use crate::models::{DateIndex, Metric};

/// What the user currently has selected.
///
/// An empty selection is a genuinely empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    metric: Metric,
    date: DateIndex,
    countries: BTreeSet<String>,
}

impl SelectionState {
    /// Defaults: Infections, 2022-01-01, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn date_index(&self) -> DateIndex {
        self.date
    }

    pub fn active_date(&self) -> NaiveDate {
        self.date.date()
    }

    /// Selected ISO codes in code order.
    pub fn countries(&self) -> &BTreeSet<String> {
        &self.countries
    }

    pub fn is_selected(&self, iso_code: &str) -> bool {
        self.countries.contains(iso_code)
    }

    pub fn has_selection(&self) -> bool {
        !self.countries.is_empty()
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Move to `DATES[index]`. Out-of-range indices leave the date unchanged.
    pub fn set_date(&mut self, index: i64) -> Result<(), ContractError> {
        self.date = DateIndex::new(index)?;
        Ok(())
    }

    /// Flip membership of `iso_code`. Returns true if it is now selected.
    pub fn toggle_country(&mut self, iso_code: &str) -> bool {
        if self.countries.remove(iso_code) {
            false
        } else {
            self.countries.insert(iso_code.to_string());
            true
        }
    }
}
