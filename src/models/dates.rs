//! The fixed monthly timeline.
//!
//! The dataset covers 48 months starting 2020-01-01. Every active date is
//! one of these points; [`DateIndex`] cannot hold anything else.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ContractError;

/// Number of monthly points on the timeline.
pub const DATE_COUNT: usize = 48;

/// Index of the date selected at startup (2022-01-01).
pub const DEFAULT_DATE_INDEX: usize = 24;

const START_YEAR: i32 = 2020;

/// The 48 first-of-month dates, 2020-01-01 through 2023-12-01.
pub static DATES: Lazy<[NaiveDate; DATE_COUNT]> = Lazy::new(|| {
    std::array::from_fn(|i| {
        let year = START_YEAR + (i / 12) as i32;
        let month = (i % 12) as u32 + 1;
        NaiveDate::from_ymd_opt(year, month, 1).expect("first day of a month is a valid date")
    })
});

/// A validated position on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateIndex(usize);

impl DateIndex {
    /// Validate a raw index coming from the presentation layer.
    pub fn new(index: i64) -> Result<Self, ContractError> {
        if (0..DATE_COUNT as i64).contains(&index) {
            Ok(Self(index as usize))
        } else {
            Err(ContractError::DateOutOfRange { index })
        }
    }

    /// Reverse lookup: the index of `date` if it is one of [`DATES`].
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        if date.day() != 1 {
            return None;
        }
        let months = (date.year() - START_YEAR) * 12 + date.month0() as i32;
        usize::try_from(months)
            .ok()
            .filter(|&m| m < DATE_COUNT)
            .map(Self)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        DATES[self.0]
    }

    /// First index of the timeline.
    pub fn first() -> Self {
        Self(0)
    }

    /// Last index of the timeline.
    pub fn last() -> Self {
        Self(DATE_COUNT - 1)
    }
}

impl Default for DateIndex {
    fn default() -> Self {
        Self(DEFAULT_DATE_INDEX)
    }
}

impl fmt::Display for DateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format("%Y-%m-%d"))
    }
}

/// Slider marks: the year on every January, empty elsewhere.
pub fn timeline_marks() -> Vec<(usize, String)> {
    DATES
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let label = if date.month() == 1 {
                date.year().to_string()
            } else {
                String::new()
            };
            (i, label)
        })
        .collect()
}
