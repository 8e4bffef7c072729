//! The three epidemiological metrics the explorer can display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;
use crate::views::palette::ColorScale;

/// Metric driving the map colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    Infections,
    Deaths,
    Vaccinations,
}

impl Metric {
    /// All metrics in dropdown order.
    pub const ALL: [Metric; 3] = [Metric::Infections, Metric::Deaths, Metric::Vaccinations];

    /// Display name, also the accepted `FromStr` spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Infections => "Infections",
            Metric::Deaths => "Deaths",
            Metric::Vaccinations => "Vaccinations",
        }
    }

    /// Name of the temporal column projected onto the map.
    pub fn map_column(&self) -> &'static str {
        match self {
            Metric::Infections => "Infections per million",
            Metric::Deaths => "Deaths absolute",
            Metric::Vaccinations => "Vaccinations per million",
        }
    }

    /// Colour-bar label for the map legend.
    pub fn color_label(&self) -> &'static str {
        match self {
            Metric::Infections => "Infections per million people",
            Metric::Deaths => "Deaths absolute",
            Metric::Vaccinations => "Vaccinations per million people",
        }
    }

    /// Sequential colour scale used for the choropleth.
    pub fn color_scale(&self) -> ColorScale {
        match self {
            Metric::Infections => ColorScale::Reds,
            Metric::Deaths => ColorScale::Greys,
            Metric::Vaccinations => ColorScale::IceReversed,
        }
    }

    /// Position in [`Metric::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Metric::Infections => 0,
            Metric::Deaths => 1,
            Metric::Vaccinations => 2,
        }
    }

    /// Cycle to the next metric
    pub fn next(&self) -> Self {
        match self {
            Metric::Infections => Metric::Deaths,
            Metric::Deaths => Metric::Vaccinations,
            Metric::Vaccinations => Metric::Infections,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ContractError::UnknownMetric {
                value: s.to_string(),
            })
    }
}
