//! COVID-19 timeline explorer.
//!
//! A selection engine over per-country COVID-19 statistics: a metric, one of
//! 48 monthly dates and a set of selected countries drive a map, a trend
//! chart, selection totals and a timeline label. [`events::EventRouter`] is
//! the entry point; the terminal front end lives in [`app`] and [`ui`].

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod views;
