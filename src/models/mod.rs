//! Value types shared by the engine, the views and the presenter.

pub mod dates;
pub mod metric;

pub use dates::{timeline_marks, DateIndex, DATES, DATE_COUNT, DEFAULT_DATE_INDEX};
pub use metric::Metric;
