//! Timeline slider label and marks.

use serde::Serialize;

use crate::models::{timeline_marks, DATE_COUNT};
use crate::state::SelectionState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePayload {
    pub index: usize,
    pub count: usize,
    pub label: String,
    pub marks: Vec<(usize, String)>,
}

pub fn build_timeline(state: &SelectionState) -> TimelinePayload {
    TimelinePayload {
        index: state.date_index().get(),
        count: DATE_COUNT,
        label: format!("Date selected: {}", state.date_index()),
        marks: timeline_marks(),
    }
}
