//! Application state for the terminal dashboard.
//!
//! `App` owns the presenter side: the last [`ViewFrame`] received from the
//! router, the map cursor and redraw bookkeeping. All selection changes go
//! through [`SharedRouter::dispatch`].

mod handlers;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::sync::Arc;

use crate::data::DataStore;
use crate::error::TimelineResult;
use crate::events::{EventRouter, SharedRouter, UiEvent, ViewFrame};
use crate::models::{Metric, DATE_COUNT};

pub struct App {
    router: SharedRouter,
    store: Arc<DataStore>,
    /// Frame currently on screen
    pub frame: ViewFrame,
    /// Cursor and scroll offset of the map list
    pub map_state: ListState,
    /// Map list area from the last draw, used for mouse hit testing
    pub map_area: Option<Rect>,
    /// Message of the last rejected event, cleared by the next accepted one
    pub last_error: Option<String>,
    pub should_quit: bool,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
}

impl App {
    /// Build the router for `store` and take its initial frame.
    pub fn new(store: Arc<DataStore>) -> TimelineResult<Self> {
        let router = SharedRouter::new(EventRouter::new(Arc::clone(&store))?);
        Ok(Self::with_router(router, store))
    }

    pub fn with_router(router: SharedRouter, store: Arc<DataStore>) -> Self {
        let frame = router.snapshot();
        let mut map_state = ListState::default();
        if !frame.map.regions.is_empty() {
            map_state.select(Some(0));
        }
        Self {
            router,
            store,
            frame,
            map_state,
            map_area: None,
            last_error: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn router(&self) -> &SharedRouter {
        &self.router
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Send `event` to the router and adopt the resulting frame.
    ///
    /// A rejected event keeps the current frame and records the message for
    /// the status line.
    pub fn dispatch(&mut self, event: UiEvent) {
        match self.router.dispatch(event) {
            Ok(frame) => {
                self.frame = frame;
                self.last_error = None;
                self.clamp_cursor();
            }
            Err(err) => {
                self.last_error = Some(err.user_message());
            }
        }
        self.mark_dirty();
    }

    /// ISO codes listed in the map panel: every region on the current date
    /// plus selected countries without data, so they can still be toggled off.
    pub fn map_rows(&self) -> Vec<String> {
        let mut rows: Vec<String> = self
            .frame
            .map
            .regions
            .iter()
            .map(|r| r.iso_code.clone())
            .collect();
        for border in &self.frame.map.borders {
            if self.frame.map.region(&border.iso_code).is_none() {
                rows.push(border.iso_code.clone());
            }
        }
        rows.sort();
        rows
    }

    /// Display name for a country, falling back to its ISO code.
    pub fn country_name<'a>(&'a self, iso_code: &'a str) -> &'a str {
        self.store.countries().name(iso_code).unwrap_or(iso_code)
    }

    pub fn selected_row(&self) -> Option<String> {
        let index = self.map_state.selected()?;
        self.map_rows().into_iter().nth(index)
    }

    pub fn select_next(&mut self) {
        let len = self.map_rows().len();
        if len == 0 {
            return;
        }
        let next = match self.map_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.map_state.select(Some(next));
        self.mark_dirty();
    }

    pub fn select_previous(&mut self) {
        if self.map_rows().is_empty() {
            return;
        }
        let prev = self.map_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.map_state.select(Some(prev));
        self.mark_dirty();
    }

    /// Click the country under the map cursor.
    pub fn click_selected(&mut self) {
        if let Some(iso_code) = self.selected_row() {
            self.dispatch(UiEvent::CountryClicked(iso_code));
        }
    }

    /// Move the timeline by `delta` months, stopping at either end.
    pub fn step_date(&mut self, delta: i64) {
        let current = self.frame.timeline.index as i64;
        let target = (current + delta).clamp(0, DATE_COUNT as i64 - 1);
        if target != current {
            self.dispatch(UiEvent::DateChanged(target));
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        if metric != self.frame.selection.metric() {
            self.dispatch(UiEvent::MetricChanged(metric));
        }
    }

    pub fn cycle_metric(&mut self) {
        let next = self.frame.selection.metric().next();
        self.set_metric(next);
    }

    fn clamp_cursor(&mut self) {
        let len = self.map_rows().len();
        match self.map_state.selected() {
            _ if len == 0 => self.map_state.select(None),
            Some(i) if i >= len => self.map_state.select(Some(len - 1)),
            None => self.map_state.select(Some(0)),
            Some(_) => {}
        }
    }
}
