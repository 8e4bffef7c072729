//! Event routing
//!
//! The [`EventRouter`] owns the one [`SelectionState`], applies user events
//! to it and rebuilds the dependent views. Every [`ViewFrame`] it hands out
//! was computed from a single settled state: an event that fails leaves
//! both the state and the previous frame untouched.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error};

use crate::data::DataStore;
use crate::error::{ContractError, TimelineResult};
use crate::models::Metric;
use crate::state::SelectionState;
use crate::views::{
    build_map, build_stats, build_timeline, build_trend, MapPayload, StatsPayload,
    TimelinePayload, TrendPayload,
};

/// Discrete input from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    MetricChanged(Metric),
    /// Raw slider position; validated against `[0, 47]`.
    DateChanged(i64),
    /// A map location was clicked.
    CountryClicked(String),
}

impl UiEvent {
    fn apply(&self, state: &mut SelectionState) -> Result<(), ContractError> {
        match self {
            UiEvent::MetricChanged(metric) => state.set_metric(*metric),
            UiEvent::DateChanged(index) => state.set_date(*index)?,
            UiEvent::CountryClicked(iso_code) => {
                state.toggle_country(iso_code);
            }
        }
        Ok(())
    }
}

/// Which payloads an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewSet {
    pub map: bool,
    pub trend: bool,
    pub stats: bool,
    pub timeline: bool,
}

impl ViewSet {
    pub const ALL: ViewSet = ViewSet {
        map: true,
        trend: true,
        stats: true,
        timeline: true,
    };

    /// Views whose output depends on what `event` mutates.
    pub fn for_event(event: &UiEvent) -> Self {
        match event {
            UiEvent::MetricChanged(_) => ViewSet {
                map: true,
                ..ViewSet::default()
            },
            UiEvent::DateChanged(_) => ViewSet {
                map: true,
                trend: true,
                timeline: true,
                ..ViewSet::default()
            },
            UiEvent::CountryClicked(_) => ViewSet {
                map: true,
                trend: true,
                stats: true,
                ..ViewSet::default()
            },
        }
    }
}

/// All view payloads for one settled state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewFrame {
    pub selection: SelectionState,
    pub map: MapPayload,
    pub trend: TrendPayload,
    pub stats: StatsPayload,
    pub timeline: TimelinePayload,
    /// Payloads rebuilt by the event that produced this frame.
    pub changed: ViewSet,
}

impl ViewFrame {
    /// Build the views in `changed`, carrying the rest over from `previous`.
    fn build(
        store: &DataStore,
        state: &SelectionState,
        changed: ViewSet,
        previous: Option<&ViewFrame>,
    ) -> Result<Self, ContractError> {
        let stats = match previous {
            Some(prev) if !changed.stats => prev.stats.clone(),
            _ => build_stats(store, state)?,
        };
        let map = match previous {
            Some(prev) if !changed.map => prev.map.clone(),
            _ => build_map(store, state),
        };
        let trend = match previous {
            Some(prev) if !changed.trend => prev.trend.clone(),
            _ => build_trend(store, state),
        };
        let timeline = match previous {
            Some(prev) if !changed.timeline => prev.timeline.clone(),
            _ => build_timeline(state),
        };

        Ok(Self {
            selection: state.clone(),
            map,
            trend,
            stats,
            timeline,
            changed,
        })
    }
}

/// Owns the selection and turns events into view frames.
#[derive(Debug)]
pub struct EventRouter {
    store: Arc<DataStore>,
    state: SelectionState,
    frame: ViewFrame,
}

impl EventRouter {
    /// Create a router in the default state and build its first frame.
    pub fn new(store: Arc<DataStore>) -> TimelineResult<Self> {
        let state = SelectionState::new();
        let frame = ViewFrame::build(&store, &state, ViewSet::ALL, None)?;
        Ok(Self {
            store,
            state,
            frame,
        })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn frame(&self) -> &ViewFrame {
        &self.frame
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Apply `event` and rebuild the views it affects.
    ///
    /// State and frame are committed together. On a contract violation the
    /// error is logged here and returned; nothing is committed.
    pub fn handle(&mut self, event: UiEvent) -> TimelineResult<&ViewFrame> {
        debug!(?event, "Handling UI event");

        let mut next = self.state.clone();
        let result = event.apply(&mut next).and_then(|()| {
            ViewFrame::build(
                &self.store,
                &next,
                ViewSet::for_event(&event),
                Some(&self.frame),
            )
        });

        match result {
            Ok(frame) => {
                self.state = next;
                self.frame = frame;
                Ok(&self.frame)
            }
            Err(err) => {
                error!(code = err.error_code(), ?event, "Rejected UI event: {}", err);
                Err(err.into())
            }
        }
    }
}

/// Thread-safe handle for hosts that dispatch events from several threads.
///
/// The lock is held for the whole mutate-aggregate-build sequence, so no
/// caller can observe a half-applied event.
#[derive(Debug, Clone)]
pub struct SharedRouter {
    inner: Arc<Mutex<EventRouter>>,
}

impl SharedRouter {
    pub fn new(router: EventRouter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(router)),
        }
    }

    /// Handle `event` under the lock and return a copy of the new frame.
    pub fn dispatch(&self, event: UiEvent) -> TimelineResult<ViewFrame> {
        let mut router = self.lock();
        router.handle(event).cloned()
    }

    /// Copy of the current frame.
    pub fn snapshot(&self) -> ViewFrame {
        self.lock().frame().clone()
    }

    // A panic mid-handle never commits, so the inner router is still consistent.
    fn lock(&self) -> std::sync::MutexGuard<'_, EventRouter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{TemporalRecord, TotalRecord};
    use crate::models::DATES;

    fn store() -> Arc<DataStore> {
        let row = |code: &str, i: usize, v: f64| TemporalRecord {
            iso_code: code.to_string(),
            date: DATES[i],
            infections_per_million: v,
            infections_absolute: v,
            deaths_absolute: v,
            vaccinations_per_million: v,
            vaccinations_absolute: v,
        };
        Arc::new(
            DataStore::builder()
                .temporal(row("FRA", 24, 2.0))
                .temporal(row("FRA", 0, 1.0))
                .total(TotalRecord {
                    iso_code: "FRA".to_string(),
                    total_infections: 9.0,
                    total_deaths: 8.0,
                    total_vaccinations: 7.0,
                })
                .country("FRA", "France")
                .build(),
        )
    }

    #[test]
    fn test_initial_frame_is_complete() {
        let router = EventRouter::new(store()).unwrap();
        let frame = router.frame();
        assert_eq!(frame.changed, ViewSet::ALL);
        assert_eq!(frame.selection, SelectionState::new());
        assert!(frame.map.borders.is_empty());
        assert_eq!(frame.timeline.index, 24);
    }

    #[test]
    fn test_view_set_dependencies() {
        let metric = ViewSet::for_event(&UiEvent::MetricChanged(Metric::Deaths));
        assert!(metric.map && !metric.trend && !metric.stats && !metric.timeline);

        let date = ViewSet::for_event(&UiEvent::DateChanged(3));
        assert!(date.map && date.trend && date.timeline && !date.stats);

        let click = ViewSet::for_event(&UiEvent::CountryClicked("FRA".into()));
        assert!(click.map && click.trend && click.stats && !click.timeline);
    }

    #[test]
    fn test_click_updates_every_dependent_view() {
        let mut router = EventRouter::new(store()).unwrap();
        let frame = router
            .handle(UiEvent::CountryClicked("FRA".to_string()))
            .unwrap();

        assert!(frame.map.has_border("FRA"));
        assert_eq!(frame.stats.countries, vec!["France"]);
        assert_eq!(frame.stats.totals.infections, 9);
        assert_eq!(frame.trend.lines[0].points[24].1, 2.0);
    }

    #[test]
    fn test_failed_date_change_commits_nothing() {
        let mut router = EventRouter::new(store()).unwrap();
        router.handle(UiEvent::DateChanged(3)).unwrap();
        let before = router.frame().clone();

        let err = router.handle(UiEvent::DateChanged(48)).unwrap_err();
        assert_eq!(
            err.as_contract(),
            Some(&ContractError::DateOutOfRange { index: 48 })
        );
        assert_eq!(router.state().date_index().get(), 3);
        assert_eq!(router.frame(), &before);
    }

    #[test]
    fn test_unknown_country_click_is_rolled_back() {
        let mut router = EventRouter::new(store()).unwrap();
        let err = router
            .handle(UiEvent::CountryClicked("ATA".to_string()))
            .unwrap_err();

        assert!(matches!(
            err.as_contract(),
            Some(ContractError::UnknownCountry { .. })
        ));
        assert!(!router.state().has_selection());
        assert!(router.frame().map.borders.is_empty());
    }

    #[test]
    fn test_metric_change_carries_other_views_over() {
        let mut router = EventRouter::new(store()).unwrap();
        router
            .handle(UiEvent::CountryClicked("FRA".to_string()))
            .unwrap();
        let before = router.frame().clone();

        let frame = router.handle(UiEvent::MetricChanged(Metric::Deaths)).unwrap();
        assert_eq!(frame.map.metric, Metric::Deaths);
        assert_eq!(frame.trend, before.trend);
        assert_eq!(frame.stats, before.stats);
        assert_eq!(frame.selection.metric(), Metric::Deaths);
    }

    #[test]
    fn test_shared_router_dispatch() {
        let shared = SharedRouter::new(EventRouter::new(store()).unwrap());
        let frame = shared.dispatch(UiEvent::DateChanged(0)).unwrap();
        assert_eq!(frame.timeline.index, 0);
        assert_eq!(shared.snapshot(), frame);
    }
}
