//! Terminal rendering for the dashboard.
//!
//! ```text
//! ┌ header: metric tabs ─────────────────────────────────┐
//! ├ map (60%) ─────────────────┬ selection stats ────────┤
//! │                            ├ trend chart ────────────┤
//! ├ timeline ──────────────────┴─────────────────────────┤
//! status line
//! ```
//!
//! Panels draw straight from the app's current [`ViewFrame`]; they never
//! touch the router.
//!
//! [`ViewFrame`]: crate::events::ViewFrame

mod header;
mod helpers;
mod map_panel;
mod stats_panel;
mod theme;
mod timeline;
mod trend_panel;

pub use helpers::{format_value, truncate_to_width};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use header::{render_header, render_status_line};
use map_panel::render_map_panel;
use stats_panel::render_stats_panel;
use timeline::render_timeline;
use trend_panel::render_trend_panel;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub map: Rect,
    pub stats: Rect,
    pub trend: Rect,
    pub timeline: Rect,
    pub status: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(5)])
            .split(body[1]);

        Self {
            header: rows[0],
            map: body[0],
            stats: right[0],
            trend: right[1],
            timeline: rows[2],
            status: rows[3],
        }
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area());

    render_header(frame, layout.header, app);
    render_map_panel(frame, layout.map, app);
    render_stats_panel(frame, layout.stats, &app.frame.stats);
    render_trend_panel(frame, layout.trend, &app.frame.trend);
    render_timeline(frame, layout.timeline, &app.frame.timeline);
    render_status_line(frame, layout.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataStore, TemporalRecord};
    use crate::models::DATES;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn test_app() -> App {
        let store = DataStore::builder()
            .temporal(TemporalRecord {
                iso_code: "FRA".to_string(),
                date: DATES[24],
                infections_per_million: 1200.0,
                infections_absolute: 80_000.0,
                deaths_absolute: 120.0,
                vaccinations_per_million: 700.0,
                vaccinations_absolute: 45_000.0,
            })
            .country("FRA", "France")
            .build();
        App::new(Arc::new(store)).unwrap()
    }

    #[test]
    fn test_layout_splits_body() {
        let layout = DashboardLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.map.width, 60);
        assert_eq!(layout.stats.x, 60);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.trend.y, layout.stats.y + layout.stats.height);
    }

    #[test]
    fn test_render_records_map_area() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let expected = DashboardLayout::new(Rect::new(0, 0, 120, 40)).map;
        assert_eq!(app.map_area, Some(expected));
    }

    #[test]
    fn test_render_shows_frame_content() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("France"));
        assert!(text.contains("Date selected: 2022-01-01"));
        assert!(text.contains("Selected countries:"));
        assert!(text.contains("Infections per million people"));
    }
}
