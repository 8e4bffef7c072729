//! Header with metric tabs and the footer status line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::app::App;
use crate::models::Metric;

const KEY_HINTS: &str =
    "↑/↓ country  Enter select  ←/→ date  Tab/1-3 metric  q quit";

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Metric::ALL
        .iter()
        .enumerate()
        .map(|(i, metric)| Line::from(format!("{} {}", i + 1, metric.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(
                    " COVID-19 timeline ",
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .select(app.frame.selection.metric().index());

    frame.render_widget(tabs, area);
}

/// Last rejected event in red, otherwise key hints.
pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.last_error {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
