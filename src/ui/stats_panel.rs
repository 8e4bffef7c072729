//! Selection totals.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER};
use crate::views::StatsPayload;

pub fn render_stats_panel(frame: &mut Frame, area: Rect, stats: &StatsPayload) {
    let lines: Vec<Line> = stats.markdown.lines().map(markdown_line).collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(" Selection ", Style::default().fg(COLOR_ACCENT))),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Render the two constructs the stats markdown uses: a leading `**bold**`
/// run and `- ` bullets.
pub(crate) fn markdown_line(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("- ") {
        return Line::from(vec![Span::raw("• "), Span::raw(rest)]);
    }
    if let Some(rest) = line.strip_prefix("**") {
        if let Some((bold, tail)) = rest.split_once("**") {
            return Line::from(vec![
                Span::styled(bold, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(tail),
            ]);
        }
    }
    Line::from(line)
}
