//! Timeline slider: label, track with cursor, and year marks.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{rgb, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::views::palette::DATE_MARKER;
use crate::views::TimelinePayload;

pub fn render_timeline(frame: &mut Frame, area: Rect, timeline: &TimelinePayload) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", timeline.label),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let cursor = slot(timeline.index, timeline.count, width);
    let track = Line::from(vec![
        Span::styled("─".repeat(cursor), Style::default().fg(COLOR_DIM)),
        Span::styled("●", Style::default().fg(rgb(DATE_MARKER))),
        Span::styled(
            "─".repeat(width.saturating_sub(cursor + 1)),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    let marks = Line::from(Span::styled(
        marks_row(timeline, width),
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(vec![track, marks]), inner);
}

/// Column of slider position `index` on a track `width` cells wide.
fn slot(index: usize, count: usize, width: usize) -> usize {
    if count < 2 || width < 2 {
        return 0;
    }
    index * (width - 1) / (count - 1)
}

/// Year labels placed under their slider positions, never overlapping.
fn marks_row(timeline: &TimelinePayload, width: usize) -> String {
    let mut row = vec![' '; width];
    let mut next_free = 0;
    for (index, label) in timeline.marks.iter().filter(|(_, l)| !l.is_empty()) {
        let start = slot(*index, timeline.count, width).max(next_free);
        if start + label.len() > width {
            break;
        }
        for (offset, ch) in label.chars().enumerate() {
            row[start + offset] = ch;
        }
        next_free = start + label.len() + 1;
    }
    row.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectionState;
    use crate::views::build_timeline;

    #[test]
    fn test_slot_ends() {
        assert_eq!(slot(0, 48, 95), 0);
        assert_eq!(slot(47, 48, 95), 94);
        assert_eq!(slot(24, 48, 95), 48);
        assert_eq!(slot(5, 48, 1), 0);
    }

    #[test]
    fn test_marks_row_places_years() {
        let timeline = build_timeline(&SelectionState::new());
        let row = marks_row(&timeline, 95);
        assert_eq!(row.chars().count(), 95);
        assert!(row.starts_with("2020"));
        assert_eq!(row.find("2022"), Some(slot(24, 48, 95)));
        assert!(row.contains("2023"));
    }

    #[test]
    fn test_marks_row_narrow_track() {
        let timeline = build_timeline(&SelectionState::new());
        let row = marks_row(&timeline, 6);
        assert_eq!(row, "2020  ");
    }
}
