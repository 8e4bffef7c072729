//! Choropleth stand-in: one row per country, coloured by the map scale.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::helpers::{format_value, truncate_to_width};
use super::theme::{rgb, selection_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::App;

const NAME_WIDTH: usize = 24;

pub fn render_map_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let map = &app.frame.map;
    let (min, max) = map.range;
    let title = format!(
        " {} · {}  [{} .. {}] ",
        map.color_label,
        map.date.format("%Y-%m-%d"),
        format_value(min),
        format_value(max)
    );

    let items: Vec<ListItem> = app
        .map_rows()
        .iter()
        .map(|iso_code| ListItem::new(map_row(app, iso_code)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(title, Style::default().fg(COLOR_ACCENT))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    app.map_area = Some(area);
    frame.render_stateful_widget(list, area, &mut app.map_state);
}

fn map_row(app: &App, iso_code: &str) -> Line<'static> {
    let map = &app.frame.map;
    let selected = map.has_border(iso_code);
    let name = truncate_to_width(app.country_name(iso_code), NAME_WIDTH);

    let marker = if selected {
        Span::styled("▌", Style::default().fg(selection_color()))
    } else {
        Span::raw(" ")
    };

    let (swatch, value, detail) = match map.region(iso_code) {
        Some(region) => (
            Span::styled("██ ", Style::default().fg(rgb(region.color))),
            format!("{:>9}", format_value(region.value)),
            format!(
                "  inf {} · deaths {} · vacc {}",
                format_value(region.absolute.infections),
                format_value(region.absolute.deaths),
                format_value(region.absolute.vaccinations)
            ),
        ),
        None => (
            Span::raw("   "),
            format!("{:>9}", "no data"),
            String::new(),
        ),
    };

    let name_style = if selected {
        Style::default().fg(selection_color()).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        marker,
        swatch,
        Span::styled(format!("{:<3} ", iso_code), Style::default().fg(COLOR_DIM)),
        Span::styled(format!("{:<width$}", name, width = NAME_WIDTH), name_style),
        Span::raw(value),
        Span::styled(detail, Style::default().fg(COLOR_DIM)),
    ])
}
