//! Trend chart of the selection's summed statistics.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use super::helpers::format_value;
use super::theme::{line_color, rgb, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::models::{DATES, DATE_COUNT};
use crate::views::trend::{LegendPlacement, TrendPayload};

/// Dots drawn for the dashed date marker.
const MARKER_DOTS: usize = 12;

pub fn render_trend_panel(frame: &mut Frame, area: Rect, trend: &TrendPayload) {
    let y_min = trend.y_axis.min.unwrap_or(0.0);
    let y_max = trend
        .y_axis
        .max
        .unwrap_or_else(|| trend.max_value())
        .max(y_min + 1.0);
    let x_max = (DATE_COUNT - 1) as f64;

    let lines: Vec<Vec<(f64, f64)>> = trend
        .lines
        .iter()
        .map(|line| {
            line.values()
                .enumerate()
                .map(|(i, v)| (i as f64, v))
                .collect()
        })
        .collect();
    let marker = marker_points(trend.marker.index as f64, y_min, y_max);

    let mut datasets: Vec<Dataset> = trend
        .lines
        .iter()
        .zip(&lines)
        .map(|(line, points)| {
            Dataset::default()
                .name(line.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line_color(line.color)))
                .data(points)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(rgb(trend.marker.color)))
            .data(&marker),
    );

    let legend = match trend.legend {
        LegendPlacement::TopHorizontal => LegendPosition::Top,
    };

    let x_labels = [
        DATES[0].format("%Y-%m").to_string(),
        DATES[DATE_COUNT / 2].format("%Y-%m").to_string(),
        DATES[DATE_COUNT - 1].format("%Y-%m").to_string(),
    ];
    let y_labels = [format_value(y_min), format_value(y_max)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(
                    format!(" {} ", trend.title),
                    Style::default().fg(COLOR_ACCENT),
                )),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([y_min, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(legend));

    frame.render_widget(chart, area);
}

/// Evenly spaced points on a vertical line, every other one dropped.
fn marker_points(x: f64, y_min: f64, y_max: f64) -> Vec<(f64, f64)> {
    let step = (y_max - y_min) / (MARKER_DOTS * 2) as f64;
    (0..=MARKER_DOTS * 2)
        .step_by(2)
        .map(|i| (x, y_min + step * i as f64))
        .collect()
}
