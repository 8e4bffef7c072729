//! Colour theme for the dashboard.

use ratatui::style::Color;

use crate::views::palette::{self, Rgb};

// ============================================================================
// Chrome
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and the active metric tab
pub const COLOR_ACCENT: Color = Color::White;

/// Hints and axis labels
pub const COLOR_DIM: Color = Color::DarkGray;

/// Rejected-event messages in the status line
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Data colours
// ============================================================================

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Marker next to selected countries.
pub fn selection_color() -> Color {
    rgb(palette::SELECTION_OUTLINE)
}

/// Colour for a trend line. Black does not show on a dark background.
pub fn line_color(color: Rgb) -> Color {
    if color == palette::DEATHS_LINE {
        Color::Gray
    } else {
        rgb(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(selection_color(), Color::Rgb(0x00, 0x79, 0xc9));
    }

    #[test]
    fn test_deaths_line_is_visible() {
        assert_eq!(line_color(palette::DEATHS_LINE), Color::Gray);
        assert_eq!(line_color(palette::INFECTIONS_LINE), Color::Rgb(0xd6, 0, 0));
    }
}
