//! Keyboard and mouse handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::App;
use crate::models::Metric;

impl App {
    /// Map a key press onto navigation or a router event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        debug!(code = ?key.code, modifiers = ?key.modifiers, "Key press");

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.click_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.step_date(-1),
            KeyCode::Right | KeyCode::Char('l') => self.step_date(1),
            KeyCode::Tab | KeyCode::Char('m') => self.cycle_metric(),
            KeyCode::Char('1') => self.set_metric(Metric::Infections),
            KeyCode::Char('2') => self.set_metric(Metric::Deaths),
            KeyCode::Char('3') => self.set_metric(Metric::Vaccinations),
            _ => {}
        }
    }

    /// A left click on a map row clicks that country.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.map_row_at(mouse.column, mouse.row) {
            debug!(index, "Map row clicked");
            self.map_state.select(Some(index));
            self.click_selected();
        }
    }

    /// Row index of the map list under a terminal cell, if any.
    pub fn map_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.map_area?;
        // Inside the border
        let inside_x = column > area.x && column + 1 < area.x + area.width;
        let inside_y = row > area.y && row + 1 < area.y + area.height;
        if !inside_x || !inside_y {
            return None;
        }
        let index = (row - area.y - 1) as usize + self.map_state.offset();
        (index < self.map_rows().len()).then_some(index)
    }
}
