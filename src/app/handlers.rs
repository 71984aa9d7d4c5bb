//! Message and input handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::models::{MetricType, Region};
use crate::state::Event;

use super::{App, AppMessage, Focus};

/// Rows moved by PageUp/PageDown in the table
const PAGE_ROWS: isize = 10;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.dispatch(Event::from(msg));
    }

    /// Handle a key press. Release and repeat events are ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        match self.focus {
            Focus::Dashboard => self.handle_dashboard_key(key),
            Focus::RegionPicker => self.handle_picker_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('1') | KeyCode::Char('c') => self.select_metric(MetricType::Cases),
            KeyCode::Char('2') | KeyCode::Char('v') => self.select_metric(MetricType::Recovered),
            KeyCode::Char('3') | KeyCode::Char('d') => self.select_metric(MetricType::Deaths),
            KeyCode::Tab => self.select_metric(self.state.metric().next()),
            KeyCode::BackTab => self.select_metric(self.state.metric().prev()),
            KeyCode::Char('r') | KeyCode::Enter => self.open_picker(),
            KeyCode::Char('w') => self.select_region(Region::Worldwide),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_table(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_table(-1),
            KeyCode::PageDown => self.scroll_table(PAGE_ROWS),
            KeyCode::PageUp => self.scroll_table(-PAGE_ROWS),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_table(isize::MIN),
            KeyCode::Esc => self.clear_error(),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_picker(),
            KeyCode::Enter => {
                let options = self.state.dropdown();
                if let Some(region) = self.picker.confirm(&options) {
                    self.close_picker();
                    self.select_region(region);
                }
            }
            KeyCode::Up => {
                self.picker.move_up();
                self.mark_dirty();
            }
            KeyCode::Down => {
                let len = self.picker.filtered(&self.state.dropdown()).len();
                self.picker.move_down(len);
                self.mark_dirty();
            }
            KeyCode::Backspace => {
                self.picker.backspace();
                self.mark_dirty();
            }
            KeyCode::Char(c) => {
                self.picker.push_char(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle a mouse event: clicks on counters select the metric,
    /// the wheel scrolls the table.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.focus == Focus::Dashboard => {
                let point = Position::new(mouse.column, mouse.row);
                let hit = self
                    .counter_areas
                    .iter()
                    .find(|(area, _)| area.contains(point))
                    .map(|(_, metric)| *metric);
                if let Some(metric) = hit {
                    self.select_metric(metric);
                }
            }
            MouseEventKind::ScrollDown if self.focus == Focus::Dashboard => self.scroll_table(1),
            MouseEventKind::ScrollUp if self.focus == Focus::Dashboard => self.scroll_table(-1),
            _ => {}
        }
    }
}
