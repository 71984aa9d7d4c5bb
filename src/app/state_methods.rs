//! State accessor and utility methods for the App.

use tracing::debug;

use crate::models::{MetricType, Region};
use crate::state::Event;

use super::effects::spawn_effect;
use super::{App, Focus};

impl App {
    /// Feed one event to the reducer and start the fetches it asks for.
    ///
    /// Must run inside a tokio runtime when the event can produce effects.
    pub fn dispatch(&mut self, event: Event) {
        let effects = self.state.apply(event);
        self.mark_dirty();
        for effect in effects {
            debug!("Spawning {:?}", effect);
            spawn_effect(
                self.client.clone(),
                effect,
                self.config.history_days,
                self.message_tx.clone(),
            );
        }
    }

    /// Start the initial loads.
    pub fn mount(&mut self) {
        self.dispatch(Event::Mounted);
    }

    pub fn select_metric(&mut self, metric: MetricType) {
        self.dispatch(Event::MetricSelected(metric));
    }

    pub fn select_region(&mut self, region: Region) {
        self.dispatch(Event::RegionSelected(region));
    }

    /// Clear the error shown in the status line
    pub fn clear_error(&mut self) {
        if self.state.last_error.is_some() {
            self.dispatch(Event::ErrorDismissed);
        }
    }

    pub fn open_picker(&mut self) {
        self.picker.reset();
        self.focus = Focus::RegionPicker;
        self.mark_dirty();
    }

    pub fn close_picker(&mut self) {
        self.focus = Focus::Dashboard;
        self.mark_dirty();
    }

    /// Scroll the country table by `delta` rows, clamped to the row count.
    pub fn scroll_table(&mut self, delta: isize) {
        let max = self.state.table.len().saturating_sub(1);
        let next = self.table_offset.saturating_add_signed(delta).min(max);
        if next != self.table_offset {
            self.table_offset = next;
            self.mark_dirty();
        }
    }

    /// Increment the tick counter; redraw only while something is loading
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.is_loading() {
            self.mark_dirty();
        }
    }

    /// Mark the app as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
