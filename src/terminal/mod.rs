//! Terminal management with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture, and puts everything back when dropped. Together
//! with [`setup_panic_hook`] the user's shell is restored whether the
//! dashboard quits, returns an error or panics.
//!
//! # Example
//!
//! ```no_run
//! use covtrack::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new()?;
//!
//!     // Draw through the managed terminal
//!     let terminal = term_manager.terminal();
//!     // ... draw ...
//!
//!     // Restored when term_manager is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores terminal state on drop.
///
/// Created by [`TerminalManager`]; not meant to be used directly. Cleanup:
/// 1. Disables raw mode
/// 2. Disables mouse capture
/// 3. Leaves the alternate screen
/// 4. Shows the cursor
pub struct TerminalGuard {
    /// Whether cleanup has already run
    cleaned_up: bool,
}

impl TerminalGuard {
    /// Create a guard that has not cleaned up yet.
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal.
    ///
    /// Called by `Drop`, and by [`TerminalManager::restore`] on a normal
    /// exit. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the dashboard.
///
/// Install [`setup_panic_hook`] before creating one so a panic also leaves
/// the terminal usable.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with mouse capture and
    /// clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        // Guard first so a failure below still restores raw mode
        let guard = TerminalGuard::new();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    /// Mutable access to the terminal for drawing.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
