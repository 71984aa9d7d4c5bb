//! Terminal setup and teardown functions used by `TerminalManager`.
//!
//! Functions take any `Write` so the escape sequences can be checked against
//! a buffer in tests.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and enable mouse capture (counter clicks and
/// table scrolling).
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call multiple times; errors are ignored. Raw mode is disabled
/// before any escape sequence is written.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic or error, ignoring all errors.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
