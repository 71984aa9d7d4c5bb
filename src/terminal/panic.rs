//! Panic hook for terminal restoration.
//!
//! A panic while the dashboard owns the screen would otherwise leave the
//! shell in raw mode on the alternate screen.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal and records the panic in
/// the log file before running the previous hook.
///
/// Call after `color_eyre::install()` so its report is the one printed, and
/// before creating the `TerminalManager`. The hook:
/// 1. Restores the terminal
/// 2. Logs the panic at `error!`
/// 3. Calls the previous hook to print the report
///
/// # Example
///
/// ```no_run
/// use covtrack::terminal::setup_panic_hook;
///
/// fn main() {
///     color_eyre::install().ok();
///     setup_panic_hook();
///     // ... create the TerminalManager and run ...
/// }
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Terminal first so the report is readable
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Reset to default hook to avoid affecting other tests
        let _ = panic::take_hook();
    }
}
