//! Command-line interface: argument parsing, version, help and the
//! one-shot snapshot report.
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use covtrack::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&args.command, &config) {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod snapshot;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use snapshot::{run_snapshot, write_snapshot};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::api::StatsClient;
use crate::config::TrackerConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand, config: &TrackerConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::Snapshot => Some(run_snapshot_blocking(config)),
        CliCommand::RunTui => None,
    }
}

fn run_snapshot_blocking(config: &TrackerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = StatsClient::from_config(config);
    runtime.block_on(run_snapshot(&client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(&CliCommand::RunTui, &TrackerConfig::default()).is_none());
    }

    #[test]
    fn test_invalid_returns_error_with_usage() {
        let result = run_cli_command(
            &CliCommand::Invalid("--api-url requires a value".to_string()),
            &TrackerConfig::default(),
        );
        let message = result.unwrap().unwrap_err().to_string();
        assert!(message.contains("--api-url requires a value"));
        assert!(message.contains("Usage: covtrack"));
    }
}
