//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch once and print a plain-text report
    Snapshot,
    /// Run the TUI application (default)
    RunTui,
    /// Arguments could not be parsed
    Invalid(String),
}

/// Command plus overrides that apply to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-url`, overrides `COVTRACK_API_URL`
    pub api_url: Option<String>,
}

pub const USAGE: &str = "\
Usage: covtrack [OPTIONS]

Options:
      --snapshot        Print current counters and top countries, then exit
      --api-url <URL>   Stats API base URL (default: https://disease.sh)
  -V, --version         Print version
  -h, --help            Print help

Environment:
  COVTRACK_API_URL, COVTRACK_HISTORY_DAYS, COVTRACK_TIMEOUT_SECS, COVTRACK_TICK_MS,
  COVTRACK_LOG";

/// Parse command-line arguments (program name first).
///
/// `--version` and `--help` win over everything else; unknown flags are
/// ignored.
///
/// ```
/// use covtrack::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["covtrack".to_string(), "--snapshot".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Snapshot);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut api_url = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliArgs { command: CliCommand::Version, api_url },
            "--help" | "-h" => return CliArgs { command: CliCommand::Help, api_url },
            "--snapshot" => command = CliCommand::Snapshot,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with('-') => api_url = Some(url),
                _ => command = CliCommand::Invalid("--api-url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    if url.is_empty() {
                        command = CliCommand::Invalid("--api-url requires a value".to_string());
                    } else {
                        api_url = Some(url.to_string());
                    }
                }
            }
        }
        if matches!(command, CliCommand::Invalid(_)) {
            break;
        }
    }

    CliArgs { command, api_url }
}
