//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print the default view frame as JSON and exit
    Snapshot,
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command plus options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// Dataset root given with `--data <dir>` or `--data=<dir>`.
    pub data_root: Option<PathBuf>,
}

/// Parse command-line arguments.
///
/// Unknown arguments are ignored. The first command flag wins.
///
/// # Examples
///
/// ```
/// use covid_timeline::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["covid-timeline".to_string(), "--snapshot".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Snapshot);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut command = None;
    let mut data_root = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                command.get_or_insert(CliCommand::Version);
            }
            "--snapshot" => {
                command.get_or_insert(CliCommand::Snapshot);
            }
            "--data" => {
                if let Some(dir) = args.next() {
                    data_root = Some(PathBuf::from(dir));
                }
            }
            other => {
                if let Some(dir) = other.strip_prefix("--data=") {
                    data_root = Some(PathBuf::from(dir));
                }
            }
        }
    }

    CliArgs {
        command: command.unwrap_or(CliCommand::RunTui),
        data_root,
    }
}
