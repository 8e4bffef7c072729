//! CLI module.
//!
//! Handles command-line flags before the TUI starts:
//!
//! ```ignore
//! use covid_timeline::cli::{parse_args, run_cli_command};
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

pub use args::{parse_args, CliArgs, CliCommand};
pub use snapshot::{handle_snapshot_command, render_snapshot};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::AppConfig;

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`. `Version` never returns.
pub fn run_cli_command(command: &CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Snapshot => Some(handle_snapshot_command(config)),
        CliCommand::RunTui => None,
    }
}
