//! CLI module for Marklee.
//!
//! - Argument parsing
//! - Version display
//! - Offline page-window and route-guard inspection
//!
//! # Usage
//!
//! ```ignore
//! use marklee::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     result?;
//!     return Ok(());
//! }
//! // No CLI command, start the server
//! ```

pub mod args;
pub mod inspect;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use inspect::{render_guard, render_pages};
pub use version::{version_line, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::Serve`], which the caller handles.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Serve => None,
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Pages {
            current,
            total,
            max_visible,
        } => {
            println!("{}", render_pages(current, total, max_visible));
            Some(Ok(()))
        }
        CliCommand::Guard { path, claim } => {
            println!("{}", render_guard(&path, claim.as_deref()));
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => {
            eprintln!("{}", USAGE);
            Some(Err(eyre!("invalid arguments: {}", message)))
        }
    }
}
