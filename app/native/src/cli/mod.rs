//! CLI module for Homescreen.
//!
//! `homescreen run` drives the event loop over stdin/stdout. The remaining
//! commands are one-shot maintenance tasks working on the same data
//! directory.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::HomescreenError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), HomescreenError> {
    let cli = Cli::parse();
    cli.execute()
}
