//! CLI command definitions using Clap.
//!
//! - `apps` - Voice application listing
//! - `config_cmd` - Configuration file management
//! - `wallpaper` - Wallpaper management

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use tokio::sync::mpsc::UnboundedReceiver;

use super::output;
use crate::bus::BusMessage;
use crate::error::HomescreenError;
use crate::session::HomescreenSession;
use crate::{config, schema};

pub mod apps;
pub mod config_cmd;
pub mod wallpaper;

pub use config_cmd::ConfigCommands;
pub use wallpaper::WallpaperCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Homescreen CLI.
#[derive(Parser, Debug)]
#[command(name = "homescreen")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run the homescreen event loop.
    ///
    /// Reads bus messages from stdin, one JSON object per line, and writes
    /// outbound messages to stdout the same way. Stops when stdin closes or a
    /// `homescreen.shutdown` message arrives.
    Run,

    /// Activate the home view once and print the display model.
    Idle,

    /// Wallpaper management commands.
    #[command(subcommand)]
    Wallpaper(WallpaperCommands),

    /// List installed voice applications.
    Apps {
        /// Print JSON instead of a table.
        #[arg(long, short)]
        json: bool,
    },

    /// Configuration file management commands.
    ///
    /// Initialize and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Homescreen configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(homescreen completions --shell zsh)"
    ///   homescreen completions --shell fish > ~/.config/fish/completions/homescreen.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), HomescreenError> {
        if let Some(path_buf) = self.config_path() {
            if !path_buf.exists() {
                return Err(HomescreenError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path_buf.display()
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Run => crate::run(),
            Commands::Idle => execute_idle(),
            Commands::Wallpaper(cmd) => wallpaper::execute(cmd),
            Commands::Apps { json } => apps::execute(*json),
            Commands::Config(cmd) => config_cmd::execute(cmd),
            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "homescreen", &mut io::stdout());
    }
}

/// Opens a session on the configured data directory.
pub(crate) fn open_session()
-> Result<(HomescreenSession, UnboundedReceiver<BusMessage>), HomescreenError> {
    HomescreenSession::with_builtin_providers(config::init().clone())
}

/// Builds the single-threaded runtime used by async commands.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime, HomescreenError> {
    Ok(tokio::runtime::Builder::new_current_thread().enable_all().build()?)
}

fn execute_idle() -> Result<(), HomescreenError> {
    let (mut session, _outbound) = open_session()?;
    session.activate_home();
    output::print_highlighted_json(&serde_json::Value::Object(session.display().snapshot()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from(["homescreen", "run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run));
    }

    #[test]
    fn test_cli_parses_idle() {
        let cli = Cli::try_parse_from(["homescreen", "idle"]).unwrap();
        assert!(matches!(cli.command, Commands::Idle));
    }

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["homescreen", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_apps_json() {
        let cli = Cli::try_parse_from(["homescreen", "apps", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Apps { json: true }));

        let cli = Cli::try_parse_from(["homescreen", "apps"]).unwrap();
        assert!(matches!(cli.command, Commands::Apps { json: false }));
    }

    #[test]
    fn test_cli_parses_completions() {
        let cli = Cli::try_parse_from(["homescreen", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli =
            Cli::try_parse_from(["homescreen", "wallpaper", "list", "--config", "/tmp/c.jsonc"])
                .unwrap();
        assert_eq!(cli.config_path(), Some(std::path::PathBuf::from("/tmp/c.jsonc")));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["homescreen", "reload"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from([
            "homescreen",
            "schema",
            "--config",
            "/nonexistent/homescreen/config.jsonc",
        ])
        .unwrap();
        assert!(matches!(cli.execute(), Err(HomescreenError::ConfigError(_))));
    }

    #[test]
    fn test_cli_debug_assert() { Cli::command().debug_assert(); }
}
