//! Config CLI commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use colored::Colorize;

use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{self, config_paths};
use crate::error::HomescreenError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// All options are written commented out, so the file loads as the
    /// defaults until edited.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  homescreen config init              # Create config at default location
  homescreen config init --force      # Overwrite existing config
  homescreen config init --path ~/homescreen.jsonc
  homescreen config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses ~/.config/homescreen/config.jsonc
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show configuration search paths and the resolved data locations.
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), HomescreenError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                let target = path.clone().unwrap_or_else(default_config_path);
                init_config(&target, *force)?;
                println!("Configuration file created at: {}", target.display());
                println!("\nAll options are commented out by default.");
                Ok(())
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

fn default_config_path() -> PathBuf {
    config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
}

/// Writes the template to `path`, refusing to overwrite unless `force` is set.
fn init_config(path: &Path, force: bool) -> Result<(), HomescreenError> {
    if path.exists() && !force {
        return Err(HomescreenError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            path.display()
        )));
    }

    create_config_file(path).map_err(|e| {
        HomescreenError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            path.display()
        ))
    })
}

fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;
    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)".green().to_string()
        } else if exists {
            " (exists)".dimmed().to_string()
        } else {
            String::new()
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found.");
        println!("Run 'homescreen config init' to create one.");
    }

    let paths = config::init().paths();
    println!("\nData locations:\n");
    println!("  data dir:            {}", paths.data_dir.display());
    println!("  built-in wallpapers: {}", paths.builtin_wallpapers.display());
    println!("  user wallpapers:     {}", paths.user_wallpapers.display());
    println!("  skills:              {}", paths.skills_dir.display());
    println!("  settings:            {}", paths.settings.display());
}
