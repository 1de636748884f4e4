//! Wallpaper CLI commands.

use clap::Subcommand;
use colored::Colorize;

use super::{build_runtime, open_session};
use crate::error::HomescreenError;

/// Wallpaper subcommands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum WallpaperCommands {
    /// List the wallpaper collection.
    ///
    /// Built-in wallpapers come first, then downloaded ones. The selected
    /// wallpaper is marked.
    List,

    /// Show the selected wallpaper and where it was found.
    Current,

    /// Select the next wallpaper, wrapping around at the end.
    Next,

    /// Download a wallpaper and select it.
    #[command(after_long_help = r#"Examples:
  homescreen wallpaper set https://example.com/mountains.jpg"#)]
    Set {
        /// URL of the image.
        #[arg(value_name = "URL")]
        url: String,
    },
}

/// Execute wallpaper subcommands.
///
/// # Errors
///
/// Returns an error if the session cannot be opened or the operation fails.
pub fn execute(cmd: &WallpaperCommands) -> Result<(), HomescreenError> {
    match cmd {
        WallpaperCommands::List => execute_list(),
        WallpaperCommands::Current => execute_current(),
        WallpaperCommands::Next => execute_next(),
        WallpaperCommands::Set { url } => execute_set(url),
    }
}

fn execute_list() -> Result<(), HomescreenError> {
    let (session, _outbound) = open_session()?;
    let store = session.store();

    if store.collection().is_empty() {
        println!("{}", "No wallpapers found.".dimmed());
        return Ok(());
    }

    for name in store.collection() {
        if name == store.selected() {
            println!("{} {}", "*".green(), name.bold());
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}

fn execute_current() -> Result<(), HomescreenError> {
    let (session, _outbound) = open_session()?;
    let store = session.store();

    match store.selected_dir() {
        Some(dir) => println!("{}", dir.join(store.selected()).display()),
        None => println!("{} {}", store.selected(), "(missing)".red()),
    }
    Ok(())
}

fn execute_next() -> Result<(), HomescreenError> {
    let (mut session, _outbound) = open_session()?;
    let selected = session.advance_wallpaper()?;
    println!("{selected}");
    Ok(())
}

fn execute_set(url: &str) -> Result<(), HomescreenError> {
    if url.trim().is_empty() {
        return Err(HomescreenError::InvalidArguments("URL must not be empty".to_string()));
    }

    let runtime = build_runtime()?;
    let (mut session, _outbound) = open_session()?;
    let selected = runtime.block_on(session.download_wallpaper(url))?;
    println!("{selected}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::commands::{Cli, Commands};

    #[test]
    fn test_parses_list() {
        let cli = Cli::try_parse_from(["homescreen", "wallpaper", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Wallpaper(WallpaperCommands::List)));
    }

    #[test]
    fn test_parses_next() {
        let cli = Cli::try_parse_from(["homescreen", "wallpaper", "next"]).unwrap();
        assert!(matches!(cli.command, Commands::Wallpaper(WallpaperCommands::Next)));
    }

    #[test]
    fn test_parses_set_url() {
        let cli = Cli::try_parse_from(["homescreen", "wallpaper", "set", "https://x/y.jpg"]).unwrap();
        match cli.command {
            Commands::Wallpaper(WallpaperCommands::Set { url }) => assert_eq!(url, "https://x/y.jpg"),
            _ => panic!("Expected Wallpaper Set command"),
        }
    }

    #[test]
    fn test_set_requires_url() {
        assert!(Cli::try_parse_from(["homescreen", "wallpaper", "set"]).is_err());
    }

    #[test]
    fn test_set_rejects_blank_url() {
        assert!(matches!(execute_set("  "), Err(HomescreenError::InvalidArguments(_))));
    }
}
