#![allow(clippy::multiple_crate_versions)]

//! Homescreen command-line entry point.
//!
//! `homescreen run` serves the host bus over stdin/stdout; the other
//! subcommands are one-shot maintenance tasks. Logs go to stderr and are
//! filtered by `HOMESCREEN_LOG` (default `info`).

use homescreen_lib::constants::LOG_ENV;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if let Err(err) = homescreen_lib::cli::run() {
        eprintln!("homescreen: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
