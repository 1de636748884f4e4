//! Homescreen - idle screen plugin for a voice assistant.
//!
//! Renders nothing itself: it keeps a display model (wallpaper, date and time,
//! weather, example phrases, notifications, installed voice applications)
//! and hands it to the rendering surface over the host bus.

pub mod bus;
pub mod cli;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod events;
pub mod modules;
pub mod platform;
pub mod runtime;
pub mod schema;
pub mod session;

use std::time::Duration;

use crate::error::HomescreenError;
use crate::session::HomescreenSession;

/// Time given to the stdin reader to wind down after the loop ends.
const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(200);

/// Runs the homescreen event loop over stdin and stdout.
///
/// Blocks until stdin closes or a shutdown message is received.
///
/// # Errors
///
/// Returns an error if the runtime or the session cannot be created, or if
/// reading stdin fails.
pub fn run() -> Result<(), HomescreenError> {
    let config = config::init().clone();
    tracing::info!(
        config = ?config::get_config_path(),
        data_dir = %config.paths().data_dir.display(),
        "starting homescreen"
    );

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let result = rt.block_on(async move {
        let (session, outbound) = HomescreenSession::with_builtin_providers(config)?;
        runtime::run_stdio(session, outbound).await
    });
    rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);

    result
}
