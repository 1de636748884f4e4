//! Error types for Homescreen.
//!
//! `HomescreenError` is the unified error returned by CLI commands. Component
//! errors (wallpaper, providers, configuration, runtime) convert into it.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during command execution.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum HomescreenError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Wallpaper operation failed.
    #[error("Wallpaper error: {0}")]
    WallpaperError(String),
    /// Provider lookup or call failed.
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Event loop communication error.
    #[error("Runtime error: {0}")]
    RuntimeError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for HomescreenError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for HomescreenError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<crate::modules::wallpaper::WallpaperError> for HomescreenError {
    fn from(err: crate::modules::wallpaper::WallpaperError) -> Self {
        Self::WallpaperError(err.to_string())
    }
}

impl From<crate::modules::providers::ProviderError> for HomescreenError {
    fn from(err: crate::modules::providers::ProviderError) -> Self {
        Self::ProviderError(err.to_string())
    }
}

impl From<crate::config::ConfigError> for HomescreenError {
    fn from(err: crate::config::ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<crate::runtime::ActorError> for HomescreenError {
    fn from(err: crate::runtime::ActorError) -> Self { Self::RuntimeError(err.to_string()) }
}

impl From<String> for HomescreenError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for HomescreenError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
