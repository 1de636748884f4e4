//! Data directory layout.
//!
//! Uses the platform data directory (`~/.local/share` on Linux,
//! `~/Library/Application Support` on macOS) joined with [`APP_ID`], with a
//! fallback to `/tmp/{APP_ID}` when no data directory is available.

use std::path::{Path, PathBuf};

use crate::constants::APP_ID;

/// Subdirectory holding downloaded wallpapers.
pub const USER_WALLPAPERS_DIR: &str = "wallpapers";

/// Subdirectory holding the wallpapers shipped with the package.
pub const BUILTIN_WALLPAPERS_DIR: &str = "ui/wallpapers";

/// Subdirectory scanned for installed skills.
pub const SKILLS_DIR: &str = "skills";

/// File holding persisted per-skill settings.
pub const SETTINGS_FILE: &str = "settings.json";

/// Returns the default root data directory for the application.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!("/tmp/{APP_ID}")),
        |data| data.join(APP_ID),
    )
}

/// Returns the writable wallpaper directory under `data_dir`.
#[must_use]
pub fn user_wallpapers_dir(data_dir: &Path) -> PathBuf { data_dir.join(USER_WALLPAPERS_DIR) }

/// Returns the settings file path under `data_dir`.
#[must_use]
pub fn settings_path(data_dir: &Path) -> PathBuf { data_dir.join(SETTINGS_FILE) }

/// Creates `dir` (and parents) if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
}
