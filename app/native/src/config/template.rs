//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Homescreen Configuration File
// =============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Layout
  // ============================================================================
  // Render the home view right-to-left
  // "rtl": false,
  //
  // Date format: "DMY" (day first) or "MDY" (month first)
  // "dateFormat": "DMY",

  // ============================================================================
  // Locations
  // ============================================================================
  // Root data directory. Downloaded wallpapers and settings live here.
  // Empty uses the platform data directory.
  // "dataDir": "",
  //
  // Wallpapers shipped with the package (relative to dataDir)
  // "builtinWallpapers": "ui/wallpapers",
  //
  // Installed skills scanned for voice applications (relative to dataDir)
  // "skillsDir": "skills",

  // ============================================================================
  // Wallpaper downloads
  // ============================================================================
  // Timeout in seconds for "homescreen.wallpaper.set" downloads
  // "downloadTimeoutSecs": 30,

  // ============================================================================
  // Providers
  // ============================================================================
  // Example phrases served when no examples skill is installed
  // "examples": ["what time is it", "tell me a joke"],
  //
  // Default provider identifiers (settings.json may override each one)
  // "defaults": {
  //   "weatherSkill": "skill-weather.openvoiceos",
  //   "datetimeSkill": "skill-date-time.mycroftai",
  //   "examplesSkill": "ovos-skills-info.openvoiceos"
  // }
}
"#
    .to_string()
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn create_config_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_template())
}
