//! Persisted per-skill settings.
//!
//! Holds the selected wallpaper and the provider overrides. Stored as plain
//! JSON next to the downloaded wallpapers; a missing or unreadable file
//! yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::types::ProviderDefaults;
use crate::constants::{DEFAULT_EXAMPLES_PREFIX, DEFAULT_WALLPAPER};

/// Settings persisted across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSettings {
    /// Filename of the selected wallpaper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<String>,
    /// Weather provider override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_skill: Option<String>,
    /// Date/time provider override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime_skill: Option<String>,
    /// Examples provider override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples_skill: Option<String>,
    /// Prefix prepended to example phrases. Empty disables it.
    pub examples_prefix: String,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            wallpaper: None,
            weather_skill: None,
            datetime_skill: None,
            examples_skill: None,
            examples_prefix: DEFAULT_EXAMPLES_PREFIX.to_string(),
            path: None,
        }
    }
}

impl SkillSettings {
    /// Loads settings from `path`, falling back to defaults.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<Self>(&contents).unwrap_or_else(|err| {
                tracing::warn!(error = %err, path = %path.display(), "invalid settings file, using defaults");
                Self::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "failed to read settings, using defaults");
                Self::default()
            }
        };
        settings.path = Some(path.to_path_buf());
        settings
    }

    /// Writes the settings back to the file they were loaded from.
    ///
    /// In-memory settings (never loaded from a file) are not persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Selected wallpaper filename, or the shipped default.
    #[must_use]
    pub fn selected_wallpaper(&self) -> String {
        self.wallpaper
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_WALLPAPER)
            .to_string()
    }

    /// Weather provider identifier after applying defaults.
    #[must_use]
    pub fn weather_skill<'a>(&'a self, defaults: &'a ProviderDefaults) -> &'a str {
        override_or(self.weather_skill.as_deref(), &defaults.weather_skill)
    }

    /// Date/time provider identifier after applying defaults.
    #[must_use]
    pub fn datetime_skill<'a>(&'a self, defaults: &'a ProviderDefaults) -> &'a str {
        override_or(self.datetime_skill.as_deref(), &defaults.datetime_skill)
    }

    /// Examples provider identifier after applying defaults.
    #[must_use]
    pub fn examples_skill<'a>(&'a self, defaults: &'a ProviderDefaults) -> &'a str {
        override_or(self.examples_skill.as_deref(), &defaults.examples_skill)
    }
}

fn override_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}
