//! Configuration types for Homescreen.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_DOWNLOAD_TIMEOUT_SECS, providers};
use crate::platform::data::{self, BUILTIN_WALLPAPERS_DIR, SKILLS_DIR};
use crate::platform::path::expand_or;

/// Date format requesting month-first rendering.
pub const MONTH_FIRST_DATE_FORMAT: &str = "MDY";

/// Default date format (day-first).
pub const DEFAULT_DATE_FORMAT: &str = "DMY";

/// Supported configuration file names, in lookup order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.jsonc", "config.json"];

/// Legacy configuration file names in the home directory.
const LEGACY_CONFIG_FILE_NAMES: [&str; 2] = [".homescreen.jsonc", ".homescreen.json"];

/// Default provider identifiers, used when the skill settings carry no override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderDefaults {
    /// Identifier of the weather provider.
    pub weather_skill: String,
    /// Identifier of the date/time provider.
    pub datetime_skill: String,
    /// Identifier of the example phrases provider.
    pub examples_skill: String,
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self {
            weather_skill: providers::WEATHER.to_string(),
            datetime_skill: providers::DATETIME.to_string(),
            examples_skill: providers::EXAMPLES.to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HomescreenConfig {
    /// Render the home view right-to-left.
    pub rtl: bool,

    /// Date format preference: "DMY" (day first) or "MDY" (month first).
    /// Default: "DMY"
    pub date_format: String,

    /// Root data directory (settings, downloaded wallpapers).
    /// Default: platform data directory joined with the plugin id.
    pub data_dir: String,

    /// Directory of wallpapers shipped with the package.
    /// Relative paths resolve against `dataDir`. Default: `ui/wallpapers`.
    pub builtin_wallpapers: String,

    /// Directory scanned for installed skills.
    /// Relative paths resolve against `dataDir`. Default: `skills`.
    pub skills_dir: String,

    /// Timeout in seconds for wallpaper downloads.
    /// Default: 30
    pub download_timeout_secs: u64,

    /// Example phrases served by the built-in examples provider.
    pub examples: Vec<String>,

    /// Default provider identifiers.
    pub defaults: ProviderDefaults,
}

impl Default for HomescreenConfig {
    fn default() -> Self {
        Self {
            rtl: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            data_dir: String::new(),
            builtin_wallpapers: String::new(),
            skills_dir: String::new(),
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            examples: Vec::new(),
            defaults: ProviderDefaults::default(),
        }
    }
}

impl HomescreenConfig {
    /// Returns `true` when dates should be rendered month first.
    #[must_use]
    pub fn month_first(&self) -> bool { self.date_format == MONTH_FIRST_DATE_FORMAT }

    /// Date format exposed to the rendering surface, never empty.
    #[must_use]
    pub fn display_date_format(&self) -> &str {
        if self.date_format.is_empty() {
            DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }

    /// Resolves every configured location to an absolute path.
    #[must_use]
    pub fn paths(&self) -> HomescreenPaths {
        let data_dir = expand_or(&self.data_dir, Path::new("/"), data::default_data_dir());

        HomescreenPaths {
            builtin_wallpapers: expand_or(
                &self.builtin_wallpapers,
                &data_dir,
                data_dir.join(BUILTIN_WALLPAPERS_DIR),
            ),
            user_wallpapers: data::user_wallpapers_dir(&data_dir),
            skills_dir: expand_or(&self.skills_dir, &data_dir, data_dir.join(SKILLS_DIR)),
            settings: data::settings_path(&data_dir),
            data_dir,
        }
    }
}

/// Absolute locations derived from [`HomescreenConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomescreenPaths {
    /// Root data directory.
    pub data_dir: PathBuf,
    /// Read-only wallpapers shipped with the package.
    pub builtin_wallpapers: PathBuf,
    /// Writable wallpapers downloaded at runtime.
    pub user_wallpapers: PathBuf,
    /// Installed skills tree.
    pub skills_dir: PathBuf,
    /// Persisted settings file.
    pub settings: PathBuf,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file was found.
    #[error("No configuration file found")]
    NotFound,
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/homescreen/config.jsonc` or `config.json`
/// 2. `~/.config/homescreen/config.jsonc` or `config.json`
/// 3. Platform config dir `homescreen/config.jsonc` or `config.json`
/// 4. `~/.homescreen.jsonc` or `~/.homescreen.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let dir = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            paths.push(dir.join(filename));
        }
    }

    let mut push_unique = |path: PathBuf| {
        if !paths.contains(&path) {
            paths.push(path);
        }
    };

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            push_unique(dir.join(filename));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            push_unique(dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            push_unique(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, `IoError` if
/// it cannot be read and `ParseError` if it is not valid JSONC.
pub fn load_config_from_path(path: &PathBuf) -> Result<(HomescreenConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: HomescreenConfig = serde_json::from_reader(reader)?;
    Ok((config, path.clone()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists, or the
/// error of the first file found that fails to load.
pub fn load_config() -> Result<(HomescreenConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}
