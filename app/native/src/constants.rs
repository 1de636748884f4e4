//! Application-wide constants.

/// Identifier of this plugin on the host bus, also used for data directories.
pub const APP_ID: &str = "skill-homescreen-lite.openvoiceos";

/// Name of the configuration directory under the user's config root.
pub const CONFIG_DIR_NAME: &str = "homescreen";

/// Environment variable that controls the log filter.
pub const LOG_ENV: &str = "HOMESCREEN_LOG";

/// Wallpaper selected when nothing has been persisted yet.
pub const DEFAULT_WALLPAPER: &str = "default.jpg";

/// Page shown by the rendering surface when the home view is active.
pub const IDLE_PAGE: &str = "idle.qml";

/// Default provider identifiers.
pub mod providers {
    /// Sibling skill that supplies current weather.
    pub const WEATHER: &str = "skill-weather.openvoiceos";
    /// Sibling skill that supplies formatted date and time.
    pub const DATETIME: &str = "skill-date-time.mycroftai";
    /// Sibling skill that supplies example phrases.
    pub const EXAMPLES: &str = "ovos-skills-info.openvoiceos";
}

/// Prefix prepended to every example phrase unless overridden.
pub const DEFAULT_EXAMPLES_PREFIX: &str = "Ask Me,";

/// Delay between "system ready" and the first periodic date/time refresh.
pub const DATETIME_REFRESH_DELAY_SECS: u64 = 60;

/// Period of the date/time refresh once started.
pub const DATETIME_REFRESH_INTERVAL_SECS: u64 = 10;

/// Default timeout for wallpaper downloads.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;
