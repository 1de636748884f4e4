//! Display model consumed by the rendering surface.
//!
//! A flat map of named fields. Each field is overwritten wholesale by the
//! handler that owns it. The model tracks whether anything changed since the
//! last snapshot so the session only syncs when needed.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field names written into the display model.
pub mod fields {
    pub const WALLPAPER_PATH: &str = "wallpaper_path";
    pub const SELECTED_WALLPAPER: &str = "selected_wallpaper";
    pub const NOTIFICATION: &str = "notification";
    pub const NOTIFICATION_MODEL: &str = "notification_model";
    /// Spelled as the idle page reads it; the inbound bus payload key is
    /// `notification_counter`.
    pub const NOTIFICATION_COUNTER: &str = "notifcation_counter";
    pub const APPLICATIONS_MODEL: &str = "applications_model";
    pub const TIME_STRING: &str = "time_string";
    pub const DATE_STRING: &str = "date_string";
    pub const WEEKDAY_STRING: &str = "weekday_string";
    pub const DAY_STRING: &str = "day_string";
    pub const MONTH_STRING: &str = "month_string";
    pub const YEAR_STRING: &str = "year_string";
    pub const WEATHER_API_ENABLED: &str = "weather_api_enabled";
    pub const WEATHER_CODE: &str = "weather_code";
    pub const WEATHER_TEMP: &str = "weather_temp";
    pub const SKILL_EXAMPLES: &str = "skill_examples";
    pub const RTL_MODE: &str = "rtl_mode";
    pub const DATE_FORMAT: &str = "dateFormat";
}

/// Named fields and their current values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayModel {
    values: BTreeMap<String, Value>,
    dirty: bool,
}

impl DisplayModel {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Overwrites `key` with `value`.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
        self.dirty = true;
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> { self.values.get(key) }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool { self.values.contains_key(key) }

    /// All fields as a JSON object.
    #[must_use]
    pub fn snapshot(&self) -> serde_json::Map<String, Value> {
        self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Returns the snapshot if the model changed, clearing the dirty flag.
    pub fn take_snapshot(&mut self) -> Option<serde_json::Map<String, Value>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.snapshot())
    }
}
