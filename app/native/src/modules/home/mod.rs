//! Home view aggregation.
//!
//! Activation fills the display model from the wallpaper store, the
//! notification relay, the application index and the providers. Provider
//! refreshes are independent: a failing provider leaves its own fields stale
//! and never prevents the others from running.

use std::path::Path;

use serde_json::{Value, json};

use crate::config::HomescreenConfig;
use crate::display::{DisplayModel, fields};
use crate::modules::apps::build_application_list;
use crate::modules::notifications::NotificationRelay;
use crate::modules::providers::{DateTimeProvider, ProviderError, Providers};
use crate::modules::wallpaper::WallpaperStore;

/// Everything activation reads from.
pub struct HomeSources<'a> {
    pub config: &'a HomescreenConfig,
    pub store: &'a WallpaperStore,
    pub relay: &'a NotificationRelay,
    pub providers: &'a mut Providers,
    pub skills_dir: &'a Path,
    pub examples_prefix: &'a str,
}

/// Populates the display model for the home view.
pub fn activate_home(sources: HomeSources<'_>, display: &mut DisplayModel) {
    tracing::info!("activating home view");

    write_wallpaper(sources.store, display);
    display.set(fields::NOTIFICATION, json!({}));
    display.set(fields::NOTIFICATION_MODEL, sources.relay.current_model());

    let apps = build_application_list(sources.skills_dir);
    display.set(
        fields::APPLICATIONS_MODEL,
        serde_json::to_value(apps).unwrap_or(Value::Null),
    );

    update_datetime(sources.providers, display, sources.config.month_first());
    update_weather(sources.providers, display);
    update_examples(sources.providers, display, sources.examples_prefix);

    display.set(fields::RTL_MODE, i32::from(sources.config.rtl));
    display.set(fields::DATE_FORMAT, sources.config.display_date_format());
}

/// Writes the selected wallpaper and the directory holding it.
pub fn write_wallpaper(store: &WallpaperStore, display: &mut DisplayModel) {
    let path = store
        .selected_dir()
        .map_or(Value::Null, |dir| Value::String(format!("{}/", dir.display())));
    display.set(fields::WALLPAPER_PATH, path);
    display.set(fields::SELECTED_WALLPAPER, store.selected());
}

/// Refreshes the date and time fields.
pub fn update_datetime(providers: &mut Providers, display: &mut DisplayModel, month_first: bool) {
    let datetime = match providers.datetime() {
        Ok(provider) => provider,
        Err(err) => {
            tracing::warn!(error = %err, "no datetime provider, skipping update");
            return;
        }
    };

    let strings = match DateTimeStrings::read(datetime) {
        Ok(strings) => strings,
        Err(err) => {
            tracing::error!(error = %err, "datetime provider failed");
            return;
        }
    };

    display.set(fields::TIME_STRING, strings.time);
    display.set(fields::DATE_STRING, strings.date);
    display.set(fields::WEEKDAY_STRING, strings.weekday);

    let (day, month) = split_month_string(&strings.month_date, month_first);
    if day.is_some() || month.is_some() {
        display.set(fields::DAY_STRING, day);
        display.set(fields::MONTH_STRING, month);
    }

    display.set(fields::YEAR_STRING, strings.year);
}

struct DateTimeStrings {
    time: String,
    date: String,
    weekday: String,
    month_date: String,
    year: String,
}

impl DateTimeStrings {
    fn read(provider: &dyn DateTimeProvider) -> Result<Self, ProviderError> {
        Ok(Self {
            time: provider.display_time()?,
            date: provider.display_date()?,
            weekday: provider.weekday()?,
            month_date: provider.month_date()?,
            year: provider.year()?,
        })
    }
}

/// Refreshes the weather fields.
///
/// A missing provider disables the weather widget. A provider with no report
/// leaves the previous values in place.
pub fn update_weather(providers: &mut Providers, display: &mut DisplayModel) {
    let weather = match providers.weather() {
        Ok(provider) => provider,
        Err(err) => {
            display.set(fields::WEATHER_API_ENABLED, false);
            tracing::warn!(error = %err, "no weather provider, skipping update");
            return;
        }
    };

    match weather.current_weather() {
        Ok(Some(report)) => {
            display.set(fields::WEATHER_API_ENABLED, true);
            display.set(fields::WEATHER_CODE, report.weather_code);
            display.set(fields::WEATHER_TEMP, report.weather_temp);
        }
        Ok(None) => tracing::error!("no weather report returned"),
        Err(err) => tracing::error!(error = %err, "weather provider failed"),
    }
}

/// Refreshes the example phrases, each prefixed with `prefix` unless it is empty.
pub fn update_examples(providers: &mut Providers, display: &mut DisplayModel, prefix: &str) {
    let source = match providers.examples() {
        Ok(provider) => provider,
        Err(err) => {
            tracing::warn!(error = %err, "no examples provider, skipping update");
            return;
        }
    };

    let examples = match source.examples() {
        Ok(examples) => examples,
        Err(err) => {
            tracing::error!(error = %err, "examples provider failed");
            return;
        }
    };

    let examples: Vec<String> = if prefix.is_empty() {
        examples
    } else {
        examples.into_iter().map(|e| format!("{prefix} {e}")).collect()
    };
    display.set(fields::SKILL_EXAMPLES, json!({ "examples": examples }));
}

/// Splits a "month and day" string into `(day, month)`.
///
/// The first token is the day unless `month_first` is set. An empty input
/// yields `(None, None)`.
#[must_use]
pub fn split_month_string(month_date: &str, month_first: bool) -> (Option<String>, Option<String>) {
    if month_date.is_empty() {
        tracing::error!("no month string to split");
        return (None, None);
    }

    let mut tokens = month_date.split(' ').map(str::to_string);
    let first = tokens.next();
    let second = tokens.next();

    if month_first { (second, first) } else { (first, second) }
}
