//! Providers served in-process.
//!
//! The date/time provider formats the local clock; the examples provider
//! serves the phrases listed in the configuration. No weather source is
//! bundled, so weather always resolves as unavailable.

use chrono::{Local, NaiveDateTime};

use super::{
    DateTimeProvider, ExamplesProvider, ProviderError, ProviderRegistry, WeatherProvider,
};
use crate::config::{HomescreenConfig, ProviderDefaults};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const WEEKDAY_FORMAT: &str = "%A";
const DAY_MONTH_FORMAT: &str = "%d %B";
const MONTH_DAY_FORMAT: &str = "%B %d";
const YEAR_FORMAT: &str = "%Y";

/// Date/time provider backed by the local clock.
#[derive(Debug, Clone)]
pub struct ClockProvider {
    month_first: bool,
    fixed: Option<NaiveDateTime>,
}

impl ClockProvider {
    /// Creates a provider reading the local clock.
    #[must_use]
    pub const fn new(month_first: bool) -> Self { Self { month_first, fixed: None } }

    /// Creates a provider frozen at `at`.
    #[must_use]
    pub const fn fixed(month_first: bool, at: NaiveDateTime) -> Self {
        Self { month_first, fixed: Some(at) }
    }

    fn now(&self) -> NaiveDateTime { self.fixed.unwrap_or_else(|| Local::now().naive_local()) }

    fn format(&self, pattern: &str) -> String { self.now().format(pattern).to_string() }
}

impl DateTimeProvider for ClockProvider {
    fn display_time(&self) -> Result<String, ProviderError> { Ok(self.format(TIME_FORMAT)) }

    fn display_date(&self) -> Result<String, ProviderError> { Ok(self.format(DATE_FORMAT)) }

    fn weekday(&self) -> Result<String, ProviderError> { Ok(self.format(WEEKDAY_FORMAT)) }

    fn month_date(&self) -> Result<String, ProviderError> {
        let pattern = if self.month_first { MONTH_DAY_FORMAT } else { DAY_MONTH_FORMAT };
        Ok(self.format(pattern))
    }

    fn year(&self) -> Result<String, ProviderError> { Ok(self.format(YEAR_FORMAT)) }
}

/// Examples provider serving a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticExamples {
    phrases: Vec<String>,
}

impl StaticExamples {
    #[must_use]
    pub const fn new(phrases: Vec<String>) -> Self { Self { phrases } }
}

impl ExamplesProvider for StaticExamples {
    fn examples(&self) -> Result<Vec<String>, ProviderError> { Ok(self.phrases.clone()) }
}

/// Registry answering for the default provider identifiers only.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    defaults: ProviderDefaults,
    month_first: bool,
    examples: Vec<String>,
}

impl BuiltinRegistry {
    /// Builds the registry from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &HomescreenConfig) -> Self {
        Self {
            defaults: config.defaults.clone(),
            month_first: config.month_first(),
            examples: config.examples.clone(),
        }
    }
}

impl ProviderRegistry for BuiltinRegistry {
    fn weather(&self, id: &str) -> Result<Box<dyn WeatherProvider>, ProviderError> {
        if id == self.defaults.weather_skill {
            Err(ProviderError::Unavailable(id.to_string()))
        } else {
            Err(ProviderError::NotFound(id.to_string()))
        }
    }

    fn datetime(&self, id: &str) -> Result<Box<dyn DateTimeProvider>, ProviderError> {
        if id == self.defaults.datetime_skill {
            Ok(Box::new(ClockProvider::new(self.month_first)))
        } else {
            Err(ProviderError::NotFound(id.to_string()))
        }
    }

    fn examples(&self, id: &str) -> Result<Box<dyn ExamplesProvider>, ProviderError> {
        if id == self.defaults.examples_skill {
            Ok(Box::new(StaticExamples::new(self.examples.clone())))
        } else {
            Err(ProviderError::NotFound(id.to_string()))
        }
    }
}
