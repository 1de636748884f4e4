//! External data providers.
//!
//! Weather, date/time and example phrases are supplied by sibling skills.
//! Each capability is a trait with the calls the home view needs; a
//! [`ProviderRegistry`] looks handles up by identifier.
//!
//! Handles are resolved lazily through [`Providers`]. A failed resolution is
//! not remembered: the next refresh tries again, until a handle is obtained.

mod builtin;

use serde::Serialize;

use crate::config::{ProviderDefaults, SkillSettings};

pub use builtin::{BuiltinRegistry, ClockProvider, StaticExamples};

/// Errors raised by provider lookup or calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No provider is registered under the identifier.
    #[error("Provider not found: {0}")]
    NotFound(String),
    /// The provider exists but cannot serve requests right now.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
    /// A call on a resolved provider failed.
    #[error("Provider call failed: {0}")]
    Call(String),
}

/// Current conditions for the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    /// Condition code understood by the rendering surface.
    pub weather_code: Option<i64>,
    /// Current temperature in the user's unit.
    pub weather_temp: Option<i64>,
}

/// Supplies current weather.
pub trait WeatherProvider: Send {
    /// Returns the current weather, or `None` when no report is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn current_weather(&self) -> Result<Option<WeatherReport>, ProviderError>;
}

/// Supplies display-ready date and time strings.
pub trait DateTimeProvider: Send {
    /// Current time, e.g. `"14:05"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn display_time(&self) -> Result<String, ProviderError>;

    /// Full current date, e.g. `"Tuesday, August 6, 2024"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn display_date(&self) -> Result<String, ProviderError>;

    /// Weekday name.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn weekday(&self) -> Result<String, ProviderError>;

    /// Month and day of month as one string, e.g. `"06 August"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn month_date(&self) -> Result<String, ProviderError>;

    /// Current year.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn year(&self) -> Result<String, ProviderError>;
}

/// Supplies example phrases the user can say.
pub trait ExamplesProvider: Send {
    /// Returns example phrases without prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    fn examples(&self) -> Result<Vec<String>, ProviderError>;
}

/// Looks provider handles up by identifier.
pub trait ProviderRegistry: Send {
    /// Resolves a weather provider.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable provider is registered under `id`.
    fn weather(&self, id: &str) -> Result<Box<dyn WeatherProvider>, ProviderError>;

    /// Resolves a date/time provider.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable provider is registered under `id`.
    fn datetime(&self, id: &str) -> Result<Box<dyn DateTimeProvider>, ProviderError>;

    /// Resolves an examples provider.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable provider is registered under `id`.
    fn examples(&self, id: &str) -> Result<Box<dyn ExamplesProvider>, ProviderError>;
}

/// Resolution state of a single provider handle.
pub enum ProviderSlot<T: ?Sized> {
    /// Never attempted.
    Unresolved,
    /// Handle obtained; kept for the lifetime of the session.
    Resolved(Box<T>),
    /// The last attempt failed; the next refresh tries again.
    Failed(ProviderError),
}

impl<T: ?Sized> ProviderSlot<T> {
    /// The handle, or the reason it is missing.
    ///
    /// # Errors
    ///
    /// Returns the last resolution error, or [`ProviderError::Unavailable`]
    /// if resolution was never attempted.
    pub fn handle(&self, capability: &str) -> Result<&T, ProviderError> {
        match self {
            Self::Resolved(handle) => Ok(handle),
            Self::Failed(err) => Err(err.clone()),
            Self::Unresolved => Err(ProviderError::Unavailable(capability.to_string())),
        }
    }

    /// The last resolution error, if the previous attempt failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ProviderError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Unresolved | Self::Resolved(_) => None,
        }
    }

    /// Returns `true` once a handle has been obtained.
    #[must_use]
    pub const fn is_resolved(&self) -> bool { matches!(self, Self::Resolved(_)) }

    /// Attempts resolution unless a handle is already held.
    ///
    /// Failures are recorded in the slot and left for the caller to report.
    fn resolve_with(
        &mut self,
        capability: &str,
        id: &str,
        resolve: impl FnOnce(&str) -> Result<Box<T>, ProviderError>,
    ) {
        if self.is_resolved() {
            return;
        }

        *self = match resolve(id) {
            Ok(handle) => {
                tracing::info!(capability, id, "provider resolved");
                Self::Resolved(handle)
            }
            Err(err) => {
                tracing::debug!(capability, id, error = %err, "provider resolution failed");
                Self::Failed(err)
            }
        };
    }
}

impl<T: ?Sized> Default for ProviderSlot<T> {
    fn default() -> Self { Self::Unresolved }
}

impl<T: ?Sized> std::fmt::Debug for ProviderSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unresolved => write!(f, "Unresolved"),
            Self::Resolved(_) => write!(f, "Resolved"),
            Self::Failed(err) => write!(f, "Failed({err})"),
        }
    }
}

/// Provider identifiers in effect for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIds {
    /// Weather provider identifier.
    pub weather: String,
    /// Date/time provider identifier.
    pub datetime: String,
    /// Examples provider identifier.
    pub examples: String,
}

impl ProviderIds {
    /// Identifiers from the persisted overrides, falling back to `defaults`.
    #[must_use]
    pub fn from_settings(settings: &SkillSettings, defaults: &ProviderDefaults) -> Self {
        Self {
            weather: settings.weather_skill(defaults).to_string(),
            datetime: settings.datetime_skill(defaults).to_string(),
            examples: settings.examples_skill(defaults).to_string(),
        }
    }
}

/// Lazily resolved provider handles.
pub struct Providers {
    registry: Box<dyn ProviderRegistry>,
    ids: ProviderIds,
    weather: ProviderSlot<dyn WeatherProvider>,
    datetime: ProviderSlot<dyn DateTimeProvider>,
    examples: ProviderSlot<dyn ExamplesProvider>,
}

impl Providers {
    /// Creates an unresolved set of handles backed by `registry`.
    #[must_use]
    pub fn new(registry: Box<dyn ProviderRegistry>, ids: ProviderIds) -> Self {
        Self {
            registry,
            ids,
            weather: ProviderSlot::Unresolved,
            datetime: ProviderSlot::Unresolved,
            examples: ProviderSlot::Unresolved,
        }
    }

    /// Attempts to resolve every handle not yet held, warning once for each
    /// capability that stays unavailable.
    ///
    /// Each capability is tried independently; a failure leaves only that
    /// handle unset.
    pub fn resolve_all(&mut self) {
        self.resolve_missing();

        let slots = [
            ("weather", self.weather.error()),
            ("datetime", self.datetime.error()),
            ("examples", self.examples.error()),
        ];
        for (capability, err) in slots {
            if let Some(err) = err {
                tracing::warn!(capability, error = %err, "provider not available");
            }
        }
    }

    fn resolve_missing(&mut self) {
        let registry = &self.registry;
        self.weather.resolve_with("weather", &self.ids.weather, |id| registry.weather(id));
        self.examples.resolve_with("examples", &self.ids.examples, |id| registry.examples(id));
        self.datetime.resolve_with("datetime", &self.ids.datetime, |id| registry.datetime(id));
    }

    /// Weather handle, resolving lazily when missing.
    ///
    /// # Errors
    ///
    /// Returns the resolution error if no handle could be obtained.
    pub fn weather(&mut self) -> Result<&dyn WeatherProvider, ProviderError> {
        if !self.weather.is_resolved() {
            self.resolve_missing();
        }
        self.weather.handle("weather")
    }

    /// Date/time handle, resolving lazily when missing.
    ///
    /// # Errors
    ///
    /// Returns the resolution error if no handle could be obtained.
    pub fn datetime(&mut self) -> Result<&dyn DateTimeProvider, ProviderError> {
        if !self.datetime.is_resolved() {
            self.resolve_missing();
        }
        self.datetime.handle("datetime")
    }

    /// Examples handle, resolving lazily when missing.
    ///
    /// # Errors
    ///
    /// Returns the resolution error if no handle could be obtained.
    pub fn examples(&mut self) -> Result<&dyn ExamplesProvider, ProviderError> {
        if !self.examples.is_resolved() {
            self.resolve_missing();
        }
        self.examples.handle("examples")
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers")
            .field("ids", &self.ids)
            .field("weather", &self.weather)
            .field("datetime", &self.datetime)
            .field("examples", &self.examples)
            .finish_non_exhaustive()
    }
}
