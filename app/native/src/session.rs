//! Homescreen session.
//!
//! The session owns every piece of mutable state: settings, wallpaper store,
//! provider handles, notification relay and display model. Handlers run to
//! completion one at a time; none of them returns an error to the caller.
//! Failures are logged and the session keeps going.

use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::bus::{BusMessage, HomescreenEvent};
use crate::config::{HomescreenConfig, HomescreenPaths, SkillSettings};
use crate::constants::IDLE_PAGE;
use crate::display::DisplayModel;
use crate::error::HomescreenError;
use crate::events;
use crate::modules::home::{self, HomeSources};
use crate::modules::notifications::NotificationRelay;
use crate::modules::providers::{BuiltinRegistry, ProviderIds, ProviderRegistry, Providers};
use crate::modules::wallpaper::{WallpaperDownloader, WallpaperError, WallpaperStore};
use crate::platform::data;

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Keep processing.
    Continue,
    /// The system became ready for the first time; start periodic refreshes.
    Ready,
    /// Stop processing and cancel periodic refreshes.
    Shutdown,
}

/// State and handlers of a running homescreen.
pub struct HomescreenSession {
    config: HomescreenConfig,
    paths: HomescreenPaths,
    settings: SkillSettings,
    store: WallpaperStore,
    downloader: WallpaperDownloader,
    providers: Providers,
    relay: NotificationRelay,
    display: DisplayModel,
    outbound: UnboundedSender<BusMessage>,
    ready: bool,
}

impl HomescreenSession {
    /// Prepares the data directories, loads persisted settings, scans the
    /// wallpapers and asks the host to show the idle screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for downloads cannot be created.
    pub fn initialize(
        config: HomescreenConfig,
        registry: Box<dyn ProviderRegistry>,
        outbound: UnboundedSender<BusMessage>,
    ) -> Result<Self, HomescreenError> {
        let paths = config.paths();

        if let Err(err) = data::ensure_dir(&paths.user_wallpapers) {
            tracing::warn!(
                error = %err,
                dir = %paths.user_wallpapers.display(),
                "failed to create wallpaper directory"
            );
        }

        let settings = SkillSettings::load(&paths.settings);
        let ids = ProviderIds::from_settings(&settings, &config.defaults);

        let mut store = WallpaperStore::new(
            paths.builtin_wallpapers.clone(),
            paths.user_wallpapers.clone(),
            settings.selected_wallpaper(),
        );
        store.refresh_collection();

        let downloader =
            WallpaperDownloader::new(Duration::from_secs(config.download_timeout_secs))
                .map_err(WallpaperError::from)?;

        tracing::info!(
            wallpapers = store.collection().len(),
            selected = %store.selected(),
            "homescreen initialized"
        );

        let session = Self {
            config,
            paths,
            settings,
            store,
            downloader,
            providers: Providers::new(registry, ids),
            relay: NotificationRelay::new(),
            display: DisplayModel::new(),
            outbound,
            ready: false,
        };
        session.emit(BusMessage::new(events::system::SHOW_IDLE));
        Ok(session)
    }

    /// Initializes a session served by the built-in providers.
    ///
    /// Returns the session and the receiving end of its outbound messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be initialized.
    pub fn with_builtin_providers(
        config: HomescreenConfig,
    ) -> Result<(Self, UnboundedReceiver<BusMessage>), HomescreenError> {
        let registry = Box::new(BuiltinRegistry::from_config(&config));
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self::initialize(config, registry, tx)?;
        Ok((session, rx))
    }

    #[must_use]
    pub const fn config(&self) -> &HomescreenConfig { &self.config }

    #[must_use]
    pub const fn paths(&self) -> &HomescreenPaths { &self.paths }

    #[must_use]
    pub const fn settings(&self) -> &SkillSettings { &self.settings }

    #[must_use]
    pub const fn store(&self) -> &WallpaperStore { &self.store }

    #[must_use]
    pub const fn display(&self) -> &DisplayModel { &self.display }

    #[must_use]
    pub const fn is_ready(&self) -> bool { self.ready }

    /// Handles one inbound event, then syncs the display model if it changed.
    pub async fn handle_event(&mut self, event: HomescreenEvent) -> EventOutcome {
        tracing::debug!(event = event.name(), "handling event");

        let outcome = match event {
            HomescreenEvent::SetWallpaper { url } => {
                self.set_wallpaper(&url).await;
                EventOutcome::Continue
            }
            HomescreenEvent::ChangeWallpaper => {
                self.change_wallpaper();
                EventOutcome::Continue
            }
            HomescreenEvent::NotificationCounter(counter) => {
                let request = self.relay.update_counter(counter, &mut self.display);
                self.emit(request);
                EventOutcome::Continue
            }
            HomescreenEvent::NotificationStorageModel(model) => {
                self.relay.update_storage_model(model, &mut self.display);
                EventOutcome::Continue
            }
            HomescreenEvent::SystemReady => self.system_ready(),
            HomescreenEvent::ActivateHome => {
                self.activate_home();
                EventOutcome::Continue
            }
            HomescreenEvent::Shutdown => {
                tracing::info!("homescreen shutting down");
                EventOutcome::Shutdown
            }
        };

        self.sync();
        outcome
    }

    /// Repopulates the display model and shows the idle page.
    pub fn activate_home(&mut self) {
        home::activate_home(
            HomeSources {
                config: &self.config,
                store: &self.store,
                relay: &self.relay,
                providers: &mut self.providers,
                skills_dir: &self.paths.skills_dir,
                examples_prefix: &self.settings.examples_prefix,
            },
            &mut self.display,
        );
        self.sync();
        self.emit(BusMessage::new(events::homescreen::GUI_SHOW_PAGE).with("page", IDLE_PAGE));
    }

    /// Refreshes the date and time fields. Called by the periodic timer.
    pub fn refresh_datetime(&mut self) {
        home::update_datetime(&mut self.providers, &mut self.display, self.config.month_first());
        self.sync();
    }

    /// Advances to the next wallpaper.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::Empty`] if there are no wallpapers.
    pub fn advance_wallpaper(&mut self) -> Result<String, WallpaperError> {
        let selected = self.store.advance(&mut self.settings)?.to_string();
        home::write_wallpaper(&self.store, &mut self.display);
        Ok(selected)
    }

    /// Downloads `url` and selects it.
    ///
    /// # Errors
    ///
    /// Returns an error if the download or write fails. The previous
    /// selection stays in place.
    pub async fn download_wallpaper(&mut self, url: &str) -> Result<String, WallpaperError> {
        let selected = self
            .store
            .set_from_downloaded_url(url, &self.downloader, &mut self.settings)
            .await?
            .to_string();
        home::write_wallpaper(&self.store, &mut self.display);
        Ok(selected)
    }

    fn change_wallpaper(&mut self) {
        if let Err(err) = self.advance_wallpaper() {
            tracing::warn!(error = %err, "cannot change wallpaper");
        }
    }

    async fn set_wallpaper(&mut self, url: &str) {
        if url.trim().is_empty() {
            tracing::warn!("set wallpaper request without URL ignored");
            return;
        }

        if let Err(err) = self.download_wallpaper(url).await {
            tracing::error!(url, error = %err, "failed to set wallpaper");
        }
    }

    fn system_ready(&mut self) -> EventOutcome {
        if self.ready {
            tracing::debug!("ignoring repeated ready signal");
            return EventOutcome::Continue;
        }

        self.ready = true;
        self.providers.resolve_all();
        EventOutcome::Ready
    }

    fn sync(&mut self) {
        if let Some(snapshot) = self.display.take_snapshot() {
            self.emit(
                BusMessage::new(events::homescreen::GUI_SYNC).with("model", Value::Object(snapshot)),
            );
        }
    }

    fn emit(&self, message: BusMessage) {
        if self.outbound.send(message).is_err() {
            tracing::debug!("outbound channel closed, message dropped");
        }
    }
}

impl std::fmt::Debug for HomescreenSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomescreenSession")
            .field("paths", &self.paths)
            .field("store", &self.store)
            .field("providers", &self.providers)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::display::fields;
    use crate::modules::providers::BuiltinRegistry;

    struct Fixture {
        _temp: TempDir,
        session: HomescreenSession,
        rx: UnboundedReceiver<BusMessage>,
    }

    impl Fixture {
        fn new(wallpapers: &[&str]) -> Self {
            let temp = TempDir::new().unwrap();
            let data_dir = temp.path().join("data");
            let builtin = data_dir.join("ui/wallpapers");
            fs::create_dir_all(&builtin).unwrap();
            for name in wallpapers {
                fs::write(builtin.join(name), b"img").unwrap();
            }

            let config = HomescreenConfig {
                data_dir: data_dir.display().to_string(),
                examples: vec!["what time is it".to_string()],
                ..Default::default()
            };
            let registry = Box::new(BuiltinRegistry::from_config(&config));
            let (tx, rx) = mpsc::unbounded_channel();
            let session = HomescreenSession::initialize(config, registry, tx).unwrap();

            Self { _temp: temp, session, rx }
        }

        fn drain(&mut self) -> Vec<BusMessage> {
            let mut messages = Vec::new();
            while let Ok(message) = self.rx.try_recv() {
                messages.push(message);
            }
            messages
        }

        fn types(&mut self) -> Vec<String> {
            self.drain().into_iter().map(|m| m.msg_type).collect()
        }
    }

    #[test]
    fn test_session_can_move_to_runtime_task() {
        fn assert_send<T: Send>() {}
        assert_send::<HomescreenSession>();
        assert_send::<Providers>();
    }

    #[tokio::test]
    async fn test_initialize_shows_idle_and_creates_user_dir() {
        let mut fixture = Fixture::new(&["default.jpg"]);

        assert_eq!(fixture.types(), ["mycroft.device.show.idle"]);
        assert!(fixture.session.paths().user_wallpapers.is_dir());
        assert_eq!(fixture.session.store().selected(), "default.jpg");
        assert_eq!(fixture.session.store().collection(), ["default.jpg"]);
    }

    #[tokio::test]
    async fn test_change_wallpaper_syncs_model() {
        let mut fixture = Fixture::new(&["a.jpg", "b.jpg", "default.jpg"]);
        fixture.drain();

        fixture.session.handle_event(HomescreenEvent::ChangeWallpaper).await;

        // default.jpg is last, so the next one wraps to a.jpg.
        assert_eq!(fixture.session.store().selected(), "a.jpg");
        assert_eq!(fixture.session.settings().wallpaper.as_deref(), Some("a.jpg"));

        let messages = fixture.drain();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].msg_type, "homescreen.gui.sync");
        assert_eq!(messages[0].data["model"][fields::SELECTED_WALLPAPER], json!("a.jpg"));
    }

    #[tokio::test]
    async fn test_change_wallpaper_on_empty_collection_is_harmless() {
        let mut fixture = Fixture::new(&[]);
        fixture.drain();

        let outcome = fixture.session.handle_event(HomescreenEvent::ChangeWallpaper).await;

        assert_eq!(outcome, EventOutcome::Continue);
        assert_eq!(fixture.session.store().selected(), "default.jpg");
        assert!(fixture.drain().is_empty());
    }

    #[tokio::test]
    async fn test_empty_url_is_ignored() {
        let mut fixture = Fixture::new(&["default.jpg"]);
        fixture.drain();

        fixture
            .session
            .handle_event(HomescreenEvent::SetWallpaper { url: String::new() })
            .await;

        assert_eq!(fixture.session.store().collection(), ["default.jpg"]);
        assert!(fixture.drain().is_empty());
    }

    #[tokio::test]
    async fn test_notification_counter_requests_storage_model() {
        let mut fixture = Fixture::new(&[]);
        fixture.drain();

        fixture.session.handle_event(HomescreenEvent::NotificationCounter(json!(4))).await;

        assert_eq!(fixture.types(), [
            "ovos.notification.api.request.storage.model",
            "homescreen.gui.sync"
        ]);
        assert_eq!(
            fixture.session.display().get(fields::NOTIFICATION_COUNTER),
            Some(&json!(4))
        );
    }

    #[tokio::test]
    async fn test_ready_is_handled_once() {
        let mut fixture = Fixture::new(&[]);

        assert_eq!(
            fixture.session.handle_event(HomescreenEvent::SystemReady).await,
            EventOutcome::Ready
        );
        assert_eq!(
            fixture.session.handle_event(HomescreenEvent::SystemReady).await,
            EventOutcome::Continue
        );
        assert!(fixture.session.is_ready());
    }

    #[tokio::test]
    async fn test_activate_home_shows_idle_page() {
        let mut fixture = Fixture::new(&["default.jpg"]);
        fixture.drain();

        fixture.session.handle_event(HomescreenEvent::ActivateHome).await;

        let messages = fixture.drain();
        let types: Vec<&str> = messages.iter().map(|m| m.msg_type.as_str()).collect();
        assert_eq!(types, ["homescreen.gui.sync", "homescreen.gui.show_page"]);
        assert_eq!(messages[1].data["page"], json!("idle.qml"));

        let display = fixture.session.display();
        assert_eq!(display.get(fields::WEATHER_API_ENABLED), Some(&json!(false)));
        assert_eq!(
            display.get(fields::SKILL_EXAMPLES),
            Some(&json!({"examples": ["Ask Me, what time is it"]}))
        );
        assert!(display.contains(fields::TIME_STRING));
    }

    #[tokio::test]
    async fn test_shutdown_outcome() {
        let mut fixture = Fixture::new(&[]);
        assert_eq!(
            fixture.session.handle_event(HomescreenEvent::Shutdown).await,
            EventOutcome::Shutdown
        );
    }
}
