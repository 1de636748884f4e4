//! End-to-end session behaviour with fake providers.

use std::fs;
use std::path::Path;

use homescreen_lib::bus::{BusMessage, HomescreenEvent};
use homescreen_lib::config::HomescreenConfig;
use homescreen_lib::display::fields;
use homescreen_lib::modules::providers::{
    ClockProvider, DateTimeProvider, ExamplesProvider, ProviderError, ProviderRegistry,
    StaticExamples, WeatherProvider, WeatherReport,
};
use homescreen_lib::session::HomescreenSession;
use serde_json::json;
use tempfile::TempDir;
use tokio::sync::mpsc::{self, UnboundedReceiver};

struct FailingWeather;

impl WeatherProvider for FailingWeather {
    fn current_weather(&self) -> Result<Option<WeatherReport>, ProviderError> {
        Err(ProviderError::Call("service timed out".to_string()))
    }
}

struct SunnyWeather;

impl WeatherProvider for SunnyWeather {
    fn current_weather(&self) -> Result<Option<WeatherReport>, ProviderError> {
        Ok(Some(WeatherReport { weather_code: Some(0), weather_temp: Some(24) }))
    }
}

#[derive(Clone, Copy)]
enum WeatherMode {
    Missing,
    Failing,
    Sunny,
}

struct FakeRegistry {
    weather: WeatherMode,
}

impl ProviderRegistry for FakeRegistry {
    fn weather(&self, id: &str) -> Result<Box<dyn WeatherProvider>, ProviderError> {
        match self.weather {
            WeatherMode::Missing => Err(ProviderError::NotFound(id.to_string())),
            WeatherMode::Failing => Ok(Box::new(FailingWeather)),
            WeatherMode::Sunny => Ok(Box::new(SunnyWeather)),
        }
    }

    fn datetime(&self, _id: &str) -> Result<Box<dyn DateTimeProvider>, ProviderError> {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        Ok(Box::new(ClockProvider::fixed(true, at)))
    }

    fn examples(&self, _id: &str) -> Result<Box<dyn ExamplesProvider>, ProviderError> {
        Ok(Box::new(StaticExamples::new(vec![
            "what's the weather".to_string(),
            "set a timer".to_string(),
        ])))
    }
}

fn write_skill(skills: &Path, folder: &str, manifest: &str, contents: &str) {
    let dir = skills.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(manifest), contents).unwrap();
}

fn session(
    temp: &TempDir,
    weather: WeatherMode,
) -> (HomescreenSession, UnboundedReceiver<BusMessage>) {
    let data_dir = temp.path().join("data");
    let builtin = data_dir.join("ui/wallpapers");
    fs::create_dir_all(&builtin).unwrap();
    for name in ["default.jpg", "forest.jpg", "lake.png"] {
        fs::write(builtin.join(name), b"img").unwrap();
    }

    let skills = data_dir.join("skills");
    write_skill(
        &skills,
        "skill-timer",
        "app.json",
        r#"{"icon": "/ui/timer.svg", "name": "Timer", "action": "timer.open"}"#,
    );
    write_skill(
        &skills,
        "skill-music",
        "android.json",
        r#"{"android_icon": "/ui/music.svg", "android_name": "Music", "android_handler": "music.open"}"#,
    );
    write_skill(&skills, "skill-broken", "app.json", r#"{"name": "Broken"}"#);

    let config = HomescreenConfig {
        data_dir: data_dir.display().to_string(),
        date_format: "MDY".to_string(),
        ..Default::default()
    };
    let (tx, rx) = mpsc::unbounded_channel();
    let session =
        HomescreenSession::initialize(config, Box::new(FakeRegistry { weather }), tx).unwrap();
    (session, rx)
}

fn drain(rx: &mut UnboundedReceiver<BusMessage>) -> Vec<BusMessage> {
    let mut messages = Vec::new();
    while let Ok(message) = rx.try_recv() {
        messages.push(message);
    }
    messages
}

#[tokio::test]
async fn weather_failure_does_not_block_other_fields() {
    let temp = TempDir::new().unwrap();
    let (mut session, _rx) = session(&temp, WeatherMode::Failing);

    session.handle_event(HomescreenEvent::ActivateHome).await;

    let display = session.display();
    assert!(!display.contains(fields::WEATHER_API_ENABLED));
    assert!(!display.contains(fields::WEATHER_CODE));
    assert_eq!(display.get(fields::TIME_STRING), Some(&json!("07:45")));
    assert_eq!(display.get(fields::DAY_STRING), Some(&json!("25")));
    assert_eq!(display.get(fields::MONTH_STRING), Some(&json!("December")));
    assert_eq!(
        display.get(fields::SKILL_EXAMPLES),
        Some(&json!({"examples": ["Ask Me, what's the weather", "Ask Me, set a timer"]}))
    );
    assert_eq!(display.get(fields::DATE_FORMAT), Some(&json!("MDY")));
}

#[tokio::test]
async fn missing_weather_provider_disables_widget() {
    let temp = TempDir::new().unwrap();
    let (mut session, _rx) = session(&temp, WeatherMode::Missing);

    session.handle_event(HomescreenEvent::ActivateHome).await;

    assert_eq!(session.display().get(fields::WEATHER_API_ENABLED), Some(&json!(false)));
    assert!(session.display().contains(fields::YEAR_STRING));
}

#[tokio::test]
async fn weather_report_is_shown() {
    let temp = TempDir::new().unwrap();
    let (mut session, _rx) = session(&temp, WeatherMode::Sunny);

    session.handle_event(HomescreenEvent::ActivateHome).await;

    let display = session.display();
    assert_eq!(display.get(fields::WEATHER_API_ENABLED), Some(&json!(true)));
    assert_eq!(display.get(fields::WEATHER_CODE), Some(&json!(0)));
    assert_eq!(display.get(fields::WEATHER_TEMP), Some(&json!(24)));
}

#[tokio::test]
async fn activation_lists_voice_applications() {
    let temp = TempDir::new().unwrap();
    let (mut session, _rx) = session(&temp, WeatherMode::Missing);

    session.handle_event(HomescreenEvent::ActivateHome).await;

    let apps = session.display().get(fields::APPLICATIONS_MODEL).unwrap();
    let names: Vec<&str> =
        apps.as_array().unwrap().iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Music", "Timer"]);
    assert_eq!(apps[0]["action"], json!("music.open"));
    assert_eq!(apps[0]["folder"], json!("skill-music"));
}

#[tokio::test]
async fn rotating_through_collection_returns_to_start() {
    let temp = TempDir::new().unwrap();
    let (mut session, _rx) = session(&temp, WeatherMode::Missing);
    let start = session.store().selected().to_string();
    let length = session.store().collection().len();

    for _ in 0..length {
        session.handle_event(HomescreenEvent::ChangeWallpaper).await;
    }

    assert_eq!(session.store().selected(), start);
}

#[tokio::test]
async fn selection_survives_restart() {
    let temp = TempDir::new().unwrap();
    {
        let (mut session, _rx) = session(&temp, WeatherMode::Missing);
        session.handle_event(HomescreenEvent::ChangeWallpaper).await;
        assert_eq!(session.store().selected(), "forest.jpg");
    }

    let (session, _rx) = session(&temp, WeatherMode::Missing);
    assert_eq!(session.store().selected(), "forest.jpg");
}

#[tokio::test]
async fn notification_flow() {
    let temp = TempDir::new().unwrap();
    let (mut session, mut rx) = session(&temp, WeatherMode::Missing);
    drain(&mut rx);

    session.handle_event(HomescreenEvent::NotificationCounter(json!(2))).await;
    let types: Vec<String> = drain(&mut rx).into_iter().map(|m| m.msg_type).collect();
    assert_eq!(types, ["ovos.notification.api.request.storage.model", "homescreen.gui.sync"]);

    let model = json!({"storedmodel": [{"text": "a"}, {"text": "b"}], "count": 2});
    session.handle_event(HomescreenEvent::NotificationStorageModel(model.clone())).await;
    assert_eq!(session.display().get(fields::NOTIFICATION_MODEL), Some(&model));

    // Activation shows the last model received.
    session.handle_event(HomescreenEvent::ActivateHome).await;
    assert_eq!(session.display().get(fields::NOTIFICATION_MODEL), Some(&model));
}
