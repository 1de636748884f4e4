//! Bus message model.
//!
//! Messages travel as `{"type": ..., "data": {...}, "context": {...}}`. Inbound
//! messages are decoded into [`HomescreenEvent`] before reaching the session;
//! anything the homescreen does not handle decodes to `None`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::events::{homescreen, notification, system};

/// A message on the host bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    /// Event name.
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Event payload.
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Routing context, passed through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub context: Map<String, Value>,
}

impl BusMessage {
    /// Creates a message without payload.
    #[must_use]
    pub fn new(msg_type: impl Into<String>) -> Self {
        Self {
            msg_type: msg_type.into(),
            data: Map::new(),
            context: Map::new(),
        }
    }

    /// Adds a payload field.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// Returns a payload field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> { self.data.get(key) }
}

/// Inbound events the homescreen reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum HomescreenEvent {
    /// Download and select a wallpaper.
    SetWallpaper { url: String },
    /// Advance to the next wallpaper (swipe or voice).
    ChangeWallpaper,
    /// Notification counter update, forwarded verbatim.
    NotificationCounter(Value),
    /// Notification storage model update, forwarded verbatim.
    NotificationStorageModel(Value),
    /// The assistant is ready.
    SystemReady,
    /// Activate the home view.
    ActivateHome,
    /// Stop processing.
    Shutdown,
}

impl HomescreenEvent {
    /// Decodes a bus message. Returns `None` for unrelated messages.
    #[must_use]
    pub fn from_message(message: &BusMessage) -> Option<Self> {
        let event = match message.msg_type.as_str() {
            homescreen::WALLPAPER_SET => Self::SetWallpaper {
                url: message.get("url").and_then(Value::as_str).unwrap_or_default().to_string(),
            },
            homescreen::WALLPAPER_CHANGE | homescreen::SWIPE_CHANGE_WALLPAPER => {
                Self::ChangeWallpaper
            }
            homescreen::IDLE_ACTIVATE => Self::ActivateHome,
            homescreen::SHUTDOWN => Self::Shutdown,
            notification::UPDATE_COUNTER => Self::NotificationCounter(
                message
                    .get("notification_counter")
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new())),
            ),
            notification::UPDATE_STORAGE_MODEL => Self::NotificationStorageModel(
                message
                    .get("notification_model")
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new())),
            ),
            system::READY => Self::SystemReady,
            _ => return None,
        };
        Some(event)
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetWallpaper { .. } => "set-wallpaper",
            Self::ChangeWallpaper => "change-wallpaper",
            Self::NotificationCounter(_) => "notification-counter",
            Self::NotificationStorageModel(_) => "notification-storage-model",
            Self::SystemReady => "system-ready",
            Self::ActivateHome => "activate-home",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_deserializes_without_data() {
        let msg: BusMessage = serde_json::from_str(r#"{"type": "mycroft.ready"}"#).unwrap();
        assert_eq!(msg.msg_type, "mycroft.ready");
        assert!(msg.data.is_empty());
        assert_eq!(HomescreenEvent::from_message(&msg), Some(HomescreenEvent::SystemReady));
    }

    #[test]
    fn test_message_serializes_type_field() {
        let msg = BusMessage::new(system::SHOW_IDLE);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, json!({"type": "mycroft.device.show.idle", "data": {}}));
    }

    #[test]
    fn test_set_wallpaper_reads_url() {
        let msg = BusMessage::new(homescreen::WALLPAPER_SET).with("url", "http://x/y.jpg");
        assert_eq!(
            HomescreenEvent::from_message(&msg),
            Some(HomescreenEvent::SetWallpaper { url: "http://x/y.jpg".to_string() })
        );
    }

    #[test]
    fn test_set_wallpaper_missing_url_is_empty() {
        let msg = BusMessage::new(homescreen::WALLPAPER_SET);
        assert_eq!(
            HomescreenEvent::from_message(&msg),
            Some(HomescreenEvent::SetWallpaper { url: String::new() })
        );
    }

    #[test]
    fn test_swipe_and_voice_both_change_wallpaper() {
        for name in [homescreen::SWIPE_CHANGE_WALLPAPER, homescreen::WALLPAPER_CHANGE] {
            let msg = BusMessage::new(name);
            assert_eq!(
                HomescreenEvent::from_message(&msg),
                Some(HomescreenEvent::ChangeWallpaper)
            );
        }
    }

    #[test]
    fn test_storage_model_is_passed_verbatim() {
        let model = json!([{"text": "hello", "nested": {"a": 1}}]);
        let msg = BusMessage::new(notification::UPDATE_STORAGE_MODEL)
            .with("notification_model", model.clone());
        assert_eq!(
            HomescreenEvent::from_message(&msg),
            Some(HomescreenEvent::NotificationStorageModel(model))
        );
    }

    #[test]
    fn test_unknown_message_is_ignored() {
        let msg = BusMessage::new("speak").with("utterance", "hi");
        assert!(HomescreenEvent::from_message(&msg).is_none());
    }
}
