//! Notification widget relay.
//!
//! Forwards counter and storage-model updates from the notification service
//! to the display model. The storage model is opaque and stored verbatim.

use serde_json::{Value, json};

use crate::bus::BusMessage;
use crate::display::{DisplayModel, fields};
use crate::events;

/// Relays notification updates and remembers the last storage model.
#[derive(Debug, Clone, Default)]
pub struct NotificationRelay {
    storage_model: Option<Value>,
}

impl NotificationRelay {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Writes the counter and returns the request for the full storage model.
    pub fn update_counter(&self, counter: Value, display: &mut DisplayModel) -> BusMessage {
        tracing::debug!(counter = %counter, "notification counter updated");
        display.set(fields::NOTIFICATION_COUNTER, counter);
        BusMessage::new(events::notification::REQUEST_STORAGE_MODEL)
    }

    /// Stores `model` and forwards it to the display model.
    pub fn update_storage_model(&mut self, model: Value, display: &mut DisplayModel) {
        display.set(fields::NOTIFICATION_MODEL, model.clone());
        self.storage_model = Some(model);
    }

    /// Storage model shown when the home view activates.
    ///
    /// The last forwarded model, or an empty one if none was received.
    #[must_use]
    pub fn current_model(&self) -> Value {
        self.storage_model
            .clone()
            .unwrap_or_else(|| json!({ "storedmodel": [], "count": 0 }))
    }
}
