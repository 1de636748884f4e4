//! Message types for the homescreen actor.

use serde_json::{Map, Value};
use tokio::sync::oneshot;

use crate::bus::{BusMessage, HomescreenEvent};

/// Messages sent to the homescreen actor.
#[derive(Debug)]
pub enum HomescreenMessage {
    /// Raw bus message; decoded by the actor, unrelated types are dropped.
    Bus(BusMessage),

    /// Already decoded event.
    Event(HomescreenEvent),

    /// Current display model.
    Snapshot {
        respond_to: oneshot::Sender<Map<String, Value>>,
    },

    /// Stop the actor and cancel the periodic refresh.
    Shutdown,
}

impl HomescreenMessage {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bus(_) => "bus",
            Self::Event(event) => event.name(),
            Self::Snapshot { .. } => "snapshot",
            Self::Shutdown => "shutdown",
        }
    }
}
