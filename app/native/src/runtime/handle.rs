//! Handle for communicating with the homescreen actor.

use serde_json::{Map, Value};
use tokio::sync::{mpsc, oneshot};

use super::messages::HomescreenMessage;
use crate::bus::{BusMessage, HomescreenEvent};

/// Error types for actor communication.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// Failed to send message to actor.
    #[error("Failed to send message to actor: channel closed")]
    SendFailed,

    /// Failed to receive response from actor.
    #[error("Failed to receive response from actor: channel closed")]
    ReceiveFailed,
}

/// Cloneable sender side of the homescreen actor.
#[derive(Debug, Clone)]
pub struct HomescreenHandle {
    sender: mpsc::Sender<HomescreenMessage>,
}

impl HomescreenHandle {
    pub(crate) const fn new(sender: mpsc::Sender<HomescreenMessage>) -> Self { Self { sender } }

    /// Sends a message, waiting for room in the channel.
    async fn send(&self, msg: HomescreenMessage) -> Result<(), ActorError> {
        self.sender.send(msg).await.map_err(|_| ActorError::SendFailed)
    }

    /// Forwards a raw bus message.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn dispatch(&self, message: BusMessage) -> Result<(), ActorError> {
        self.send(HomescreenMessage::Bus(message)).await
    }

    /// Sends a decoded event.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn event(&self, event: HomescreenEvent) -> Result<(), ActorError> {
        self.send(HomescreenMessage::Event(event)).await
    }

    /// Returns the current display model.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor has stopped.
    pub async fn snapshot(&self) -> Result<Map<String, Value>, ActorError> {
        let (tx, rx) = oneshot::channel();
        self.send(HomescreenMessage::Snapshot { respond_to: tx }).await?;
        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Asks the actor to stop.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has already stopped.
    pub async fn shutdown(&self) -> Result<(), ActorError> {
        self.send(HomescreenMessage::Shutdown).await
    }

    /// Returns `true` once the actor has stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool { self.sender.is_closed() }
}
