//! Homescreen event loop.
//!
//! A single actor task owns the [`HomescreenSession`] and processes messages
//! sequentially. After the system reports ready, a periodic timer re-runs the
//! date/time refresh inside the same loop, so handlers never overlap.

mod handle;
mod messages;
mod stdio;

use std::time::Duration;

pub use handle::{ActorError, HomescreenHandle};
pub use messages::HomescreenMessage;
pub use stdio::run_stdio;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::bus::HomescreenEvent;
use crate::constants::{DATETIME_REFRESH_DELAY_SECS, DATETIME_REFRESH_INTERVAL_SECS};
use crate::session::{EventOutcome, HomescreenSession};

/// Channel buffer size for the actor.
const CHANNEL_BUFFER_SIZE: usize = 64;

/// The actor that owns the session.
pub struct HomescreenActor {
    session: HomescreenSession,
    receiver: mpsc::Receiver<HomescreenMessage>,
    datetime_timer: Option<Interval>,
}

impl HomescreenActor {
    /// Spawns the actor on the current runtime.
    ///
    /// The returned task completes once the actor stops.
    #[must_use]
    pub fn spawn(session: HomescreenSession) -> (HomescreenHandle, JoinHandle<()>) {
        tracing::debug!("spawning homescreen actor");
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let actor = Self { session, receiver, datetime_timer: None };
        let task = tokio::spawn(actor.run());

        (HomescreenHandle::new(sender), task)
    }

    async fn run(mut self) {
        tracing::trace!("homescreen actor loop starting");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else {
                        tracing::debug!("homescreen actor channel closed, exiting");
                        break;
                    };
                    if self.handle_message(msg).await == EventOutcome::Shutdown {
                        break;
                    }
                }
                () = next_tick(self.datetime_timer.as_mut()) => {
                    self.session.refresh_datetime();
                }
            }
        }

        self.datetime_timer = None;
        tracing::debug!("homescreen actor stopped");
    }

    async fn handle_message(&mut self, msg: HomescreenMessage) -> EventOutcome {
        tracing::trace!(message = msg.name(), "actor received message");

        let event = match msg {
            HomescreenMessage::Bus(message) => {
                let Some(event) = HomescreenEvent::from_message(&message) else {
                    tracing::debug!(msg_type = %message.msg_type, "ignoring unhandled message");
                    return EventOutcome::Continue;
                };
                event
            }
            HomescreenMessage::Event(event) => event,
            HomescreenMessage::Snapshot { respond_to } => {
                let _ = respond_to.send(self.session.display().snapshot());
                return EventOutcome::Continue;
            }
            HomescreenMessage::Shutdown => HomescreenEvent::Shutdown,
        };

        let outcome = self.session.handle_event(event).await;
        match outcome {
            EventOutcome::Ready => self.start_datetime_timer(),
            EventOutcome::Shutdown => self.datetime_timer = None,
            EventOutcome::Continue => {}
        }
        outcome
    }

    fn start_datetime_timer(&mut self) {
        let delay = Duration::from_secs(DATETIME_REFRESH_DELAY_SECS);
        let period = Duration::from_secs(DATETIME_REFRESH_INTERVAL_SECS);

        let mut timer = interval_at(Instant::now() + delay, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.datetime_timer = Some(timer);

        tracing::debug!(
            delay_secs = DATETIME_REFRESH_DELAY_SECS,
            period_secs = DATETIME_REFRESH_INTERVAL_SECS,
            "scheduled periodic datetime refresh"
        );
    }
}

/// Waits for the next tick, or forever when no timer is running.
async fn next_tick(timer: Option<&mut Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;
    use crate::bus::BusMessage;
    use crate::config::HomescreenConfig;
    use crate::display::fields;
    use crate::modules::providers::BuiltinRegistry;

    fn spawn_actor() -> (TempDir, HomescreenHandle, JoinHandle<()>, UnboundedReceiver<BusMessage>) {
        let temp = TempDir::new().unwrap();
        let builtin = temp.path().join("ui/wallpapers");
        fs::create_dir_all(&builtin).unwrap();
        fs::write(builtin.join("default.jpg"), b"img").unwrap();
        fs::write(builtin.join("sunset.jpg"), b"img").unwrap();

        let config = HomescreenConfig {
            data_dir: temp.path().display().to_string(),
            ..Default::default()
        };
        let registry = Box::new(BuiltinRegistry::from_config(&config));
        let (tx, rx) = mpsc::unbounded_channel();
        let session = HomescreenSession::initialize(config, registry, tx).unwrap();
        let (handle, task) = HomescreenActor::spawn(session);

        (temp, handle, task, rx)
    }

    fn drain(rx: &mut UnboundedReceiver<BusMessage>) -> Vec<BusMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    fn count_syncs(messages: &[BusMessage]) -> usize {
        messages.iter().filter(|m| m.msg_type == "homescreen.gui.sync").count()
    }

    #[tokio::test]
    async fn test_bus_messages_are_decoded() {
        let (_temp, handle, task, mut rx) = spawn_actor();

        handle.dispatch(BusMessage::new("homescreen.swipe.change.wallpaper")).await.unwrap();
        handle.dispatch(BusMessage::new("speak").with("utterance", "hi")).await.unwrap();
        let snapshot = handle.snapshot().await.unwrap();

        assert_eq!(snapshot[fields::SELECTED_WALLPAPER], json!("sunset.jpg"));
        let messages = drain(&mut rx);
        assert_eq!(messages[0].msg_type, "mycroft.device.show.idle");
        assert_eq!(count_syncs(&messages), 1);

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_datetime_refresh_starts_after_ready() {
        let (_temp, handle, task, mut rx) = spawn_actor();
        drain(&mut rx);

        handle.event(HomescreenEvent::SystemReady).await.unwrap();

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(count_syncs(&drain(&mut rx)), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let messages = drain(&mut rx);
        assert_eq!(count_syncs(&messages), 1);
        assert!(messages[0].data["model"].get(fields::TIME_STRING).is_some());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count_syncs(&drain(&mut rx)), 1);

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_refresh_without_ready() {
        let (_temp, handle, task, mut rx) = spawn_actor();
        drain(&mut rx);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(drain(&mut rx).is_empty());

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_refresh() {
        let (_temp, handle, task, mut rx) = spawn_actor();

        handle.event(HomescreenEvent::SystemReady).await.unwrap();
        handle.shutdown().await.unwrap();
        task.await.unwrap();
        drain(&mut rx);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(drain(&mut rx).is_empty());
        assert!(handle.is_closed());
        assert!(matches!(handle.snapshot().await, Err(ActorError::SendFailed)));
    }

    #[tokio::test]
    async fn test_shutdown_bus_message_stops_actor() {
        let (_temp, handle, task, _rx) = spawn_actor();

        handle.dispatch(BusMessage::new("homescreen.shutdown")).await.unwrap();
        task.await.unwrap();

        assert!(handle.is_closed());
    }
}
