//! Line-delimited JSON bridge between the host bus and the actor.
//!
//! Each stdin line is one inbound [`BusMessage`]; each outbound message is
//! written to stdout as one line.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{HomescreenActor, HomescreenHandle};
use crate::bus::BusMessage;
use crate::error::HomescreenError;
use crate::session::HomescreenSession;

/// Runs the session until stdin closes or a shutdown message arrives.
///
/// # Errors
///
/// Returns an error if reading stdin fails.
pub async fn run_stdio(
    session: HomescreenSession,
    outbound: UnboundedReceiver<BusMessage>,
) -> Result<(), HomescreenError> {
    let writer = tokio::spawn(write_outbound(outbound));
    let (handle, mut actor) = HomescreenActor::spawn(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let actor_stopped = loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => forward_line(&handle, &line).await,
                None => {
                    tracing::info!("stdin closed");
                    break false;
                }
            },
            result = &mut actor => {
                if let Err(err) = result {
                    tracing::error!(error = %err, "homescreen actor failed");
                }
                break true;
            }
        }
    };

    if !actor_stopped {
        let _ = handle.shutdown().await;
        if let Err(err) = actor.await {
            tracing::error!(error = %err, "homescreen actor failed");
        }
    }

    drop(handle);
    if let Err(err) = writer.await {
        tracing::error!(error = %err, "outbound writer failed");
    }
    Ok(())
}

async fn forward_line(handle: &HomescreenHandle, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    match serde_json::from_str::<BusMessage>(line) {
        Ok(message) => {
            if let Err(err) = handle.dispatch(message).await {
                tracing::warn!(error = %err, "dropping inbound message");
            }
        }
        Err(err) => tracing::warn!(error = %err, "invalid bus message"),
    }
}

async fn write_outbound(mut outbound: UnboundedReceiver<BusMessage>) {
    let mut stdout = tokio::io::stdout();

    while let Some(message) = outbound.recv().await {
        let line = match serde_json::to_string(&message) {
            Ok(line) => line,
            Err(err) => {
                tracing::error!(error = %err, msg_type = %message.msg_type, "failed to encode message");
                continue;
            }
        };

        let written = async {
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await
        };
        if let Err(err) = written.await {
            tracing::error!(error = %err, "failed to write outbound message");
            break;
        }
    }
}
