//! Cross-context message channel.
//!
//! Messages cross the boundary serialized, so nothing but the flat wire
//! payload can leak from host to zone. Delivery is FIFO per channel and
//! fire-and-forget: posting never waits on the receiving side.

use tokio::sync::mpsc;
use touchrelay_common::ProtocolError;

use crate::message::RelayMessage;

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("receiving context is gone")]
    Closed,

    #[error(transparent)]
    Encode(#[from] ProtocolError),
}

/// Sending half, held by the host for each loaded zone.
#[derive(Debug, Clone)]
pub struct RelayPort {
    tx: mpsc::UnboundedSender<String>,
}

/// Receiving half, owned by the zone context.
#[derive(Debug)]
pub struct RelayInbox {
    rx: mpsc::UnboundedReceiver<String>,
}

/// Create a connected port/inbox pair.
pub fn channel() -> (RelayPort, RelayInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RelayPort { tx }, RelayInbox { rx })
}

impl RelayPort {
    /// Serialize and post a message. Never blocks.
    pub fn post(&self, message: &RelayMessage) -> Result<(), PostError> {
        let raw = message.to_json()?;
        self.post_raw(raw)
    }

    /// Post an already-serialized payload.
    pub fn post_raw(&self, raw: String) -> Result<(), PostError> {
        self.tx.send(raw).map_err(|_| PostError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl RelayInbox {
    /// Wait for the next payload. `None` once every port is dropped.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    /// Take the next payload if one is already queued.
    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    /// Stop accepting messages. Later posts fail with [`PostError::Closed`].
    pub fn close(&mut self) {
        self.rx.close();
    }
}
