//! Small typed broadcaster built on `tokio::sync::broadcast`.
//!
//! Bounded channel drops oldest events when subscribers lag; emission is
//! fire-and-forget with no delivery guarantee.

use futures::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::contract::model::NotificationRecord;

#[derive(Clone)]
pub struct NotificationBroadcaster {
    tx: broadcast::Sender<NotificationRecord>,
}

impl NotificationBroadcaster {
    /// Create a broadcaster with bounded buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Broadcast a record to current subscribers.
    /// Errors are ignored to keep the hot path cheap (e.g., no active subscribers).
    pub fn send(&self, record: NotificationRecord) {
        let _ = self.tx.send(record);
    }

    /// Subscribe to a typed stream of records; lag/drop errors are filtered out.
    pub fn subscribe_stream(&self) -> impl Stream<Item = NotificationRecord> {
        BroadcastStream::new(self.tx.subscribe()).filter_map(|res| async move { res.ok() })
    }
}
