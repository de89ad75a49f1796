//! Broadcast bus
//!
//! A thin wrapper over `tokio::sync::broadcast`. Every WebSocket
//! client holds a receiver; slow clients that fall behind the channel
//! capacity miss messages and re-fetch on the next sync they do see.

use tokio::sync::broadcast;

use shared::message::BusMessage;

use crate::utils::AppError;

/// Capacity of the broadcast channel
const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug)]
pub struct MessageBus {
    server_tx: broadcast::Sender<BusMessage>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (server_tx, _) = broadcast::channel(capacity);
        Self { server_tx }
    }

    /// Publish a message to all subscribers. Fails when nobody is
    /// connected, which callers are free to ignore.
    pub fn publish(&self, msg: BusMessage) -> Result<usize, AppError> {
        self.server_tx
            .send(msg)
            .map_err(|e| AppError::internal(e.to_string()))
    }

    /// Subscribe to the bus. The receiver sees messages published
    /// after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.server_tx.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.server_tx.receiver_count()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::message::{EventType, SyncPayload};

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let bus = MessageBus::with_capacity(8);
        let mut rx = bus.subscribe();

        let payload = SyncPayload {
            resource: "order".to_string(),
            version: 1,
            action: "created".to_string(),
            id: "order:x".to_string(),
            data: None,
        };
        bus.publish(BusMessage::sync(&payload)).unwrap();

        let msg = rx.recv().await.unwrap();
        assert_eq!(msg.event_type, EventType::Sync);
        let parsed: SyncPayload = msg.parse_payload().unwrap();
        assert_eq!(parsed.resource, "order");
    }

    #[test]
    fn test_publish_without_subscribers_errors() {
        let bus = MessageBus::with_capacity(8);
        let payload = SyncPayload {
            resource: "order".to_string(),
            version: 1,
            action: "created".to_string(),
            id: "order:x".to_string(),
            data: None,
        };
        assert!(bus.publish(BusMessage::sync(&payload)).is_err());
    }
}
