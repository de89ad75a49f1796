//! Message Module
//!
//! Broadcast bus for real-time sync. Handlers publish versioned sync
//! events after every successful mutation; the events WebSocket
//! forwards them to connected clients.

pub mod bus;

pub use bus::MessageBus;
pub use shared::message::{BusMessage, EventType, NotificationPayload, SyncPayload};
