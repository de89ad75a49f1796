//! Order Model
//!
//! Orders embed their item list; items have no identity outside the
//! order and are always replaced as a whole (last writer wins).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{ItemCustomizations, ItemKind, OrderItem, OrderStatus};
use surrealdb::RecordId;

/// Order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<RecordId>,
    /// Monotonic number from `setting:order_counter`
    pub order_number: i64,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    /// Stamped once, on the waiting -> completed transition
    pub completed_at: Option<DateTime<Utc>>,
    pub created_by: RecordId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

// =============================================================================
// API Request Types
// =============================================================================

/// One item of a new order. Item ids and the paid/delivered flags are
/// assigned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemInput {
    pub kind: ItemKind,
    #[serde(default)]
    pub customizations: Option<ItemCustomizations>,
}

/// Create order payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<OrderItemInput>,
    pub priority: Option<i32>,
    pub initial_comment: Option<String>,
}

/// Update priority payload
#[derive(Debug, Clone, Deserialize)]
pub struct PriorityUpdate {
    pub priority: i32,
}

/// Replace items payload
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsUpdate {
    pub items: Vec<OrderItem>,
}
