//! Comment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment attached to an order.
///
/// The author nickname is denormalized so clients can render a thread
/// without resolving user ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub order_id: String,
    pub text: String,
    pub author_id: String,
    pub author_nickname: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}
