//! Comment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Comment record, linked to its order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<RecordId>,
    pub order_id: RecordId,
    pub text: String,
    pub author: RecordId,
    pub author_nickname: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

/// Create comment payload
#[derive(Debug, Clone, Deserialize)]
pub struct CommentCreate {
    pub text: String,
}
