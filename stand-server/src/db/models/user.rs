//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User record. Nickname is unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<RecordId>,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

/// Register / login / rename payload
#[derive(Debug, Clone, Deserialize)]
pub struct NicknameRequest {
    pub nickname: String,
}
