//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nickname account. No passwords; this is a trusted-team tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}
