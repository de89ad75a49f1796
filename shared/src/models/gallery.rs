//! Gallery Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Photo album. `photo_count` is denormalized and maintained by the
/// server on every photo insert/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub photo_count: i64,
}

/// Photo metadata. The binary lives in path-addressed storage; `url`
/// and `thumbnail_url` are the storage paths served by the photo file
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: Option<String>,
    pub album_id: String,
    pub url: String,
    pub thumbnail_url: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
}
