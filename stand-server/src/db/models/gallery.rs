//! Gallery Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Album record. `photo_count` is adjusted atomically alongside every
/// photo insert/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<RecordId>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: RecordId,
    pub photo_count: i64,
}

/// Photo record, linked to its album. The binary lives on disk under
/// the photo store; `url` / `thumbnail_url` are its storage paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: Option<RecordId>,
    pub album: RecordId,
    pub url: String,
    pub thumbnail_url: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: RecordId,
}

// =============================================================================
// API Request Types
// =============================================================================

/// Create album payload
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumCreate {
    pub name: String,
}

/// Rename album payload
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRename {
    pub name: String,
}
