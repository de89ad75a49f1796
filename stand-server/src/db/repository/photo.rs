//! Photo Repository
//!
//! Photo metadata lives here; the binaries live in the photo store on
//! disk. The album's denormalized `photo_count` is adjusted in the
//! same transaction as every insert/delete.

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Photo;

const TABLE: &str = "photo";

#[derive(Clone)]
pub struct PhotoRepository {
    base: BaseRepository,
}

impl PhotoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert photo metadata and bump the album's photo count.
    pub async fn create(
        &self,
        album: RecordId,
        url: &str,
        thumbnail_url: &str,
        file_name: &str,
        uploaded_by: RecordId,
    ) -> RepoResult<Photo> {
        #[derive(Serialize)]
        struct PhotoContent {
            album: RecordId,
            url: String,
            thumbnail_url: String,
            file_name: String,
            uploaded_at: DateTime<Utc>,
            uploaded_by: RecordId,
        }

        let content = PhotoContent {
            album: album.clone(),
            url: url.to_string(),
            thumbnail_url: thumbnail_url.to_string(),
            file_name: file_name.to_string(),
            uploaded_at: Utc::now(),
            uploaded_by,
        };

        let mut result = self
            .base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 CREATE photo CONTENT $photo;
                 UPDATE $album SET photo_count += 1;
                 COMMIT TRANSACTION;",
            )
            .bind(("photo", content))
            .bind(("album", album))
            .await?;
        let photos: Vec<Photo> = result.take(0)?;
        photos
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create photo".to_string()))
    }

    /// Photos of one album, newest first.
    pub async fn find_by_album(&self, album: RecordId) -> RepoResult<Vec<Photo>> {
        let photos: Vec<Photo> = self
            .base
            .db()
            .query("SELECT * FROM photo WHERE album = $album ORDER BY uploaded_at DESC")
            .bind(("album", album))
            .await?
            .take(0)?;
        Ok(photos)
    }

    /// All photos, newest first (expense receipt picker).
    pub async fn find_all(&self) -> RepoResult<Vec<Photo>> {
        let photos: Vec<Photo> = self
            .base
            .db()
            .query("SELECT * FROM photo ORDER BY uploaded_at DESC")
            .await?
            .take(0)?;
        Ok(photos)
    }

    /// Find photo by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Photo>> {
        let photo: Option<Photo> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(photo)
    }

    /// Delete photo metadata and decrement the album's photo count.
    /// Returns the deleted record so the caller can remove the files.
    pub async fn delete(&self, id: &str) -> RepoResult<Photo> {
        let rid = record_id(TABLE, id);
        let existing: Option<Photo> = self.base.db().select(rid.clone()).await?;
        let photo =
            existing.ok_or_else(|| RepoError::NotFound(format!("Photo {} not found", id)))?;

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE $photo;
                 UPDATE $album SET photo_count -= 1;
                 COMMIT TRANSACTION;",
            )
            .bind(("photo", rid))
            .bind(("album", photo.album.clone()))
            .await?
            .check()?;

        Ok(photo)
    }
}
