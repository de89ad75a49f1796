//! Album Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Album;

const TABLE: &str = "album";

#[derive(Clone)]
pub struct AlbumRepository {
    base: BaseRepository,
}

impl AlbumRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an empty album.
    pub async fn create(&self, name: &str, created_by: RecordId) -> RepoResult<Album> {
        #[derive(Serialize)]
        struct AlbumContent {
            name: String,
            created_at: DateTime<Utc>,
            created_by: RecordId,
            photo_count: i64,
        }

        let created: Option<Album> = self
            .base
            .db()
            .create(TABLE)
            .content(AlbumContent {
                name: name.to_string(),
                created_at: Utc::now(),
                created_by,
                photo_count: 0,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create album".to_string()))
    }

    /// All albums, newest first.
    pub async fn find_all(&self) -> RepoResult<Vec<Album>> {
        let albums: Vec<Album> = self
            .base
            .db()
            .query("SELECT * FROM album ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(albums)
    }

    /// Find album by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Album>> {
        let album: Option<Album> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(album)
    }

    /// Rename an album.
    pub async fn rename(&self, id: &str, name: &str) -> RepoResult<Album> {
        let name = name.to_string();
        let mut result = self
            .base
            .db()
            .query("UPDATE $album SET name = $name RETURN AFTER")
            .bind(("album", record_id(TABLE, id)))
            .bind(("name", name))
            .await?;
        let albums: Vec<Album> = result.take(0)?;
        albums
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Album {} not found", id)))
    }

    /// Delete an album and all its photo records in one atomic batch.
    /// The caller removes the photo files afterwards.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(TABLE, id);
        let existing: Option<Album> = self.base.db().select(rid.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE photo WHERE album = $album;
                 DELETE $album;
                 COMMIT TRANSACTION;",
            )
            .bind(("album", rid))
            .await?
            .check()?;

        Ok(true)
    }
}
