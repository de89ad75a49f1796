//! Comment Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Comment;

const TABLE: &str = "comment";

#[derive(Clone)]
pub struct CommentRepository {
    base: BaseRepository,
}

impl CommentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Add a comment to an order.
    pub async fn create(
        &self,
        order: RecordId,
        text: &str,
        author: RecordId,
        author_nickname: &str,
    ) -> RepoResult<Comment> {
        #[derive(Serialize)]
        struct CommentContent {
            order_id: RecordId,
            text: String,
            author: RecordId,
            author_nickname: String,
            is_resolved: bool,
            created_at: DateTime<Utc>,
        }

        let created: Option<Comment> = self
            .base
            .db()
            .create(TABLE)
            .content(CommentContent {
                order_id: order,
                text: text.to_string(),
                author,
                author_nickname: author_nickname.to_string(),
                is_resolved: false,
                created_at: Utc::now(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create comment".to_string()))
    }

    /// Comments of one order, oldest first.
    pub async fn find_by_order(&self, order: RecordId) -> RepoResult<Vec<Comment>> {
        let comments: Vec<Comment> = self
            .base
            .db()
            .query("SELECT * FROM comment WHERE order_id = $order_id ORDER BY created_at ASC")
            .bind(("order_id", order))
            .await?
            .take(0)?;
        Ok(comments)
    }

    /// Mark a comment of the given order as resolved.
    pub async fn resolve(&self, order: RecordId, comment_id: &str) -> RepoResult<Comment> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE comment SET is_resolved = true
                 WHERE id = $comment AND order_id = $order_id RETURN AFTER",
            )
            .bind(("comment", record_id(TABLE, comment_id)))
            .bind(("order_id", order))
            .await?;
        let comments: Vec<Comment> = result.take(0)?;
        comments
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Comment {} not found", comment_id)))
    }

    /// Delete a comment of the given order.
    pub async fn delete(&self, order: RecordId, comment_id: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("DELETE comment WHERE id = $comment AND order_id = $order_id RETURN BEFORE")
            .bind(("comment", record_id(TABLE, comment_id)))
            .bind(("order_id", order))
            .await?;
        let deleted: Vec<Comment> = result.take(0)?;
        Ok(!deleted.is_empty())
    }
}
