//! Repository Module
//!
//! One repository per table, mapping API calls to SurrealDB
//! operations. Cascading deletes and denormalized-counter updates run
//! as multi-statement transactions so they commit or fail as a unit.

pub mod album;
pub mod comment;
pub mod expense;
pub mod order;
pub mod photo;
pub mod recipe;
pub mod settings;
pub mod user;

// Re-exports
pub use album::AlbumRepository;
pub use comment::CommentRepository;
pub use expense::ExpenseRepository;
pub use order::OrderRepository;
pub use photo::PhotoRepository;
pub use recipe::RecipeRepository;
pub use settings::SettingsRepository;
pub use user::UserRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Resolve an API-supplied id (either a bare key or the full
/// "table:key" form) into a RecordId of the given table.
pub fn record_id(table: &str, id: &str) -> RecordId {
    if let Ok(rid) = id.parse::<RecordId>()
        && rid.table() == table
    {
        return rid;
    }
    RecordId::from_table_key(table, id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
