//! Database Module
//!
//! Embedded SurrealDB. The document store provides everything the app
//! needs from its persistence collaborator: filtered and ordered
//! selects, atomic field increments for the denormalized counters,
//! and multi-statement transactions for cascading deletes.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "stand";
const DATABASE: &str = "stand";

/// Database service - opens the embedded engine
pub struct DbService;

impl DbService {
    /// Open the on-disk database at the given path.
    pub async fn open(path: &str) -> Result<Surreal<Db>, AppError> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database ready at {path}");
        Ok(db)
    }

    /// Open an in-memory database. Used by tests.
    pub async fn open_in_memory() -> Result<Surreal<Db>, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        Ok(db)
    }
}
