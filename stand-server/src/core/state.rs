use std::sync::Arc;

use dashmap::DashMap;
use shared::message::{BusMessage, SyncPayload};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::message::MessageBus;
use crate::storage::PhotoStore;

/// Per-resource sync version counters
///
/// Lock-free via DashMap. Each resource type keeps its own
/// monotonically increasing version so clients receiving sync events
/// can discard stale snapshots.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Increment the version of a resource and return the new value.
    /// Unknown resources start at 0 (first increment returns 1).
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Server state - shared handles to every service
///
/// Cloning is shallow (Arc/handle clones) and cheap; one instance is
/// shared across all request handlers via axum state.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Broadcast bus feeding the events WebSocket
    pub message_bus: Arc<MessageBus>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// Photo blob storage
    pub photos: PhotoStore,
    /// Per-resource sync versions for broadcast_sync
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        message_bus: Arc<MessageBus>,
        jwt_service: Arc<JwtService>,
        photos: PhotoStore,
        resource_versions: Arc<ResourceVersions>,
    ) -> Self {
        Self {
            config,
            db,
            message_bus,
            jwt_service,
            photos,
            resource_versions,
        }
    }

    /// Initialize the server state: work directory structure, the
    /// embedded database under `work_dir/database`, and the services.
    ///
    /// # Panics
    ///
    /// Panics when the work directory or database cannot be opened;
    /// there is nothing useful the server can do without them.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("stand.db");
        let db = DbService::open(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let message_bus = Arc::new(MessageBus::new());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let photos = PhotoStore::new(config.photos_dir());
        let resource_versions = Arc::new(ResourceVersions::new());

        Self::new(
            config.clone(),
            db,
            message_bus,
            jwt_service,
            photos,
            resource_versions,
        )
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Broadcast a sync notification to all connected clients.
    ///
    /// The version is auto-incremented per resource. A failed publish
    /// (e.g. no connected clients) is not an error.
    ///
    /// # Arguments
    /// - `resource`: resource type ("order", "album", "prices", ...)
    /// - `action`: "created" | "updated" | "deleted"
    /// - `id`: record id
    /// - `data`: the changed record, omitted for deletes
    pub fn broadcast_sync<T: serde::Serialize>(
        &self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
    ) {
        let version = self.resource_versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        let _ = self.message_bus.publish(BusMessage::sync(&payload));
    }
}
