//! Order Repository
//!
//! Order numbers come from the `setting:order_counter` document via an
//! atomic increment. The waiting -> completed transition is recomputed
//! on every item update and is edge-triggered: the completion
//! timestamp is stamped once and never altered afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{OrderCounter, OrderItem, OrderStatus};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Order;

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Atomically increment the order counter and return the new
    /// number. The counter document is created on first use.
    pub async fn next_order_number(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("UPSERT setting:order_counter SET current_number += 1 RETURN AFTER")
            .await?;
        let counters: Vec<OrderCounter> = result.take(0)?;
        counters
            .into_iter()
            .next()
            .map(|c| c.current_number)
            .ok_or_else(|| RepoError::Database("Order counter returned no value".to_string()))
    }

    /// Create a new order in `waiting` state.
    pub async fn create(
        &self,
        created_by: RecordId,
        items: Vec<OrderItem>,
        priority: i32,
    ) -> RepoResult<Order> {
        let order_number = self.next_order_number().await?;

        #[derive(Serialize)]
        struct OrderContent {
            order_number: i64,
            priority: i32,
            created_at: DateTime<Utc>,
            created_by: RecordId,
            status: OrderStatus,
            items: Vec<OrderItem>,
        }

        let created: Option<Order> = self
            .base
            .db()
            .create(TABLE)
            .content(OrderContent {
                order_number,
                priority,
                created_at: Utc::now(),
                created_by,
                status: OrderStatus::Waiting,
                items,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// All orders, highest priority first, oldest first within the
    /// same priority.
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY priority DESC, created_at ASC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(order)
    }

    /// Adjust the fulfillment priority.
    pub async fn update_priority(&self, id: &str, priority: i32) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $order SET priority = $priority RETURN AFTER")
            .bind(("order", record_id(TABLE, id)))
            .bind(("priority", priority))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Replace the item list and recompute the order status.
    ///
    /// When every item is paid and delivered and the order is still
    /// waiting, it transitions to `completed` and `completed_at` is
    /// stamped. The transition is edge-triggered: a completed order
    /// keeps its status and timestamp whatever the new items say.
    pub async fn update_items(&self, id: &str, items: Vec<OrderItem>) -> RepoResult<Order> {
        let rid = record_id(TABLE, id);
        let existing: Option<Order> = self.base.db().select(rid.clone()).await?;
        let existing =
            existing.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        let completes = existing.status == OrderStatus::Waiting
            && items.iter().all(OrderItem::is_done);

        #[derive(Serialize)]
        struct ItemsMerge {
            items: Vec<OrderItem>,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<OrderStatus>,
            #[serde(skip_serializing_if = "Option::is_none")]
            completed_at: Option<DateTime<Utc>>,
        }

        let merge = ItemsMerge {
            items,
            status: completes.then_some(OrderStatus::Completed),
            completed_at: completes.then(Utc::now),
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE $order MERGE $data RETURN AFTER")
            .bind(("order", rid))
            .bind(("data", merge))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Delete an order and all its comments in one atomic batch.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(TABLE, id);
        let existing: Option<Order> = self.base.db().select(rid.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE comment WHERE order_id = $order;
                 DELETE $order;
                 COMMIT TRANSACTION;",
            )
            .bind(("order", rid))
            .await?
            .check()?;

        Ok(true)
    }
}
