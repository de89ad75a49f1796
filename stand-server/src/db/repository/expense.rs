//! Expense Repository
//!
//! Actions carry denormalized `total_amount` / `item_count`; every
//! item write adjusts them in the same transaction so the totals can
//! never drift from the items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{ExpenseAction, ExpenseItem, ExpenseItemUpdate};

const ACTION_TABLE: &str = "expense_action";
const ITEM_TABLE: &str = "expense_item";

#[derive(Clone)]
pub struct ExpenseRepository {
    base: BaseRepository,
}

impl ExpenseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// Create an empty expense action.
    pub async fn create_action(&self, name: &str, created_by: RecordId) -> RepoResult<ExpenseAction> {
        #[derive(Serialize)]
        struct ActionContent {
            name: String,
            created_at: DateTime<Utc>,
            created_by: RecordId,
            total_amount: Decimal,
            item_count: i64,
        }

        let created: Option<ExpenseAction> = self
            .base
            .db()
            .create(ACTION_TABLE)
            .content(ActionContent {
                name: name.to_string(),
                created_at: Utc::now(),
                created_by,
                total_amount: Decimal::ZERO,
                item_count: 0,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create expense action".to_string()))
    }

    /// All actions, newest first.
    pub async fn find_actions(&self) -> RepoResult<Vec<ExpenseAction>> {
        let actions: Vec<ExpenseAction> = self
            .base
            .db()
            .query("SELECT * FROM expense_action ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(actions)
    }

    /// Find action by id
    pub async fn find_action(&self, id: &str) -> RepoResult<Option<ExpenseAction>> {
        let action: Option<ExpenseAction> =
            self.base.db().select(record_id(ACTION_TABLE, id)).await?;
        Ok(action)
    }

    /// Rename an action.
    pub async fn rename_action(&self, id: &str, name: &str) -> RepoResult<ExpenseAction> {
        let name = name.to_string();
        let mut result = self
            .base
            .db()
            .query("UPDATE $action SET name = $name RETURN AFTER")
            .bind(("action", record_id(ACTION_TABLE, id)))
            .bind(("name", name))
            .await?;
        let actions: Vec<ExpenseAction> = result.take(0)?;
        actions
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Expense action {} not found", id)))
    }

    /// Delete an action and all its items in one atomic batch.
    pub async fn delete_action(&self, id: &str) -> RepoResult<bool> {
        let rid = record_id(ACTION_TABLE, id);
        let existing: Option<ExpenseAction> = self.base.db().select(rid.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE expense_item WHERE action = $action;
                 DELETE $action;
                 COMMIT TRANSACTION;",
            )
            .bind(("action", rid))
            .await?
            .check()?;

        Ok(true)
    }

    // ── Items ───────────────────────────────────────────────────────

    /// Add an item and bump the action totals.
    pub async fn add_item(
        &self,
        action: RecordId,
        description: &str,
        amount: Decimal,
        photo: Option<RecordId>,
        created_by: RecordId,
    ) -> RepoResult<ExpenseItem> {
        let parent: Option<ExpenseAction> = self.base.db().select(action.clone()).await?;
        if parent.is_none() {
            return Err(RepoError::NotFound(format!(
                "Expense action {} not found",
                action
            )));
        }

        #[derive(Serialize)]
        struct ItemContent {
            action: RecordId,
            description: String,
            amount: Decimal,
            photo: Option<RecordId>,
            created_at: DateTime<Utc>,
            created_by: RecordId,
        }

        let content = ItemContent {
            action: action.clone(),
            description: description.to_string(),
            amount,
            photo,
            created_at: Utc::now(),
            created_by,
        };

        let mut result = self
            .base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 CREATE expense_item CONTENT $item;
                 UPDATE $action SET total_amount += $amount, item_count += 1;
                 COMMIT TRANSACTION;",
            )
            .bind(("item", content))
            .bind(("action", action))
            .bind(("amount", amount))
            .await?;
        let items: Vec<ExpenseItem> = result.take(0)?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create expense item".to_string()))
    }

    /// Items of one action, newest first.
    pub async fn find_items(&self, action: RecordId) -> RepoResult<Vec<ExpenseItem>> {
        let items: Vec<ExpenseItem> = self
            .base
            .db()
            .query("SELECT * FROM expense_item WHERE action = $action ORDER BY created_at DESC")
            .bind(("action", action))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find item by id
    pub async fn find_item(&self, id: &str) -> RepoResult<Option<ExpenseItem>> {
        let item: Option<ExpenseItem> = self.base.db().select(record_id(ITEM_TABLE, id)).await?;
        Ok(item)
    }

    /// Update an item; an amount change adjusts the action total by
    /// the difference in the same transaction.
    pub async fn update_item(&self, id: &str, data: ExpenseItemUpdate) -> RepoResult<ExpenseItem> {
        let rid = record_id(ITEM_TABLE, id);
        let existing: Option<ExpenseItem> = self.base.db().select(rid.clone()).await?;
        let existing =
            existing.ok_or_else(|| RepoError::NotFound(format!("Expense item {} not found", id)))?;

        let diff = data
            .amount
            .map(|new| new - existing.amount)
            .unwrap_or(Decimal::ZERO);

        #[derive(Serialize)]
        struct ItemMerge {
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            amount: Option<Decimal>,
            #[serde(skip_serializing_if = "Option::is_none")]
            photo: Option<Option<RecordId>>,
        }

        let photo = if data.clear_photo {
            Some(None)
        } else {
            data.photo_id
                .as_deref()
                .map(|p| Some(record_id("photo", p)))
        };

        let merge = ItemMerge {
            description: data.description,
            amount: data.amount,
            photo,
        };

        let mut result = self
            .base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 UPDATE $item MERGE $data RETURN AFTER;
                 UPDATE $action SET total_amount += $diff;
                 COMMIT TRANSACTION;",
            )
            .bind(("item", rid))
            .bind(("data", merge))
            .bind(("action", existing.action))
            .bind(("diff", diff))
            .await?;
        let items: Vec<ExpenseItem> = result.take(0)?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Expense item {} not found", id)))
    }

    /// Delete an item and subtract it from the action totals.
    pub async fn delete_item(&self, id: &str) -> RepoResult<ExpenseItem> {
        let rid = record_id(ITEM_TABLE, id);
        let existing: Option<ExpenseItem> = self.base.db().select(rid.clone()).await?;
        let item =
            existing.ok_or_else(|| RepoError::NotFound(format!("Expense item {} not found", id)))?;

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE $item;
                 UPDATE $action SET total_amount -= $amount, item_count -= 1;
                 COMMIT TRANSACTION;",
            )
            .bind(("item", rid))
            .bind(("action", item.action.clone()))
            .bind(("amount", item.amount))
            .await?
            .check()?;

        Ok(item)
    }
}
