//! Expense Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Expense action record ("Halloween 2025"). `total_amount` and
/// `item_count` are adjusted atomically alongside every item write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseAction {
    pub id: Option<RecordId>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: RecordId,
    pub total_amount: Decimal,
    pub item_count: i64,
}

/// Expense item record, linked to its action and optionally to a
/// gallery photo of the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: Option<RecordId>,
    pub action: RecordId,
    pub description: String,
    pub amount: Decimal,
    pub photo: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub created_by: RecordId,
}

// =============================================================================
// API Request Types
// =============================================================================

/// Create expense action payload
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseActionCreate {
    pub name: String,
}

/// Rename expense action payload
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseActionRename {
    pub name: String,
}

/// Add expense item payload
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseItemCreate {
    pub description: String,
    pub amount: Decimal,
    pub photo_id: Option<String>,
}

/// Update expense item payload. `photo_id` replaces the photo link
/// when set; `clear_photo` removes it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseItemUpdate {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub photo_id: Option<String>,
    #[serde(default)]
    pub clear_photo: bool,
}
