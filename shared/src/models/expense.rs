//! Expense Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense group for one event ("Halloween 2025"). `total_amount` and
/// `item_count` are denormalized and adjusted on every item write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseAction {
    pub id: Option<String>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub total_amount: Decimal,
    pub item_count: i64,
}

/// Single cash expense, optionally linked to a gallery photo of the
/// receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: Option<String>,
    pub action_id: String,
    pub description: String,
    pub amount: Decimal,
    pub photo_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}
