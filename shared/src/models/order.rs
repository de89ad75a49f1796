//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of item a line in an order is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Burger,
    Fries,
}

/// Order status. `Completed` is terminal; there is no reopening path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Waiting,
    Completed,
}

/// Per-item ingredient adjustments relative to the active recipe.
///
/// The two sets are disjoint; an ingredient absent from both is at its
/// normal quantity. Fries carry an empty customization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCustomizations {
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub doubled: Vec<String>,
}

impl ItemCustomizations {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.doubled.is_empty()
    }
}

/// One line of an order, independently payable and deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub customizations: ItemCustomizations,
    pub is_paid: bool,
    pub is_delivered: bool,
}

impl OrderItem {
    /// Paid and delivered; nothing left to do for this item.
    pub fn is_done(&self) -> bool {
        self.is_paid && self.is_delivered
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
    /// Monotonic number assigned from the order counter.
    pub order_number: i64,
    /// User-adjustable fulfillment priority, highest first.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    /// Stamped once, when the order transitions to `Completed`.
    pub completed_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn all_delivered(&self) -> bool {
        self.items.iter().all(|i| i.is_delivered)
    }

    pub fn all_paid(&self) -> bool {
        self.items.iter().all(|i| i.is_paid)
    }

    /// Every item is both paid and delivered.
    pub fn is_fulfilled(&self) -> bool {
        self.items.iter().all(OrderItem::is_done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ItemKind, paid: bool, delivered: bool) -> OrderItem {
        OrderItem {
            item_id: "i1".to_string(),
            kind,
            customizations: ItemCustomizations::default(),
            is_paid: paid,
            is_delivered: delivered,
        }
    }

    fn order(items: Vec<OrderItem>) -> Order {
        Order {
            id: None,
            order_number: 1,
            priority: 1,
            created_at: Utc::now(),
            completed_at: None,
            created_by: "user:test".to_string(),
            status: OrderStatus::Waiting,
            items,
        }
    }

    #[test]
    fn test_fulfilled_requires_paid_and_delivered() {
        let o = order(vec![
            item(ItemKind::Burger, true, true),
            item(ItemKind::Fries, true, false),
        ]);
        assert!(!o.is_fulfilled());
        assert!(o.all_paid());
        assert!(!o.all_delivered());

        let o = order(vec![
            item(ItemKind::Burger, true, true),
            item(ItemKind::Fries, true, true),
        ]);
        assert!(o.is_fulfilled());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Waiting).unwrap();
        assert_eq!(json, "\"waiting\"");
        let json = serde_json::to_string(&ItemKind::Burger).unwrap();
        assert_eq!(json, "\"burger\"");
    }
}
