//! Derived order statistics
//!
//! Pure aggregation over an order list: the kitchen queue (what still
//! has to be handed out) and the stand-wide totals with revenue.
//! Revenue is a plain sum of unit prices by kind; no discounts, no
//! taxes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ItemKind, Order, OrderItem, PriceSettings};

/// Items still waiting to be handed out, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    pub burgers: u32,
    pub fries: u32,
}

/// Count undelivered items across the given orders.
pub fn queue_stats(orders: &[Order]) -> QueueStats {
    let mut stats = QueueStats::default();
    for order in orders {
        for item in &order.items {
            if item.is_delivered {
                continue;
            }
            match item.kind {
                ItemKind::Burger => stats.burgers += 1,
                ItemKind::Fries => stats.fries += 1,
            }
        }
    }
    stats
}

/// Stand-wide item and revenue totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandStats {
    pub total_burgers: u32,
    pub total_fries: u32,
    pub delivered_burgers: u32,
    pub delivered_fries: u32,
    pub paid_burgers: u32,
    pub paid_fries: u32,
    pub remaining_burgers: u32,
    pub remaining_fries: u32,
    pub total_revenue: Decimal,
    pub paid_revenue: Decimal,
    pub unpaid_revenue: Decimal,
}

/// Aggregate all orders with the configured unit prices.
pub fn stand_stats(orders: &[Order], prices: &PriceSettings) -> StandStats {
    let mut stats = StandStats::default();

    for order in orders {
        for item in &order.items {
            let unit = match item.kind {
                ItemKind::Burger => {
                    stats.total_burgers += 1;
                    if item.is_delivered {
                        stats.delivered_burgers += 1;
                    }
                    if item.is_paid {
                        stats.paid_burgers += 1;
                    }
                    prices.burger_price
                }
                ItemKind::Fries => {
                    stats.total_fries += 1;
                    if item.is_delivered {
                        stats.delivered_fries += 1;
                    }
                    if item.is_paid {
                        stats.paid_fries += 1;
                    }
                    prices.fries_price
                }
            };
            stats.total_revenue += unit;
            if item.is_paid {
                stats.paid_revenue += unit;
            }
        }
    }

    stats.remaining_burgers = stats.total_burgers - stats.delivered_burgers;
    stats.remaining_fries = stats.total_fries - stats.delivered_fries;
    stats.unpaid_revenue = stats.total_revenue - stats.paid_revenue;
    stats
}

/// Price of one order at the given unit prices.
pub fn order_total(items: &[OrderItem], prices: &PriceSettings) -> Decimal {
    items
        .iter()
        .map(|item| match item.kind {
            ItemKind::Burger => prices.burger_price,
            ItemKind::Fries => prices.fries_price,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemCustomizations, OrderStatus};
    use chrono::Utc;

    fn item(kind: ItemKind, paid: bool, delivered: bool) -> OrderItem {
        OrderItem {
            item_id: "i".to_string(),
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
            created_by: "user:t".to_string(),
            status: OrderStatus::Waiting,
            items,
        }
    }

    #[test]
    fn test_order_total() {
        let prices = PriceSettings::default();
        let items = vec![
            item(ItemKind::Burger, false, false),
            item(ItemKind::Burger, false, false),
            item(ItemKind::Fries, false, false),
        ];
        assert_eq!(order_total(&items, &prices), Decimal::from(12));
    }

    #[test]
    fn test_queue_counts_only_undelivered() {
        let orders = vec![
            order(vec![
                item(ItemKind::Burger, false, false),
                item(ItemKind::Burger, true, true),
                item(ItemKind::Fries, false, false),
            ]),
            order(vec![item(ItemKind::Fries, true, true)]),
        ];
        let stats = queue_stats(&orders);
        assert_eq!(stats.burgers, 1);
        assert_eq!(stats.fries, 1);
    }

    #[test]
    fn test_stand_stats_revenue_split() {
        let prices = PriceSettings::default();
        let orders = vec![order(vec![
            item(ItemKind::Burger, true, true),
            item(ItemKind::Burger, false, false),
            item(ItemKind::Fries, true, false),
        ])];

        let stats = stand_stats(&orders, &prices);
        assert_eq!(stats.total_burgers, 2);
        assert_eq!(stats.total_fries, 1);
        assert_eq!(stats.delivered_burgers, 1);
        assert_eq!(stats.remaining_burgers, 1);
        assert_eq!(stats.remaining_fries, 1);
        assert_eq!(stats.paid_burgers, 1);
        assert_eq!(stats.paid_fries, 1);
        assert_eq!(stats.total_revenue, Decimal::from(12));
        assert_eq!(stats.paid_revenue, Decimal::from(7));
        assert_eq!(stats.unpaid_revenue, Decimal::from(5));
    }
}
