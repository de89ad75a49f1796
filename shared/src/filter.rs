//! Order list filters
//!
//! Two independent three-state filters over the order list. Each
//! cycles inactive -> active -> opposite -> inactive on repeated
//! taps. Filtering is a pure function of the order list and the two
//! states; nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::models::Order;

/// One position of a cyclic filter.
///
/// For the status filter, `Active` keeps orders with undelivered
/// items and `Opposite` keeps fully delivered ones. For the payment
/// filter the same pattern applies to paid items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterState {
    #[default]
    Inactive,
    Active,
    Opposite,
}

impl FilterState {
    /// Next state on tap: inactive -> active -> opposite -> inactive.
    pub fn cycle(self) -> Self {
        match self {
            FilterState::Inactive => FilterState::Active,
            FilterState::Active => FilterState::Opposite,
            FilterState::Opposite => FilterState::Inactive,
        }
    }
}

/// The two filters of the orders screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilters {
    #[serde(default)]
    pub status: FilterState,
    #[serde(default)]
    pub payment: FilterState,
}

impl OrderFilters {
    /// Keep the orders matching both filter states.
    pub fn apply(&self, mut orders: Vec<Order>) -> Vec<Order> {
        orders.retain(|o| self.matches(o));
        orders
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self.status {
            FilterState::Inactive => {}
            FilterState::Active if order.all_delivered() => return false,
            FilterState::Opposite if !order.all_delivered() => return false,
            _ => {}
        }
        match self.payment {
            FilterState::Inactive => {}
            FilterState::Active if order.all_paid() => return false,
            FilterState::Opposite if !order.all_paid() => return false,
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemCustomizations, ItemKind, OrderItem, OrderStatus};
    use chrono::Utc;

    fn item(paid: bool, delivered: bool) -> OrderItem {
        OrderItem {
            item_id: "i".to_string(),
            kind: ItemKind::Burger,
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
    fn test_three_taps_return_to_inactive() {
        let mut state = FilterState::Inactive;
        state = state.cycle();
        assert_eq!(state, FilterState::Active);
        state = state.cycle();
        assert_eq!(state, FilterState::Opposite);
        state = state.cycle();
        assert_eq!(state, FilterState::Inactive);
    }

    #[test]
    fn test_status_filter_splits_on_delivery() {
        let pending = order(vec![item(true, false)]);
        let delivered = order(vec![item(false, true)]);

        let filters = OrderFilters {
            status: FilterState::Active,
            payment: FilterState::Inactive,
        };
        let kept = filters.apply(vec![pending.clone(), delivered.clone()]);
        assert_eq!(kept.len(), 1);
        assert!(!kept[0].all_delivered());

        let filters = OrderFilters {
            status: FilterState::Opposite,
            payment: FilterState::Inactive,
        };
        let kept = filters.apply(vec![pending, delivered]);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].all_delivered());
    }

    #[test]
    fn test_filters_combine_independently() {
        // unpaid + undelivered
        let open = order(vec![item(false, false)]);
        // paid + undelivered
        let paid_pending = order(vec![item(true, false)]);

        let filters = OrderFilters {
            status: FilterState::Active,
            payment: FilterState::Active,
        };
        let kept = filters.apply(vec![open.clone(), paid_pending]);
        assert_eq!(kept.len(), 1);
        assert!(!kept[0].all_paid());

        // Inactive filters keep everything.
        let filters = OrderFilters::default();
        assert_eq!(filters.apply(vec![open]).len(), 1);
    }
}
