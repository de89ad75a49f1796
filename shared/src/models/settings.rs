//! Settings Models
//!
//! Recipes, the ingredient master list, prices, and the order counter.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named, ordered ingredient set. At most one recipe is active at a
/// time; the active one defines the ingredients offered when
/// customizing a burger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<String>,
    pub name: String,
    pub ingredients: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// The currently active recipe, as offered to the customization UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveRecipe {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
}

/// Per-kind unit prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSettings {
    pub burger_price: Decimal,
    pub fries_price: Decimal,
}

impl Default for PriceSettings {
    fn default() -> Self {
        Self {
            burger_price: Decimal::from(5),
            fries_price: Decimal::from(2),
        }
    }
}

/// Monotonic order-number counter, readable and manually settable
/// (season resets).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrderCounter {
    pub current_number: i64,
}
