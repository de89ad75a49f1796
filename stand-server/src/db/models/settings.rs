//! Settings Models
//!
//! Recipes are a table of their own; the ingredient master list, the
//! prices and the order counter live as singleton documents in the
//! `setting` table (`setting:ingredients`, `setting:prices`,
//! `setting:order_counter`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Recipe record. At most one row has `is_active = true`; activation
/// flips the flags in a single transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<RecordId>,
    pub name: String,
    pub ingredients: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// The `setting:ingredients` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientsDoc {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

// =============================================================================
// API Request Types
// =============================================================================

/// Create recipe payload
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeCreate {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Update recipe payload
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

/// Add ingredient payload
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientAdd {
    pub ingredient: String,
}

/// Set order counter payload
#[derive(Debug, Clone, Deserialize)]
pub struct CounterUpdate {
    pub current_number: i64,
}
