//! Burger ingredient customization
//!
//! Every ingredient of the active recipe carries a tri-state quantity:
//! removed (0x), normal (1x), doubled (2x). Repeated toggling cycles
//! 1x -> 0x -> 2x -> 1x. The confirmed state is stored as two disjoint
//! string sets on the item (`removed` / `doubled`); absence from both
//! means normal quantity.

use serde::{Deserialize, Serialize};

use crate::models::ItemCustomizations;

/// Tri-state quantity of one ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientLevel {
    Removed,
    Normal,
    Doubled,
}

impl IngredientLevel {
    /// Next state on toggle: 1x -> 0x -> 2x -> 1x.
    pub fn cycle(self) -> Self {
        match self {
            IngredientLevel::Normal => IngredientLevel::Removed,
            IngredientLevel::Removed => IngredientLevel::Doubled,
            IngredientLevel::Doubled => IngredientLevel::Normal,
        }
    }

    /// Multiplier shown next to the ingredient (0, 1 or 2).
    pub fn multiplier(self) -> u8 {
        match self {
            IngredientLevel::Removed => 0,
            IngredientLevel::Normal => 1,
            IngredientLevel::Doubled => 2,
        }
    }
}

/// Current level of one ingredient in a confirmed customization.
pub fn level_of(custom: &ItemCustomizations, ingredient: &str) -> IngredientLevel {
    if custom.removed.iter().any(|i| i == ingredient) {
        IngredientLevel::Removed
    } else if custom.doubled.iter().any(|i| i == ingredient) {
        IngredientLevel::Doubled
    } else {
        IngredientLevel::Normal
    }
}

/// Set one ingredient to the given level, keeping the sets disjoint.
pub fn set_level(custom: &mut ItemCustomizations, ingredient: &str, level: IngredientLevel) {
    custom.removed.retain(|i| i != ingredient);
    custom.doubled.retain(|i| i != ingredient);
    match level {
        IngredientLevel::Removed => custom.removed.push(ingredient.to_string()),
        IngredientLevel::Doubled => custom.doubled.push(ingredient.to_string()),
        IngredientLevel::Normal => {}
    }
}

/// Toggle one ingredient to its next state in the cycle.
pub fn toggle(custom: &mut ItemCustomizations, ingredient: &str) {
    let next = level_of(custom, ingredient).cycle();
    set_level(custom, ingredient, next);
}

/// Expand a confirmed customization into per-ingredient levels for the
/// active recipe, in recipe order. Ingredients referenced by the
/// customization but absent from the recipe are ignored.
pub fn levels_for(recipe: &[String], custom: &ItemCustomizations) -> Vec<(String, IngredientLevel)> {
    recipe
        .iter()
        .map(|ing| (ing.clone(), level_of(custom, ing)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(IngredientLevel::Normal.cycle(), IngredientLevel::Removed);
        assert_eq!(IngredientLevel::Removed.cycle(), IngredientLevel::Doubled);
        assert_eq!(IngredientLevel::Doubled.cycle(), IngredientLevel::Normal);
    }

    #[test]
    fn test_three_toggles_return_to_start() {
        for start in [
            IngredientLevel::Removed,
            IngredientLevel::Normal,
            IngredientLevel::Doubled,
        ] {
            assert_eq!(start.cycle().cycle().cycle(), start);
        }

        let mut custom = ItemCustomizations::default();
        toggle(&mut custom, "onion");
        toggle(&mut custom, "onion");
        toggle(&mut custom, "onion");
        assert_eq!(level_of(&custom, "onion"), IngredientLevel::Normal);
        assert!(custom.is_empty());
    }

    #[test]
    fn test_sets_stay_disjoint() {
        let mut custom = ItemCustomizations::default();
        set_level(&mut custom, "cheese", IngredientLevel::Removed);
        set_level(&mut custom, "cheese", IngredientLevel::Doubled);
        assert!(!custom.removed.contains(&"cheese".to_string()));
        assert_eq!(custom.doubled, vec!["cheese".to_string()]);
    }

    #[test]
    fn test_levels_follow_recipe_order() {
        let recipe = vec![
            "bun".to_string(),
            "patty".to_string(),
            "pickles".to_string(),
        ];
        let custom = ItemCustomizations {
            removed: vec!["pickles".to_string()],
            doubled: vec!["patty".to_string()],
        };

        let levels = levels_for(&recipe, &custom);
        assert_eq!(
            levels,
            vec![
                ("bun".to_string(), IngredientLevel::Normal),
                ("patty".to_string(), IngredientLevel::Doubled),
                ("pickles".to_string(), IngredientLevel::Removed),
            ]
        );
    }
}
