//! Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;

use crate::core::ServerState;
use crate::db::models::{CounterUpdate, IngredientAdd, RecipeCreate, RecipeUpdate};
use crate::db::repository::{RecipeRepository, SettingsRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{ActiveRecipe, OrderCounter, PriceSettings, Recipe as SharedRecipe};

// ── Ingredients ─────────────────────────────────────────────────────

/// GET /api/settings/ingredients - the ingredient master list
pub async fn list_ingredients(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let repo = SettingsRepository::new(state.db.clone());
    Ok(Json(repo.ingredients().await?))
}

/// POST /api/settings/ingredients - add an ingredient (idempotent)
pub async fn add_ingredient(
    State(state): State<ServerState>,
    Json(payload): Json<IngredientAdd>,
) -> AppResult<Json<Vec<String>>> {
    let ingredient = payload.ingredient.trim();
    validate_required_text(ingredient, "ingredient", MAX_SHORT_TEXT_LEN)?;

    let repo = SettingsRepository::new(state.db.clone());
    let list = repo.add_ingredient(ingredient).await?;

    state.broadcast_sync("ingredients", "updated", "ingredients", Some(&list));
    Ok(Json(list))
}

/// DELETE /api/settings/ingredients/:name - remove an ingredient
pub async fn remove_ingredient(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let repo = SettingsRepository::new(state.db.clone());
    let list = repo.remove_ingredient(&name).await?;

    state.broadcast_sync("ingredients", "updated", "ingredients", Some(&list));
    Ok(Json(list))
}

// ── Recipes ─────────────────────────────────────────────────────────

/// GET /api/settings/recipes - all recipes
pub async fn list_recipes(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedRecipe>>> {
    let repo = RecipeRepository::new(state.db.clone());
    let recipes = repo.find_all().await?;
    Ok(Json(recipes.into_iter().map(|r| r.into()).collect()))
}

/// POST /api/settings/recipes - create a recipe
pub async fn create_recipe(
    State(state): State<ServerState>,
    Json(payload): Json<RecipeCreate>,
) -> AppResult<Json<SharedRecipe>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_ingredient_list(&payload.ingredients)?;

    let repo = RecipeRepository::new(state.db.clone());
    let recipe = repo.create(payload).await?;

    let api_recipe: SharedRecipe = recipe.into();
    let id = api_recipe.id.clone().unwrap_or_default();
    state.broadcast_sync("recipe", "created", &id, Some(&api_recipe));

    Ok(Json(api_recipe))
}

/// PUT /api/settings/recipes/:id - update name/ingredients
pub async fn update_recipe(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RecipeUpdate>,
) -> AppResult<Json<SharedRecipe>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref ingredients) = payload.ingredients {
        validate_ingredient_list(ingredients)?;
    }

    let repo = RecipeRepository::new(state.db.clone());
    let recipe = repo.update(&id, payload).await?;

    let api_recipe: SharedRecipe = recipe.into();
    state.broadcast_sync("recipe", "updated", &id, Some(&api_recipe));

    Ok(Json(api_recipe))
}

/// DELETE /api/settings/recipes/:id
pub async fn delete_recipe(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RecipeRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>("recipe", "deleted", &id, None);
    }

    Ok(Json(result))
}

/// PUT /api/settings/recipes/:id/activate - make this the active
/// recipe
pub async fn activate_recipe(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedRecipe>> {
    let repo = RecipeRepository::new(state.db.clone());
    let recipe = repo.set_active(&id).await?;

    let api_recipe: SharedRecipe = recipe.into();
    state.broadcast_sync("recipe", "updated", &id, Some(&api_recipe));

    Ok(Json(api_recipe))
}

/// GET /api/settings/active-recipe - the ingredient set offered for
/// burger customization, if a recipe is active
pub async fn active_recipe(
    State(state): State<ServerState>,
) -> AppResult<Json<Option<ActiveRecipe>>> {
    let repo = RecipeRepository::new(state.db.clone());
    let active = repo.active().await?.map(|r| ActiveRecipe {
        recipe_name: r.name,
        ingredients: r.ingredients,
    });
    Ok(Json(active))
}

// ── Prices ──────────────────────────────────────────────────────────

/// GET /api/settings/prices
pub async fn get_prices(State(state): State<ServerState>) -> AppResult<Json<PriceSettings>> {
    let repo = SettingsRepository::new(state.db.clone());
    Ok(Json(repo.prices().await?))
}

/// PUT /api/settings/prices
pub async fn set_prices(
    State(state): State<ServerState>,
    Json(payload): Json<PriceSettings>,
) -> AppResult<Json<PriceSettings>> {
    if payload.burger_price < Decimal::ZERO || payload.fries_price < Decimal::ZERO {
        return Err(AppError::validation("Prices must not be negative"));
    }

    let repo = SettingsRepository::new(state.db.clone());
    let prices = repo.set_prices(payload).await?;

    state.broadcast_sync("prices", "updated", "prices", Some(&prices));
    Ok(Json(prices))
}

// ── Order counter ───────────────────────────────────────────────────

/// GET /api/settings/order-counter
pub async fn get_counter(State(state): State<ServerState>) -> AppResult<Json<OrderCounter>> {
    let repo = SettingsRepository::new(state.db.clone());
    Ok(Json(repo.order_counter().await?))
}

/// PUT /api/settings/order-counter - manually set the counter
pub async fn set_counter(
    State(state): State<ServerState>,
    Json(payload): Json<CounterUpdate>,
) -> AppResult<Json<OrderCounter>> {
    if payload.current_number < 0 {
        return Err(AppError::validation("Counter must not be negative"));
    }

    let repo = SettingsRepository::new(state.db.clone());
    let counter = repo.set_order_counter(payload.current_number).await?;

    state.broadcast_sync("order_counter", "updated", "order_counter", Some(&counter));
    Ok(Json(counter))
}

fn validate_ingredient_list(ingredients: &[String]) -> Result<(), AppError> {
    for ingredient in ingredients {
        validate_required_text(ingredient, "ingredient", MAX_SHORT_TEXT_LEN)?;
    }
    Ok(())
}
