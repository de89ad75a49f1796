//! Expenses API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{ExpenseActionCreate, ExpenseActionRename, ExpenseItemCreate, ExpenseItemUpdate};
use crate::db::repository::{ExpenseRepository, PhotoRepository, record_id};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_positive_amount, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{ExpenseAction as SharedAction, ExpenseItem as SharedItem};

// ── Actions ─────────────────────────────────────────────────────────

/// GET /api/expenses - all expense actions, newest first
pub async fn list_actions(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedAction>>> {
    let repo = ExpenseRepository::new(state.db.clone());
    let actions = repo.find_actions().await?;
    Ok(Json(actions.into_iter().map(|a| a.into()).collect()))
}

/// POST /api/expenses - create an expense action
pub async fn create_action(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ExpenseActionCreate>,
) -> AppResult<Json<SharedAction>> {
    let name = payload.name.trim();
    validate_required_text(name, "name", MAX_NAME_LEN)?;

    let repo = ExpenseRepository::new(state.db.clone());
    let action = repo.create_action(name, record_id("user", &user.id)).await?;

    let api_action: SharedAction = action.into();
    let id = api_action.id.clone().unwrap_or_default();
    state.broadcast_sync("expense_action", "created", &id, Some(&api_action));

    Ok(Json(api_action))
}

/// PUT /api/expenses/:id - rename an action
pub async fn rename_action(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseActionRename>,
) -> AppResult<Json<SharedAction>> {
    let name = payload.name.trim();
    validate_required_text(name, "name", MAX_NAME_LEN)?;

    let repo = ExpenseRepository::new(state.db.clone());
    let action = repo.rename_action(&id, name).await?;

    let api_action: SharedAction = action.into();
    state.broadcast_sync("expense_action", "updated", &id, Some(&api_action));

    Ok(Json(api_action))
}

/// DELETE /api/expenses/:id - delete an action with all its items
pub async fn delete_action(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ExpenseRepository::new(state.db.clone());
    let result = repo.delete_action(&id).await?;

    if result {
        state.broadcast_sync::<()>("expense_action", "deleted", &id, None);
    }

    Ok(Json(result))
}

// ── Items ───────────────────────────────────────────────────────────

/// GET /api/expenses/:id/items - items of one action, newest first
pub async fn list_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<SharedItem>>> {
    let repo = ExpenseRepository::new(state.db.clone());
    let action = repo
        .find_action(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Expense action {} not found", id)))?;
    let action_rid = action
        .id
        .ok_or_else(|| AppError::internal("Expense action record has no id"))?;

    let items = repo.find_items(action_rid).await?;
    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// POST /api/expenses/:id/items - add an item
pub async fn add_item(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseItemCreate>,
) -> AppResult<Json<SharedItem>> {
    let description = payload.description.trim();
    validate_required_text(description, "description", MAX_NOTE_LEN)?;
    validate_positive_amount(payload.amount, "amount")?;

    let photo = match payload.photo_id.as_deref() {
        Some(photo_id) => Some(require_photo(&state, photo_id).await?),
        None => None,
    };

    let repo = ExpenseRepository::new(state.db.clone());
    let item = repo
        .add_item(
            record_id("expense_action", &id),
            description,
            payload.amount,
            photo,
            record_id("user", &user.id),
        )
        .await?;

    let api_item: SharedItem = item.into();
    let item_id = api_item.id.clone().unwrap_or_default();
    state.broadcast_sync("expense_item", "created", &item_id, Some(&api_item));
    state.broadcast_sync::<()>("expense_action", "updated", &id, None);

    Ok(Json(api_item))
}

/// PUT /api/expenses/:id/items/:item_id - update an item
pub async fn update_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<ExpenseItemUpdate>,
) -> AppResult<Json<SharedItem>> {
    if let Some(ref description) = payload.description {
        validate_required_text(description, "description", MAX_NOTE_LEN)?;
    }
    if let Some(amount) = payload.amount {
        validate_positive_amount(amount, "amount")?;
    }
    if let Some(photo_id) = payload.photo_id.as_deref() {
        require_photo(&state, photo_id).await?;
    }

    let repo = ExpenseRepository::new(state.db.clone());
    require_item_in_action(&repo, &id, &item_id).await?;
    let item = repo.update_item(&item_id, payload).await?;

    let api_item: SharedItem = item.into();
    state.broadcast_sync("expense_item", "updated", &item_id, Some(&api_item));
    state.broadcast_sync::<()>("expense_action", "updated", &id, None);

    Ok(Json(api_item))
}

/// DELETE /api/expenses/:id/items/:item_id - delete an item
pub async fn delete_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let repo = ExpenseRepository::new(state.db.clone());
    require_item_in_action(&repo, &id, &item_id).await?;
    repo.delete_item(&item_id).await?;

    state.broadcast_sync::<()>("expense_item", "deleted", &item_id, None);
    state.broadcast_sync::<()>("expense_action", "updated", &id, None);

    Ok(Json(true))
}

/// Reject items addressed through the wrong action.
async fn require_item_in_action(
    repo: &ExpenseRepository,
    action_id: &str,
    item_id: &str,
) -> Result<(), AppError> {
    let item = repo
        .find_item(item_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Expense item {} not found", item_id)))?;
    if item.action != record_id("expense_action", action_id) {
        return Err(AppError::not_found(format!(
            "Expense item {} not found",
            item_id
        )));
    }
    Ok(())
}

async fn require_photo(
    state: &ServerState,
    photo_id: &str,
) -> Result<surrealdb::RecordId, AppError> {
    let repo = PhotoRepository::new(state.db.clone());
    let photo = repo
        .find_by_id(photo_id)
        .await?
        .ok_or_else(|| AppError::validation(format!("Photo {} not found", photo_id)))?;
    photo
        .id
        .ok_or_else(|| AppError::internal("Photo record has no id"))
}
