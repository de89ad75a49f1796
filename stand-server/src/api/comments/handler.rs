//! Comments API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::CommentCreate;
use crate::db::repository::{CommentRepository, OrderRepository, record_id};
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::Comment as SharedComment;

const RESOURCE: &str = "comment";

/// GET /api/orders/:order_id/comments - thread of one order
pub async fn list(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<SharedComment>>> {
    let order = require_order(&state, &order_id).await?;
    let repo = CommentRepository::new(state.db.clone());
    let comments = repo.find_by_order(order).await?;
    Ok(Json(comments.into_iter().map(|c| c.into()).collect()))
}

/// POST /api/orders/:order_id/comments - add a comment
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(order_id): Path<String>,
    Json(payload): Json<CommentCreate>,
) -> AppResult<Json<SharedComment>> {
    let text = payload.text.trim();
    validate_required_text(text, "comment", MAX_NOTE_LEN)?;

    let order = require_order(&state, &order_id).await?;
    let repo = CommentRepository::new(state.db.clone());
    let comment = repo
        .create(order, text, record_id("user", &user.id), &user.nickname)
        .await?;

    let api_comment: SharedComment = comment.into();
    let id = api_comment.id.clone().unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&api_comment));

    Ok(Json(api_comment))
}

/// PUT /api/orders/:order_id/comments/:comment_id/resolve
pub async fn resolve(
    State(state): State<ServerState>,
    Path((order_id, comment_id)): Path<(String, String)>,
) -> AppResult<Json<SharedComment>> {
    let order = require_order(&state, &order_id).await?;
    let repo = CommentRepository::new(state.db.clone());
    let comment = repo.resolve(order, &comment_id).await?;

    let api_comment: SharedComment = comment.into();
    state.broadcast_sync(RESOURCE, "updated", &comment_id, Some(&api_comment));

    Ok(Json(api_comment))
}

/// DELETE /api/orders/:order_id/comments/:comment_id
pub async fn delete(
    State(state): State<ServerState>,
    Path((order_id, comment_id)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let order = require_order(&state, &order_id).await?;
    let repo = CommentRepository::new(state.db.clone());
    let result = repo.delete(order, &comment_id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &comment_id, None);
    }

    Ok(Json(result))
}

/// Resolve the parent order or 404.
async fn require_order(
    state: &ServerState,
    order_id: &str,
) -> Result<surrealdb::RecordId, AppError> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;
    order
        .id
        .ok_or_else(|| AppError::internal("Order record has no id"))
}
