//! Orders API Handlers
//!
//! The item list is always replaced as a whole; the repository
//! recomputes the waiting -> completed transition on every item
//! update. Two clients toggling items at the same time race with
//! last-writer-wins, which the stand accepts.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{ItemsUpdate, OrderCreate, OrderItemInput, PriorityUpdate};
use crate::db::repository::{CommentRepository, OrderRepository, record_id};
use crate::utils::validation::{MAX_ITEMS_PER_ORDER, MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};
use shared::filter::OrderFilters;
use shared::models::{ItemCustomizations, ItemKind, Order as SharedOrder, OrderItem};

const RESOURCE: &str = "order";

/// GET /api/orders?status=&payment= - list orders
///
/// Sorted by priority (desc) then creation time, optionally narrowed
/// by the two cyclic filters.
pub async fn list(
    State(state): State<ServerState>,
    Query(filters): Query<OrderFilters>,
) -> AppResult<Json<Vec<SharedOrder>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders: Vec<SharedOrder> = repo
        .find_all()
        .await?
        .into_iter()
        .map(|o| o.into())
        .collect();
    Ok(Json(filters.apply(orders)))
}

/// POST /api/orders - create an order
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<SharedOrder>> {
    validate_optional_text(&payload.initial_comment, "comment", MAX_NOTE_LEN)?;
    let items = build_items(payload.items)?;

    let repo = OrderRepository::new(state.db.clone());
    let author = record_id("user", &user.id);
    let order = repo
        .create(author.clone(), items, payload.priority.unwrap_or(1))
        .await?;

    // The initial comment rides along with order creation
    if let Some(text) = payload.initial_comment.as_deref().map(str::trim)
        && !text.is_empty()
        && let Some(order_id) = order.id.clone()
    {
        CommentRepository::new(state.db.clone())
            .create(order_id, text, author, &user.nickname)
            .await?;
    }

    let api_order: SharedOrder = order.into();
    let id = api_order.id.clone().unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&api_order));

    tracing::info!(order_number = api_order.order_number, "Order created");
    Ok(Json(api_order))
}

/// GET /api/orders/:id - single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedOrder>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order.into()))
}

/// PUT /api/orders/:id/priority - adjust fulfillment priority
pub async fn update_priority(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PriorityUpdate>,
) -> AppResult<Json<SharedOrder>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update_priority(&id, payload.priority).await?;

    let api_order: SharedOrder = order.into();
    state.broadcast_sync(RESOURCE, "updated", &id, Some(&api_order));

    Ok(Json(api_order))
}

/// PUT /api/orders/:id/items - replace the item list
pub async fn update_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ItemsUpdate>,
) -> AppResult<Json<SharedOrder>> {
    let items = check_items(payload.items)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update_items(&id, items).await?;

    let api_order: SharedOrder = order.into();
    state.broadcast_sync(RESOURCE, "updated", &id, Some(&api_order));

    Ok(Json(api_order))
}

/// DELETE /api/orders/:id - delete an order with its comments
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = OrderRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}

// ── Item validation ─────────────────────────────────────────────────

/// Turn creation inputs into fresh items: server-assigned ids, unpaid
/// and undelivered.
fn build_items(inputs: Vec<OrderItemInput>) -> Result<Vec<OrderItem>, AppError> {
    if inputs.is_empty() {
        return Err(AppError::validation("Order must contain at least one item"));
    }
    if inputs.len() > MAX_ITEMS_PER_ORDER {
        return Err(AppError::validation(format!(
            "Order has too many items (max {MAX_ITEMS_PER_ORDER})"
        )));
    }

    inputs
        .into_iter()
        .map(|input| {
            let customizations =
                normalize_customizations(input.kind, input.customizations.unwrap_or_default())?;
            Ok(OrderItem {
                item_id: Uuid::new_v4().to_string(),
                kind: input.kind,
                customizations,
                is_paid: false,
                is_delivered: false,
            })
        })
        .collect()
}

/// Validate a full replacement item list.
fn check_items(items: Vec<OrderItem>) -> Result<Vec<OrderItem>, AppError> {
    if items.is_empty() {
        return Err(AppError::validation("Order must contain at least one item"));
    }
    if items.len() > MAX_ITEMS_PER_ORDER {
        return Err(AppError::validation(format!(
            "Order has too many items (max {MAX_ITEMS_PER_ORDER})"
        )));
    }

    items
        .into_iter()
        .map(|mut item| {
            if item.item_id.trim().is_empty() {
                return Err(AppError::validation("Item id must not be empty"));
            }
            item.customizations = normalize_customizations(item.kind, item.customizations)?;
            Ok(item)
        })
        .collect()
}

/// Fries carry no customization; burger customizations must keep the
/// removed/doubled sets disjoint.
fn normalize_customizations(
    kind: ItemKind,
    customizations: ItemCustomizations,
) -> Result<ItemCustomizations, AppError> {
    match kind {
        ItemKind::Fries => Ok(ItemCustomizations::default()),
        ItemKind::Burger => {
            if customizations
                .removed
                .iter()
                .any(|i| customizations.doubled.contains(i))
            {
                return Err(AppError::validation(
                    "An ingredient cannot be both removed and doubled",
                ));
            }
            Ok(customizations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fries_customizations_are_dropped() {
        let custom = ItemCustomizations {
            removed: vec!["tomato".to_string()],
            doubled: vec![],
        };
        let normalized = normalize_customizations(ItemKind::Fries, custom).unwrap();
        assert!(normalized.is_empty());
    }

    #[test]
    fn test_overlapping_sets_rejected() {
        let custom = ItemCustomizations {
            removed: vec!["cheese".to_string()],
            doubled: vec!["cheese".to_string()],
        };
        assert!(normalize_customizations(ItemKind::Burger, custom).is_err());
    }

    #[test]
    fn test_build_items_assigns_ids() {
        let items = build_items(vec![
            OrderItemInput {
                kind: ItemKind::Burger,
                customizations: None,
            },
            OrderItemInput {
                kind: ItemKind::Fries,
                customizations: None,
            },
        ])
        .unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| !i.item_id.is_empty()));
        assert!(items.iter().all(|i| !i.is_paid && !i.is_delivered));
        assert_ne!(items[0].item_id, items[1].item_id);

        assert!(build_items(vec![]).is_err());
    }
}
