//! Stats API Handlers
//!
//! Thin wrappers over the pure aggregations in `shared::stats`.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::core::ServerState;
use crate::db::repository::{OrderRepository, SettingsRepository};
use crate::utils::AppResult;
use shared::filter::OrderFilters;
use shared::models::Order as SharedOrder;
use shared::stats::{QueueStats, StandStats, queue_stats, stand_stats};

/// GET /api/stats - stand-wide totals and revenue
pub async fn stand(State(state): State<ServerState>) -> AppResult<Json<StandStats>> {
    let orders = all_orders(&state).await?;
    let prices = SettingsRepository::new(state.db.clone()).prices().await?;
    Ok(Json(stand_stats(&orders, &prices)))
}

/// GET /api/stats/queue?status=&payment= - undelivered items over the
/// (optionally filtered) order list
pub async fn queue(
    State(state): State<ServerState>,
    Query(filters): Query<OrderFilters>,
) -> AppResult<Json<QueueStats>> {
    let orders = filters.apply(all_orders(&state).await?);
    Ok(Json(queue_stats(&orders)))
}

async fn all_orders(state: &ServerState) -> AppResult<Vec<SharedOrder>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(repo
        .find_all()
        .await?
        .into_iter()
        .map(|o| o.into())
        .collect())
}
