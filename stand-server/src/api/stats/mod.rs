//! Stats API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/stats", get(handler::stand))
        .route("/api/stats/queue", get(handler::queue))
}
