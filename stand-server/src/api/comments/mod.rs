//! Comments API module
//!
//! Comments are a sub-resource of orders.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Same param name as the orders router so the trees merge cleanly
    Router::new().nest("/api/orders/{id}/comments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{comment_id}/resolve", put(handler::resolve))
        .route("/{comment_id}", axum::routing::delete(handler::delete))
}
