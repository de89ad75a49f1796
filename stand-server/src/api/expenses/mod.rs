//! Expenses API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/expenses", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_actions).post(handler::create_action))
        .route(
            "/{id}",
            put(handler::rename_action).delete(handler::delete_action),
        )
        .route(
            "/{id}/items",
            get(handler::list_items).post(handler::add_item),
        )
        .route(
            "/{id}/items/{item_id}",
            put(handler::update_item).delete(handler::delete_item),
        )
}
