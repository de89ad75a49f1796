//! Albums API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/albums", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::rename).delete(handler::delete))
        .route(
            "/{id}/photos",
            get(handler::list_photos).post(handler::upload_photo),
        )
}
