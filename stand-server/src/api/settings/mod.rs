//! Settings API module
//!
//! Recipes, the ingredient master list, prices, and the order
//! counter.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/ingredients",
            get(handler::list_ingredients).post(handler::add_ingredient),
        )
        .route(
            "/ingredients/{name}",
            axum::routing::delete(handler::remove_ingredient),
        )
        .route(
            "/recipes",
            get(handler::list_recipes).post(handler::create_recipe),
        )
        .route(
            "/recipes/{id}",
            put(handler::update_recipe).delete(handler::delete_recipe),
        )
        .route("/recipes/{id}/activate", put(handler::activate_recipe))
        .route("/active-recipe", get(handler::active_recipe))
        .route("/prices", get(handler::get_prices).put(handler::set_prices))
        .route(
            "/order-counter",
            get(handler::get_counter).put(handler::set_counter),
        )
}
