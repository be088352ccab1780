use axum::{routing::get, Router};

use super::handlers;
use super::server::AppState;

/// Item routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
}
