pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/generate/batch",
            post(handlers::handle_generate_batch),
        )
        .route("/api/v1/categories", get(handlers::handle_list_categories))
        .route(
            "/api/v1/categories/:id",
            get(handlers::handle_get_category),
        )
        .with_state(state)
}
