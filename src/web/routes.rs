use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(super::handlers::page::index))
        // API
        .route("/chat", post(super::handlers::chat::chat))
        // Health check
        .route("/health", get(super::handlers::health::health_check))
        .with_state(state)
}
