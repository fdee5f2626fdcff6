// ABOUTME: HTTP API layer for person records providing REST endpoints and routing
// ABOUTME: Maps each route to a single PersonStore call and renders JSON responses

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use roster_storage::PersonStore;

pub mod health;
pub mod persons_handlers;
pub mod response;

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub persons: Arc<dyn PersonStore>,
}

impl AppState {
    pub fn new(persons: Arc<dyn PersonStore>) -> Self {
        Self { persons }
    }
}

/// Creates the person API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/users", get(persons_handlers::list_persons))
        .route("/user", post(persons_handlers::create_person))
        .route("/user/{id}", get(persons_handlers::get_person))
        .route("/user/{id}", put(persons_handlers::update_person))
        .route("/user/{id}", delete(persons_handlers::delete_person))
        .fallback(response::route_not_found)
        .method_not_allowed_fallback(response::method_not_allowed)
        .with_state(state)
}
