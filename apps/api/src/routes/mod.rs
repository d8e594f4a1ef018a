pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::catalog::handlers as catalog;
use crate::dashboard::handlers as dashboard;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(catalog::handle_landing))
        // Research surface
        .route("/research/", get(catalog::handle_research_index))
        .route("/research/catalog/", get(catalog::handle_catalog))
        // Public surface
        .route("/public/", get(dashboard::handle_public_index))
        .route("/public/dashboard/", get(dashboard::handle_dashboard))
        // AI API
        .route("/api/chat/", post(assistant::handle_chat))
        .route(
            "/api/interpret/compound/",
            post(assistant::handle_interpret_compound),
        )
        .route(
            "/api/interpret/dashboard/",
            post(assistant::handle_interpret_dashboard),
        )
        .with_state(state)
}
