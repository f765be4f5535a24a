pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::import::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).put(handlers::handle_put_resume),
        )
        .route("/api/v1/resume/import", post(handlers::handle_import))
        .with_state(state)
}
