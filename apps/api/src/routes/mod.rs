pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::insights::handlers::handle_dashboard;
use crate::pipeline::handlers::handle_analyze;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handle_analyze))
        .route("/dashboard", post(handle_dashboard))
        .with_state(state)
}
