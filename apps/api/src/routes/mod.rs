pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::strategy::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ai/strategy", post(handlers::handle_get_strategy))
        .with_state(state)
}
