use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns service status, version and whether strategy requests can be served.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "model": MODEL,
        "credential_configured": state.generator.has_credential()
    }))
}
