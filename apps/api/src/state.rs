use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation adapter, built once at startup from `Config`. Tests swap in a mock.
    pub generator: Arc<dyn TextGenerator>,
}
