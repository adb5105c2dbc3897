use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::strategy::advisor::StrategyError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error body has the shape `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    Payload(#[from] JsonRejection),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Payload(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Strategy(StrategyError::NotConfigured) => {
                tracing::error!("Strategy request rejected: API_KEY is not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Strategy(StrategyError::Generation(msg)) => {
                tracing::error!("Generation error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_configured_maps_to_500_with_fixed_detail() {
        let response = AppError::from(StrategyError::NotConfigured).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "API_KEY not configured on server"})
        );
    }

    #[tokio::test]
    async fn test_generation_error_detail_is_unredacted() {
        let msg = "API error (status 403): Permission denied on resource project 12345.";
        let response = AppError::from(StrategyError::Generation(msg.to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "detail": msg }));
    }
}
