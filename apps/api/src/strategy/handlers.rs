//! Axum route handlers for the strategy API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::strategy::advisor::get_strategy;
use crate::strategy::models::{PricingContext, StrategyResult};
use crate::state::AppState;

/// POST /ai/strategy
///
/// Returns free-text pricing advice for the posted context. Body rejections
/// are reported with the same `{"detail"}` shape as every other failure.
pub async fn handle_get_strategy(
    State(state): State<AppState>,
    payload: Result<Json<PricingContext>, JsonRejection>,
) -> Result<Json<StrategyResult>, AppError> {
    let Json(ctx) = payload?;
    let result = get_strategy(state.generator.as_ref(), &ctx).await?;
    Ok(Json(result))
}
