//! Strategy advisor — one prompt, one generation call, one result.

use thiserror::Error;

use crate::llm_client::{TextGenerator, MODEL};
use crate::strategy::models::{PricingContext, StrategyResult};
use crate::strategy::prompts::build_strategy_prompt;

/// Failure causes of a strategy request. Closed: callers match on the
/// variant rather than on message text.
#[derive(Debug, Error, PartialEq)]
pub enum StrategyError {
    #[error("API_KEY not configured on server")]
    NotConfigured,

    /// Raw text of the underlying generation failure.
    #[error("{0}")]
    Generation(String),
}

/// Builds the prompt for `ctx` and returns the model's advice unmodified.
///
/// Fails with `NotConfigured` before any outbound call when the server has no
/// credential. Generation failures are not retried.
pub async fn get_strategy(
    generator: &dyn TextGenerator,
    ctx: &PricingContext,
) -> Result<StrategyResult, StrategyError> {
    if !generator.has_credential() {
        return Err(StrategyError::NotConfigured);
    }

    let prompt = build_strategy_prompt(ctx);
    let strategy_text = generator
        .generate(&prompt)
        .await
        .map_err(|e| StrategyError::Generation(e.to_string()))?;

    Ok(StrategyResult {
        strategy_text,
        model_used: MODEL.to_string(),
    })
}
