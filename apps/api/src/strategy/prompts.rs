//! Prompt construction for pricing strategy advice.

use crate::strategy::models::PricingContext;

/// Currency prefix used for every price rendered into a prompt.
pub const CURRENCY_SYMBOL: &str = "€";

/// Fixed instruction closing every strategy prompt.
pub const STRATEGY_TASK: &str =
    "Task: Provide 2-3 sentences of tactical pricing advice regarding the price gap and margin.";

/// Renders a price with the currency prefix and exactly two decimals.
pub fn format_price(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value:.2}")
}

/// Builds the strategy prompt for one pricing context.
///
/// Only the SKU, market, proposed SRP and anchor median reach the model;
/// cost, sell-in, band and margins are accepted but not rendered.
pub fn build_strategy_prompt(ctx: &PricingContext) -> String {
    format!(
        "Role: Senior FMCG Pricing Strategist.\n\
         Market: {country}\n\
         SKU: {sku}\n\
         Proposed SRP: {srp}\n\
         Anchor ({anchor}) Median: {median}\n\
         \n\
         {STRATEGY_TASK}\n",
        country = ctx.country,
        sku = ctx.sku_name,
        srp = format_price(ctx.retail_price),
        anchor = ctx.anchor_brand,
        median = format_price(ctx.anchor_median),
    )
}
