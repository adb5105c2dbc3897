use serde::{Deserialize, Serialize};

/// Pricing context for one SKU in one market, as posted by the caller.
///
/// Every field is required. Values are forwarded as given: no range or
/// cross-field checks (a negative cost or an inverted anchor band passes through).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    pub sku_name: String,
    pub country: String,
    pub cost: f64,
    pub sell_in: f64,
    pub retail_price: f64,
    pub anchor_brand: String,
    /// Competitor median shelf price.
    pub anchor_median: f64,
    pub anchor_lower: f64,
    pub anchor_upper: f64,
    pub distributor_margin: f64,
    pub retailer_margin: f64,
}

/// Advice returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy_text: String,
    pub model_used: String,
}
