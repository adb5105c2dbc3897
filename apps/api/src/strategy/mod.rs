// Pricing strategy advice: turns a pricing context into a prompt, asks the
// generation API for tactical advice and hands the text back unmodified.
// All model calls go through llm_client.

pub mod advisor;
pub mod handlers;
pub mod models;
pub mod prompts;
