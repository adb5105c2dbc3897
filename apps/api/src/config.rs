use anyhow::{Context, Result};

/// Default endpoint for the Gemini REST API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Read once at startup; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the generation API. `None` keeps the process up but
    /// makes every strategy request fail with a configuration error.
    pub api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_temperature: Option<f32>,
    pub gemini_timeout_secs: Option<u64>,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: optional_env("API_KEY"),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_temperature: optional_env("GEMINI_TEMPERATURE")
                .map(|v| v.parse::<f32>())
                .transpose()
                .context("GEMINI_TEMPERATURE must be a number")?,
            gemini_timeout_secs: optional_env("GEMINI_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            host: optional_env("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Reads a variable, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
