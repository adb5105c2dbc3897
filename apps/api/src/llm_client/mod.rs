/// LLM Client — the single point of entry for all Gemini API calls.
///
/// No other module may call the generation API directly; handlers reach it
/// through the `TextGenerator` trait held in `AppState`.
///
/// Model: gemini-3-flash-preview (hardcoded and reported back to callers verbatim)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[cfg(test)]
pub mod mock;

/// The model used for every generation call. Reported as `model_used`.
pub const MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model returned no text content")]
    EmptyContent,

    #[error("No API credential configured")]
    MissingCredential,
}

/// Seam between request handling and the generation API.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a server-side credential was supplied at startup.
    fn has_credential(&self) -> bool;

    /// Sends `prompt` verbatim as a single user turn and returns the model's text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. `None` when there is no text at all.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client. One synchronous call per prompt:
/// no retries, no streaming, no multi-turn context.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    temperature: Option<f32>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.gemini_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            temperature: config.gemini_temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{MODEL}:generateContent", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: self
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        let finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("UNKNOWN");
        let (prompt_tokens, candidate_tokens) = parsed
            .usage_metadata
            .as_ref()
            .map(|u| (u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();
        debug!(
            "Gemini call finished: reason={finish_reason}, prompt_tokens={prompt_tokens}, candidate_tokens={candidate_tokens}"
        );

        parsed.text().ok_or(GenerationError::EmptyContent)
    }
}
