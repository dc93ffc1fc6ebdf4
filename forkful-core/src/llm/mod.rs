//! LLM provider abstraction for recipe generation.
//!
//! Trait-based so the server can run against the real Claude API in
//! production and a deterministic fake in tests. Generation is single-shot:
//! no retries, no caching, no rate limiting.

mod claude;
mod fake;

pub use claude::ClaudeProvider;
pub use fake::{FakeProvider, FAKE_RECIPE_JSON};

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's text
/// response.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response, spending at most
    /// `max_tokens` on the completion.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "claude", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables:
/// - GENERATION_PROVIDER: "claude" | "fake" (default: "fake")
/// - GENERATION_MODEL: model name (provider-specific)
/// - ANTHROPIC_API_KEY: API key for Claude
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("GENERATION_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "claude" => {
            let api_key = std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".to_string()))?;
            let model = std::env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| ClaudeProvider::DEFAULT_MODEL.to_string());
            Ok(Box::new(ClaudeProvider::new(api_key, model)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
