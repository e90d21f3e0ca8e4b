//! Provider gateways. Each implementation talks to exactly one external
//! text-generation API and normalises its failures into [`CoachError`].

pub mod claude;
pub mod gemini;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, ProviderKind};
use crate::errors::CoachError;
use crate::models::ChatMessage;

#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Sends `history` (oldest first) followed by `prompt` as the newest user
    /// turn and returns the provider's plain-text answer.
    async fn generate(&self, prompt: &str, history: &[ChatMessage]) -> Result<String, CoachError>;

    fn provider(&self) -> &str;

    /// Whether a credential is configured. Gateways without one still get
    /// built; every `generate` call then fails with `ModelUnavailable`.
    fn is_available(&self) -> bool;
}

pub fn from_config(config: &Config, http_client: reqwest::Client) -> Arc<dyn LlmGateway> {
    let provider = &config.provider;
    let api_key = config.api_key.clone();

    if api_key.is_none() {
        log::warn!(
            "no credential found in {}, chat requests will be rejected",
            provider.api_key_env()
        );
    }

    match provider.kind {
        ProviderKind::Gemini => Arc::new(gemini::GeminiGateway::new(
            http_client,
            provider.api_url(),
            provider.model_name(),
            api_key,
        )),
        ProviderKind::Claude => Arc::new(claude::ClaudeGateway::new(
            http_client,
            provider.api_url(),
            provider.model_name(),
            provider.max_tokens(),
            api_key,
        )),
    }
}

pub(crate) fn require_key<'a>(
    api_key: &'a Option<String>,
    provider: &str,
) -> Result<&'a str, CoachError> {
    api_key.as_deref().ok_or_else(|| {
        CoachError::ModelUnavailable(format!("{provider} credential is not configured"))
    })
}

/// Joins text fragments, treating an all-blank result as no answer.
pub(crate) fn collect_text<'a>(
    fragments: impl Iterator<Item = &'a str>,
) -> Result<String, CoachError> {
    let answer: String = fragments.collect();
    if answer.trim().is_empty() {
        return Err(CoachError::EmptyResponse);
    }
    Ok(answer)
}
