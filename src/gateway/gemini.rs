use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{LlmGateway, collect_text, require_key};
use crate::errors::CoachError;
use crate::llm_client::LLMClient;
use crate::models::{ChatMessage, Role};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

pub struct GeminiGateway {
    client: LLMClient,
    model: String,
    api_key: Option<String>,
}

impl GeminiGateway {
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        model: &str,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: LLMClient::new(http_client, base_url),
            model: model.to_string(),
            api_key,
        }
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

fn text_content(role: &str, text: &str) -> Content {
    Content {
        role: Some(role.to_string()),
        parts: vec![Part {
            text: Some(text.to_string()),
        }],
    }
}

pub(crate) fn build_request(prompt: &str, history: &[ChatMessage]) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|message| text_content(role_name(message.role), &message.content))
        .collect();
    contents.push(text_content("user", prompt));

    GenerateContentRequest { contents }
}

pub(crate) fn extract_answer(response: &GenerateContentResponse) -> Result<String, CoachError> {
    let parts = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    collect_text(parts.iter().filter_map(|part| part.text.as_deref()))
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(&self, prompt: &str, history: &[ChatMessage]) -> Result<String, CoachError> {
        let api_key = require_key(&self.api_key, self.provider())?;
        let request = build_request(prompt, history);

        log::debug!(
            "gemini request: model {}, {} contents",
            self.model,
            request.contents.len()
        );

        let response: GenerateContentResponse = self
            .client
            .post_json(
                &format!("/models/{}:generateContent", self.model),
                &[("x-goog-api-key", api_key)],
                &request,
            )
            .await?;

        if let Some(reason) = response.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            log::debug!("gemini finish reason: {reason}");
        }

        extract_answer(&response)
    }

    fn provider(&self) -> &str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}
