use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{LlmGateway, collect_text, require_key};
use crate::consts;
use crate::errors::CoachError;
use crate::llm_client::LLMClient;
use crate::models::{ChatMessage, Role};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

pub struct ClaudeGateway {
    client: LLMClient,
    model: String,
    max_tokens: u32,
    api_key: Option<String>,
}

impl ClaudeGateway {
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        model: &str,
        max_tokens: u32,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: LLMClient::new(http_client, base_url),
            model: model.to_string(),
            max_tokens,
            api_key,
        }
    }

    pub(crate) fn build_request(&self, prompt: &str, history: &[ChatMessage]) -> MessagesRequest {
        let mut messages = history.to_vec();
        messages.push(ChatMessage {
            role: Role::User,
            content: prompt.to_string(),
        });

        MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages,
        }
    }
}

pub(crate) fn extract_answer(response: &MessagesResponse) -> Result<String, CoachError> {
    collect_text(response.content.iter().filter_map(|block| match block {
        ContentBlock::Text { text } => Some(text.as_str()),
        ContentBlock::Other => None,
    }))
}

#[async_trait]
impl LlmGateway for ClaudeGateway {
    async fn generate(&self, prompt: &str, history: &[ChatMessage]) -> Result<String, CoachError> {
        let api_key = require_key(&self.api_key, self.provider())?;
        let request = self.build_request(prompt, history);

        log::debug!(
            "claude request: model {}, {} messages",
            self.model,
            request.messages.len()
        );

        let response: MessagesResponse = self
            .client
            .post_json(
                "/messages",
                &[
                    ("x-api-key", api_key),
                    ("anthropic-version", consts::CLAUDE_API_VERSION),
                ],
                &request,
            )
            .await?;

        if let Some(reason) = response.stop_reason.as_deref() {
            log::debug!("claude stop reason: {reason}");
        }

        extract_answer(&response)
    }

    fn provider(&self) -> &str {
        "claude"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}
