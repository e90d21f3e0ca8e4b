use std::sync::Arc;

use crate::errors::CoachError;
use crate::gateway::LlmGateway;
use crate::models::request::ChatRequest;
use crate::models::response::{ChatResponse, now_timestamp};
use crate::{prompt, subjects};

/// Validates chat requests, builds the prompt and relays it to the gateway.
#[derive(Clone)]
pub struct CoachService {
    gateway: Arc<dyn LlmGateway>,
}

impl CoachService {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &dyn LlmGateway {
        self.gateway.as_ref()
    }

    pub async fn handle_chat(&self, request: ChatRequest) -> Result<ChatResponse, CoachError> {
        validate_chat_request(&request)?;

        let prompt = prompt::build_prompt(
            subjects::display_name(&request.subject),
            &request.question,
            request.context.as_deref(),
        );

        let answer = self.gateway.generate(&prompt, &request.history).await?;

        Ok(ChatResponse {
            answer,
            subject: request.subject,
            timestamp: now_timestamp(),
        })
    }
}

pub(crate) fn validate_chat_request(request: &ChatRequest) -> Result<(), CoachError> {
    if request.subject.trim().is_empty() {
        return Err(CoachError::Validation(
            "subject must not be empty".to_string(),
        ));
    }
    if request.question.trim().is_empty() {
        return Err(CoachError::Validation(
            "question must not be empty".to_string(),
        ));
    }
    Ok(())
}
