#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use study_coach::config::{Config, ConfigLoader};
use study_coach::errors::CoachError;
use study_coach::gateway::LlmGateway;
use study_coach::models::ChatMessage;

#[derive(Debug, Clone)]
pub struct GatewayCall {
    pub prompt: String,
    pub history: Vec<ChatMessage>,
}

pub struct MockGateway {
    available: bool,
    responses: Mutex<VecDeque<Result<String, CoachError>>>,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            available: true,
            responses: Mutex::new(VecDeque::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_response(self, response: Result<String, CoachError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn get_calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn generate(&self, prompt: &str, history: &[ChatMessage]) -> Result<String, CoachError> {
        self.calls.lock().unwrap().push(GatewayCall {
            prompt: prompt.to_string(),
            history: history.to_vec(),
        });

        if !self.available {
            return Err(CoachError::ModelUnavailable(
                "mock credential is not configured".to_string(),
            ));
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Resposta simulada".to_string()))
    }

    fn provider(&self) -> &str {
        "mock"
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

pub struct InMemoryConfigLoader {
    config: Config,
}

impl InMemoryConfigLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for InMemoryConfigLoader {
    fn load_config(&self) -> Result<Config, CoachError> {
        Ok(self.config.clone())
    }
}
