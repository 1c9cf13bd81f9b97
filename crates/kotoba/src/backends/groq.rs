//! Groq backend - deliberate stub
//!
//! Kept as a distinct, explicitly-unimplemented backend so a `groq` config
//! never silently falls back to OpenAI. Never touches the network.

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::ports::llm_provider::{ChatMessage, CompletionOptions, CompletionResponse, LlmProvider};

/// Groq provider stub
pub struct GroqProvider {
    model: String,
}

impl GroqProvider {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        Err(DomainError::NotImplemented("groq".to_string()))
    }

    fn provider_name(&self) -> &str {
        "groq"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(false)
    }
}
