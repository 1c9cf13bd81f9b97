//! HuggingFace backend - deliberate stub
//!
//! Same contract shape as the other backends; always fails with a
//! not-implemented error and never attempts a network call.

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::ports::llm_provider::{ChatMessage, CompletionOptions, CompletionResponse, LlmProvider};

/// HuggingFace provider stub
pub struct HuggingFaceProvider {
    model: String,
}

impl HuggingFaceProvider {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        Err(DomainError::NotImplemented("huggingface".to_string()))
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(false)
    }
}
