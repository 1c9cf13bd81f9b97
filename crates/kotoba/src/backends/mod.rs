//! Backends - concrete LLM provider implementations and dispatch

mod groq;
mod huggingface;
mod openai;

use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::domain::{Backend, DomainError};
use crate::ports::LlmProvider;

pub use groq::GroqProvider;
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Resolve the configured backend to a provider instance.
///
/// Exactly one provider is constructed per process. An unknown backend
/// identifier fails here, at startup, never at the first incoming message.
pub fn resolve(config: &AppConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
    let backend = config.backend()?;
    let model = config.settings.model.clone();

    let provider: Arc<dyn LlmProvider> = match backend {
        Backend::OpenAi => {
            let api_key = std::env::var(OPENAI_API_KEY_VAR).unwrap_or_else(|_| {
                warn!("{} not set - OpenAI calls will fail", OPENAI_API_KEY_VAR);
                String::new()
            });
            Arc::new(OpenAiProvider::new(api_key, model))
        }
        Backend::Groq => Arc::new(GroqProvider::new(model)),
        Backend::HuggingFace => Arc::new(HuggingFaceProvider::new(model)),
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TwilioSettings};
    use crate::domain::Persona;
    use crate::ports::{ChatMessage, CompletionOptions};

    fn config_for(backend: &str) -> AppConfig {
        AppConfig {
            persona: Persona::default(),
            settings: Settings {
                llm_backend: backend.to_string(),
                model: "test-model".to_string(),
            },
            twilio: TwilioSettings::default(),
        }
    }

    #[test]
    fn test_resolve_all_backends() {
        for (id, expected) in [
            ("openai", "openai"),
            ("groq", "groq"),
            ("huggingface", "huggingface"),
        ] {
            let provider = resolve(&config_for(id)).unwrap();
            assert_eq!(provider.provider_name(), expected);
            assert_eq!(provider.model_id(), "test-model");
        }
    }

    #[test]
    fn test_resolve_unknown_backend() {
        let err = resolve(&config_for("bard")).unwrap_err();
        assert!(matches!(err, DomainError::UnknownBackend(ref s) if s == "bard"));
    }

    #[tokio::test]
    async fn test_stub_backends_never_call_network() {
        for id in ["groq", "huggingface"] {
            let provider = resolve(&config_for(id)).unwrap();
            let err = provider
                .complete(
                    &[ChatMessage::user("Hello")],
                    &CompletionOptions::default(),
                )
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotImplemented(_)));
            assert!(!provider.health_check().await.unwrap());
        }
    }
}
