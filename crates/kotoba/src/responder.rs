//! Responder - persona-driven response generation
//!
//! The only surface the rest of the system (webhook handler, CLI loop)
//! talks to. `generate_response` always returns a displayable string: a
//! failed generation degrades to a fixed fallback and never interrupts the
//! surrounding message-handling loop.

use std::sync::Arc;

use tracing::{debug, error};

use crate::backends;
use crate::config::AppConfig;
use crate::domain::{DomainError, Persona};
use crate::ports::{ChatMessage, CompletionOptions, LlmProvider};

/// Reply for an empty inbound message.
pub const NO_MESSAGE_REPLY: &str = "No message received.";

/// Fallback when the configured backend is a deliberate stub.
pub const NOT_CONFIGURED_FALLBACK: &str = "Sorry, no chat backend configured.";

/// Fallback when generation fails at runtime (transport, auth, provider).
pub const GENERATION_FALLBACK: &str =
    "Sorry, I'm having trouble responding right now. Please try again later.";

/// Persona-driven responder bound to one provider for the process lifetime.
pub struct Responder {
    persona: Persona,
    provider: Arc<dyn LlmProvider>,
}

impl Responder {
    /// Create a responder from an already-resolved provider.
    pub fn new(persona: Persona, provider: Arc<dyn LlmProvider>) -> Self {
        Self { persona, provider }
    }

    /// Resolve the configured backend and build a responder.
    ///
    /// Fails fast on an unknown backend identifier.
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let provider = backends::resolve(config)?;
        Ok(Self::new(config.persona.clone(), provider))
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    /// Generate a reply for an inbound message. Never fails.
    pub async fn generate_response(&self, user_message: &str) -> String {
        self.generate_with_system_prompt(user_message, None).await
    }

    /// Generate a reply with an optional system prompt override.
    ///
    /// When `system_prompt` is `None` the persona's own prompt is used.
    pub async fn generate_with_system_prompt(
        &self,
        user_message: &str,
        system_prompt: Option<&str>,
    ) -> String {
        let trimmed = user_message.trim();
        if trimmed.is_empty() {
            return NO_MESSAGE_REPLY.to_string();
        }

        if self.persona.is_greeting(trimmed) {
            debug!(persona = %self.persona.name, "Greeting short-circuit");
            return self.persona.greeting.clone();
        }

        let system = system_prompt
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.persona.effective_system_prompt());

        let messages = [ChatMessage::system(system), ChatMessage::user(trimmed)];
        let options = CompletionOptions {
            max_tokens: Some(self.persona.max_tokens),
            temperature: Some(self.persona.temperature),
        };

        match self.provider.complete(&messages, &options).await {
            Ok(response) => {
                debug!(
                    provider = %self.provider.provider_name(),
                    model = %response.model,
                    total_tokens = %response.usage.total_tokens,
                    "Generated response"
                );
                response.content
            }
            Err(DomainError::NotImplemented(backend)) => {
                error!(backend = %backend, "Backend not implemented");
                NOT_CONFIGURED_FALLBACK.to_string()
            }
            Err(e) => {
                error!(
                    provider = %self.provider.provider_name(),
                    error = %e,
                    "Generation failed, returning fallback"
                );
                GENERATION_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::ports::{CompletionResponse, TokenUsage};

    /// Provider double: canned result, records calls and messages.
    struct MockProvider {
        result: Result<String, DomainError>,
        calls: AtomicUsize,
        last_messages: Mutex<Vec<ChatMessage>>,
    }

    impl MockProvider {
        fn ok(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_messages: Mutex::new(Vec::new()),
            }
        }

        fn err(e: DomainError) -> Self {
            Self {
                result: Err(e),
                calls: AtomicUsize::new(0),
                last_messages: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<CompletionResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_messages.lock().unwrap() = messages.to_vec();
            match &self.result {
                Ok(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    model: "mock".to_string(),
                    usage: TokenUsage::default(),
                }),
                Err(DomainError::NotImplemented(s)) => {
                    Err(DomainError::NotImplemented(s.clone()))
                }
                Err(e) => Err(DomainError::Provider(e.to_string())),
            }
        }

        fn provider_name(&self) -> &str {
            "mock"
        }

        fn model_id(&self) -> &str {
            "mock"
        }
    }

    fn responder_with(provider: Arc<MockProvider>) -> Responder {
        Responder::new(Persona::default(), provider)
    }

    #[tokio::test]
    async fn test_successful_generation_passes_through() {
        let provider = Arc::new(MockProvider::ok("I'm doing well, thanks!"));
        let responder = responder_with(provider.clone());

        let reply = responder.generate_response("Hello, how are you?").await;
        assert_eq!(reply, "I'm doing well, thanks!");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        // System prompt then user message, exactly two
        let messages = provider.last_messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "Hello, how are you?");
    }

    #[tokio::test]
    async fn test_provider_failure_returns_fallback() {
        let provider = Arc::new(MockProvider::err(DomainError::Provider(
            "401 Unauthorized".to_string(),
        )));
        let responder = responder_with(provider.clone());

        let reply = responder.generate_response("Hello, how are you?").await;
        assert_eq!(reply, GENERATION_FALLBACK);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stub_backend_returns_not_configured() {
        let provider = Arc::new(MockProvider::err(DomainError::NotImplemented(
            "groq".to_string(),
        )));
        let responder = responder_with(provider);

        let reply = responder.generate_response("Anything at all").await;
        assert_eq!(reply, NOT_CONFIGURED_FALLBACK);
    }

    #[tokio::test]
    async fn test_empty_message_short_circuits() {
        let provider = Arc::new(MockProvider::ok("should not be called"));
        let responder = responder_with(provider.clone());

        assert_eq!(responder.generate_response("").await, NO_MESSAGE_REPLY);
        assert_eq!(responder.generate_response("   ").await, NO_MESSAGE_REPLY);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_greeting_short_circuits() {
        let provider = Arc::new(MockProvider::ok("should not be called"));
        let responder = responder_with(provider.clone());

        assert_eq!(responder.generate_response("hi").await, "Hello!");
        assert_eq!(responder.generate_response(" Hey ").await, "Hello!");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_long_input_still_returns_string() {
        let provider = Arc::new(MockProvider::ok("ok"));
        let responder = responder_with(provider);

        let long = "words ".repeat(10_000);
        assert_eq!(responder.generate_response(&long).await, "ok");
    }

    #[tokio::test]
    async fn test_system_prompt_override() {
        let provider = Arc::new(MockProvider::ok("ok"));
        let responder = responder_with(provider.clone());

        responder
            .generate_with_system_prompt("question", Some("You are a pirate."))
            .await;

        let messages = provider.last_messages.lock().unwrap();
        assert_eq!(messages[0].content, "You are a pirate.");
    }
}
