//! Ports - Abstract interfaces (traits)

pub mod integration;
pub mod llm_provider;

pub use integration::{MessagingEvent, MessagingIntegration};
pub use llm_provider::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, TokenUsage,
};
