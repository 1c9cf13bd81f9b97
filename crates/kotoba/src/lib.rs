//! Kotoba Domain Library
//!
//! Core domain types and interfaces for the Kotoba persona assistant.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Persona)
//!   - `value_objects/`: Immutable value types (Backend)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `llm_provider`: Response-generation capability
//!   - `integration`: Messaging platform capability
//!
//! - **Backends** (`backends/`): Concrete providers and the dispatcher
//!
//! # Usage
//!
//! ```rust,ignore
//! use kotoba::{AppConfig, Responder};
//!
//! let config = AppConfig::load("persona.toml")?;
//! let responder = Responder::from_config(&config)?;
//! let reply = responder.generate_response("Hello, how are you?").await;
//! ```

pub mod backends;
pub mod config;
pub mod domain;
pub mod ports;
pub mod responder;

// Re-export commonly used types
pub use config::{AppConfig, Settings, TwilioSettings, DEFAULT_CONFIG_FILE};
pub use domain::{Backend, DomainError, Persona};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, MessagingEvent,
    MessagingIntegration, TokenUsage,
};
pub use responder::{Responder, GENERATION_FALLBACK, NOT_CONFIGURED_FALLBACK, NO_MESSAGE_REPLY};
