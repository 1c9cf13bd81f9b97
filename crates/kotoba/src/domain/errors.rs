//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Backend '{0}' is not yet implemented")]
    NotImplemented(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Whether the error is fatal at startup (misconfiguration)
    /// as opposed to a recoverable per-call failure.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigInvalid(_) | Self::UnknownBackend(_)
        )
    }
}
