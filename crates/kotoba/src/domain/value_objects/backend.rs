//! Backend - LLM Backend identifiers

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// LLM Backend
///
/// Closed set of response-generation providers. Selected once at startup;
/// an unknown identifier is a startup error, never a silent default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    OpenAi,
    Groq,
    HuggingFace,
}

impl Backend {
    /// All known backends, in resolution order.
    pub const ALL: [Backend; 3] = [Backend::OpenAi, Backend::Groq, Backend::HuggingFace];
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::OpenAi => write!(f, "openai"),
            Backend::Groq => write!(f, "groq"),
            Backend::HuggingFace => write!(f, "huggingface"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Backend::OpenAi),
            "groq" => Ok(Backend::Groq),
            "huggingface" => Ok(Backend::HuggingFace),
            _ => Err(DomainError::UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_known_backends() {
        assert_eq!(Backend::from_str("openai").unwrap(), Backend::OpenAi);
        assert_eq!(Backend::from_str("groq").unwrap(), Backend::Groq);
        assert_eq!(
            Backend::from_str("huggingface").unwrap(),
            Backend::HuggingFace
        );
        // Case insensitive
        assert_eq!(Backend::from_str("OpenAI").unwrap(), Backend::OpenAi);
    }

    #[test]
    fn test_parse_unknown_backend() {
        let err = Backend::from_str("bard").unwrap_err();
        assert!(matches!(err, DomainError::UnknownBackend(ref s) if s == "bard"));
    }

    #[test]
    fn test_display_round_trip() {
        for backend in Backend::ALL {
            assert_eq!(Backend::from_str(&backend.to_string()).unwrap(), backend);
        }
    }
}
