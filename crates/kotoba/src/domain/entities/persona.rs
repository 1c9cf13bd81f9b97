//! Persona - The configured personality profile
//!
//! Pure domain entity without infrastructure dependencies. Loaded once at
//! startup and applied to every generated response.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Default sampling temperature when the config omits it.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default completion token limit when the config omits it.
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Persona - personality and generation parameters for the assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Display name of the persona
    #[serde(default)]
    pub name: String,
    /// Short human-readable description
    #[serde(default)]
    pub description: String,
    /// System prompt applied to every generation
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Canned reply for greeting messages ("hi", "hello", "hey")
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Language tag the persona speaks (e.g. "en", "ja")
    #[serde(default = "default_language")]
    pub language: String,
    /// Sampling temperature, valid range [0, 1]
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate, must be positive
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_system_prompt() -> String {
    "You are a kind and helpful assistant.".to_string()
}

fn default_greeting() -> String {
    "Hello!".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            system_prompt: default_system_prompt(),
            greeting: default_greeting(),
            language: default_language(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Persona {
    /// Validate generation parameter ranges.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.temperature) || !self.temperature.is_finite() {
            return Err(DomainError::ConfigInvalid(format!(
                "persona.temperature must be in [0, 1], got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(DomainError::ConfigInvalid(
                "persona.max_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// System prompt with the persona's language hint applied.
    ///
    /// English personas use the prompt verbatim.
    pub fn effective_system_prompt(&self) -> String {
        if self.language.is_empty() || self.language == "en" {
            self.system_prompt.clone()
        } else {
            format!("{} Respond in '{}'.", self.system_prompt, self.language)
        }
    }

    /// Whether the message is a plain greeting that should short-circuit
    /// to the configured greeting reply.
    pub fn is_greeting(&self, message: &str) -> bool {
        matches!(
            message.trim().to_lowercase().as_str(),
            "hi" | "hello" | "hey"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let persona = Persona::default();
        assert_eq!(persona.temperature, 0.7);
        assert_eq!(persona.max_tokens, 150);
        assert_eq!(persona.greeting, "Hello!");
        assert_eq!(persona.language, "en");
        assert!(persona.validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let persona = Persona {
            temperature: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            persona.validate(),
            Err(DomainError::ConfigInvalid(_))
        ));

        let persona = Persona {
            temperature: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            persona.validate(),
            Err(DomainError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let persona = Persona {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(
            persona.validate(),
            Err(DomainError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_greeting_detection() {
        let persona = Persona::default();
        assert!(persona.is_greeting("hi"));
        assert!(persona.is_greeting("  Hello "));
        assert!(persona.is_greeting("HEY"));
        assert!(!persona.is_greeting("hi there"));
        assert!(!persona.is_greeting(""));
    }

    #[test]
    fn test_effective_system_prompt_language() {
        let persona = Persona::default();
        assert_eq!(persona.effective_system_prompt(), persona.system_prompt);

        let persona = Persona {
            language: "ja".to_string(),
            ..Default::default()
        };
        assert!(persona.effective_system_prompt().contains("'ja'"));
    }
}
