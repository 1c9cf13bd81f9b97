//! Configuration loading
//!
//! Reads the persona config file (TOML) with `[persona]`, `[settings]` and
//! `[twilio]` tables. The loaded value is immutable for the process lifetime
//! and passed explicitly to every component that needs it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Backend, DomainError, Persona};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "persona.toml";

/// Generation settings: which backend to dispatch to and which model to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend identifier. Required - a missing or unknown backend is a
    /// startup error, never a silent default to a working provider.
    pub llm_backend: String,
    /// Provider-specific model identifier
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

/// Twilio section of the config file.
///
/// Consumed by the WhatsApp integration, not by the core. The auth token is
/// never stored in the file; it comes from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwilioSettings {
    #[serde(default)]
    pub account_sid: Option<String>,
    /// Sender in `whatsapp:+E.164` form
    #[serde(default)]
    pub whatsapp_from: Option<String>,
}

/// Fully loaded application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub persona: Persona,
    pub settings: Settings,
    #[serde(default)]
    pub twilio: TwilioSettings,
}

impl AppConfig {
    /// Load and validate config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DomainError::config_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigInvalid(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| DomainError::ConfigInvalid(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate parameter ranges and the backend identifier.
    ///
    /// Runs at load time so a misconfiguration surfaces at startup rather
    /// than at the first incoming message.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.persona.validate()?;
        self.backend()?;
        Ok(())
    }

    /// The configured backend, parsed from its identifier string.
    pub fn backend(&self) -> Result<Backend, DomainError> {
        self.settings.llm_backend.parse()
    }
}
