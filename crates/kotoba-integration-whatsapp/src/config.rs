//! Twilio configuration

use kotoba::{DomainError, TwilioSettings};
use serde::{Deserialize, Serialize};

/// Environment variable holding the Twilio account SID.
pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable holding the Twilio auth token.
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
/// Environment variable holding the WhatsApp sender number.
pub const WHATSAPP_FROM_VAR: &str = "TWILIO_WHATSAPP_FROM";

/// Configuration for the Twilio WhatsApp integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    /// Twilio account SID
    pub account_sid: String,
    /// Twilio auth token (also keys webhook signature validation)
    #[serde(skip_serializing, default)]
    pub auth_token: String,
    /// Sender number in `whatsapp:+E.164` form
    pub whatsapp_from: String,
    /// Whether to validate `X-Twilio-Signature` on inbound webhooks
    pub validate_signature: bool,
}

impl TwilioConfig {
    /// Create a new Twilio configuration
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        whatsapp_from: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            whatsapp_from: whatsapp_from.into(),
            validate_signature: false,
        }
    }

    /// Enable webhook signature validation
    pub fn with_signature_validation(mut self, enable: bool) -> Self {
        self.validate_signature = enable;
        self
    }

    /// Build from environment variables only.
    pub fn from_env() -> Result<Self, DomainError> {
        let account_sid = require_env(ACCOUNT_SID_VAR)?;
        let auth_token = require_env(AUTH_TOKEN_VAR)?;
        let whatsapp_from = require_env(WHATSAPP_FROM_VAR)?;
        Ok(Self::new(account_sid, auth_token, whatsapp_from))
    }

    /// Build from the config file's `[twilio]` table, taking the auth token
    /// from the environment. File values win over env for non-secrets.
    pub fn from_settings(settings: &TwilioSettings) -> Result<Self, DomainError> {
        let account_sid = match &settings.account_sid {
            Some(sid) => sid.clone(),
            None => require_env(ACCOUNT_SID_VAR)?,
        };
        let whatsapp_from = match &settings.whatsapp_from {
            Some(from) => from.clone(),
            None => require_env(WHATSAPP_FROM_VAR)?,
        };
        let auth_token = require_env(AUTH_TOKEN_VAR)?;
        Ok(Self::new(account_sid, auth_token, whatsapp_from))
    }
}

fn require_env(var: &str) -> Result<String, DomainError> {
    std::env::var(var)
        .map_err(|_| DomainError::ConfigInvalid(format!("{} is not set", var)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = TwilioConfig::new("ACxxx", "secret", "whatsapp:+14155238886")
            .with_signature_validation(true);

        assert_eq!(config.account_sid, "ACxxx");
        assert_eq!(config.auth_token, "secret");
        assert_eq!(config.whatsapp_from, "whatsapp:+14155238886");
        assert!(config.validate_signature);
    }

    #[test]
    fn test_auth_token_not_serialized() {
        let config = TwilioConfig::new("ACxxx", "secret", "whatsapp:+14155238886");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
