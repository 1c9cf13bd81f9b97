//! MessagingIntegration implementation for WhatsApp (Twilio)

use async_trait::async_trait;
use kotoba::ports::integration::{MessagingEvent, MessagingIntegration};
use kotoba::DomainError;
use tracing::{debug, warn};

use crate::client::TwilioClient;
use crate::config::TwilioConfig;
use crate::webhook::TwilioWebhookHandler;

/// WhatsApp integration implementing the MessagingIntegration trait
pub struct WhatsAppIntegration {
    client: TwilioClient,
    webhook: TwilioWebhookHandler,
}

impl WhatsAppIntegration {
    /// Create a new WhatsApp integration
    pub fn new(config: TwilioConfig) -> Self {
        let webhook = if config.validate_signature {
            TwilioWebhookHandler::with_auth_token(config.auth_token.clone())
        } else {
            TwilioWebhookHandler::new()
        };
        let client = TwilioClient::new(config);
        Self { client, webhook }
    }

    pub fn client(&self) -> &TwilioClient {
        &self.client
    }

    pub fn webhook(&self) -> &TwilioWebhookHandler {
        &self.webhook
    }
}

#[async_trait]
impl MessagingIntegration for WhatsAppIntegration {
    async fn post_message(&self, to: &str, content: &str) -> Result<(), DomainError> {
        debug!(to = %to, content_len = %content.len(), "Posting message to WhatsApp");

        let sid = self.client.send_message(to, content).await?;
        debug!(sid = %sid, "Message accepted by Twilio");
        Ok(())
    }

    fn name(&self) -> &str {
        "whatsapp"
    }

    fn handle_webhook(&self, payload: &[u8]) -> Result<Option<MessagingEvent>, DomainError> {
        self.webhook.parse_event(payload)
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        match self.client.check_account().await {
            Ok(ok) => Ok(ok),
            Err(e) => {
                warn!(error = %e, "Twilio health check failed");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_name() {
        let config = TwilioConfig::new("ACxxx", "secret", "whatsapp:+14155238886");
        let integration = WhatsAppIntegration::new(config);
        assert_eq!(integration.name(), "whatsapp");
    }

    #[test]
    fn test_handle_webhook_parses_message() {
        let config = TwilioConfig::new("ACxxx", "secret", "whatsapp:+14155238886");
        let integration = WhatsAppIntegration::new(config);

        let event = integration
            .handle_webhook(b"MessageSid=SM1&From=whatsapp%3A%2B1&To=whatsapp%3A%2B2&Body=hi")
            .unwrap();
        assert!(event.is_some());
        assert_eq!(event.unwrap().content(), Some("hi"));
    }
}
