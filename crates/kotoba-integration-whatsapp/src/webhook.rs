//! Twilio webhook handling
//!
//! Parses inbound `application/x-www-form-urlencoded` payloads from the
//! Twilio WhatsApp sandbox/number into domain events, and validates the
//! `X-Twilio-Signature` header (HMAC-SHA1 over url + sorted form params,
//! keyed by the auth token).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use kotoba::{DomainError, MessagingEvent};
use serde::Deserialize;
use sha1::Sha1;
use tracing::{debug, warn};

type HmacSha1 = Hmac<Sha1>;

/// Inbound Twilio webhook payload (message or status callback)
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "MessageSid", default)]
    pub message_sid: String,
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "To", default)]
    pub to: String,
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "ProfileName", default)]
    pub profile_name: Option<String>,
    #[serde(rename = "MessageStatus", default)]
    pub message_status: Option<String>,
}

/// Twilio webhook handler for incoming events
pub struct TwilioWebhookHandler {
    /// Auth token for signature verification (optional)
    auth_token: Option<String>,
}

impl TwilioWebhookHandler {
    /// Create a new webhook handler without signature verification
    pub fn new() -> Self {
        Self { auth_token: None }
    }

    /// Create a webhook handler with signature verification
    pub fn with_auth_token(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(auth_token.into()),
        }
    }

    /// Parse a form-encoded webhook body into a messaging event.
    ///
    /// Returns `None` for payloads that require no action (empty, or
    /// callbacks we don't react to).
    pub fn parse_event(&self, payload: &[u8]) -> Result<Option<MessagingEvent>, DomainError> {
        let parsed: WebhookPayload = serde_urlencoded::from_bytes(payload)
            .map_err(|e| DomainError::Validation(format!("Invalid webhook payload: {}", e)))?;

        // Delivery status callbacks carry MessageStatus instead of Body
        if let Some(status) = parsed.message_status {
            debug!(sid = %parsed.message_sid, status = %status, "Delivery status callback");
            return Ok(Some(MessagingEvent::StatusUpdate {
                message_id: parsed.message_sid,
                status,
            }));
        }

        if parsed.message_sid.is_empty() && parsed.from.is_empty() {
            debug!("Ignoring webhook payload with no message fields");
            return Ok(None);
        }

        Ok(Some(MessagingEvent::MessageReceived {
            message_id: parsed.message_sid,
            from: parsed.from,
            to: parsed.to,
            sender_name: parsed.profile_name,
            content: parsed.body,
        }))
    }

    /// Verify a Twilio request signature.
    ///
    /// The signed data is the full request url followed by every form
    /// parameter, sorted by key, as `key` then `value` concatenated.
    pub fn verify_signature(
        &self,
        signature: &str,
        url: &str,
        body: &[u8],
    ) -> Result<bool, DomainError> {
        let Some(ref auth_token) = self.auth_token else {
            warn!("Signature verification requested but no auth token configured");
            return Ok(false);
        };

        let mut params: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| DomainError::Validation(format!("Invalid webhook payload: {}", e)))?;
        params.sort();

        let mut data = url.to_string();
        for (key, value) in &params {
            data.push_str(key);
            data.push_str(value);
        }

        let mut mac = HmacSha1::new_from_slice(auth_token.as_bytes())
            .map_err(|e| DomainError::Validation(format!("Invalid HMAC key: {}", e)))?;
        mac.update(data.as_bytes());
        let expected = BASE64.encode(mac.finalize().into_bytes());

        Ok(expected == signature)
    }
}

impl Default for TwilioWebhookHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inbound_message() {
        let handler = TwilioWebhookHandler::new();
        let body = b"MessageSid=SM123&From=whatsapp%3A%2B14155551234&To=whatsapp%3A%2B14155238886&Body=Hello%2C+how+are+you%3F&ProfileName=Taro";

        let event = handler.parse_event(body).unwrap().unwrap();
        match event {
            MessagingEvent::MessageReceived {
                message_id,
                from,
                to,
                sender_name,
                content,
            } => {
                assert_eq!(message_id, "SM123");
                assert_eq!(from, "whatsapp:+14155551234");
                assert_eq!(to, "whatsapp:+14155238886");
                assert_eq!(sender_name.as_deref(), Some("Taro"));
                assert_eq!(content, "Hello, how are you?");
            }
            other => panic!("Expected MessageReceived, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status_callback() {
        let handler = TwilioWebhookHandler::new();
        let body = b"MessageSid=SM123&MessageStatus=delivered";

        let event = handler.parse_event(body).unwrap().unwrap();
        match event {
            MessagingEvent::StatusUpdate { message_id, status } => {
                assert_eq!(message_id, "SM123");
                assert_eq!(status, "delivered");
            }
            other => panic!("Expected StatusUpdate, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_payload_ignored() {
        let handler = TwilioWebhookHandler::new();
        assert!(handler.parse_event(b"").unwrap().is_none());
    }

    #[test]
    fn test_message_with_empty_body() {
        let handler = TwilioWebhookHandler::new();
        let body = b"MessageSid=SM123&From=whatsapp%3A%2B14155551234&To=whatsapp%3A%2B14155238886&Body=";

        let event = handler.parse_event(body).unwrap().unwrap();
        assert_eq!(event.content(), Some(""));
    }

    #[test]
    fn test_verify_signature_known_vector() {
        // Example request from the Twilio security docs.
        let handler = TwilioWebhookHandler::with_auth_token("12345");
        let url = "https://mycompany.com/myapp.php?foo=1&bar=2";
        let body = b"CallSid=CA1234567890ABCDE&Caller=%2B14158675310&Digits=1234&From=%2B14158675310&To=%2B18005551212";

        assert!(handler
            .verify_signature("0/KCTR6DLpKmkAf8muzZqo1nDgQ=", url, body)
            .unwrap());
        assert!(!handler
            .verify_signature("0/KCTR6DLpKmkAf8muzZqo1nDgX=", url, body)
            .unwrap());
    }

    #[test]
    fn test_verify_signature_without_token() {
        let handler = TwilioWebhookHandler::new();
        assert!(!handler.verify_signature("sig", "https://x", b"").unwrap());
    }
}
