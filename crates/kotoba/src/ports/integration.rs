//! Platform Integration Port
//!
//! Abstract interface for messaging platforms (WhatsApp via Twilio, and any
//! future channel). Implementations live in separate crates
//! (e.g., kotoba-integration-whatsapp).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Messaging platform interface
#[async_trait]
pub trait MessagingIntegration: Send + Sync {
    /// Send a message to a recipient on the platform
    async fn post_message(&self, to: &str, content: &str) -> Result<(), DomainError>;

    /// Get the integration name (e.g., "whatsapp")
    fn name(&self) -> &str;

    /// Parse a platform-specific webhook payload into an event.
    ///
    /// Returns `None` if the event doesn't require action.
    fn handle_webhook(&self, payload: &[u8]) -> Result<Option<MessagingEvent>, DomainError>;

    /// Check if the integration is connected and healthy
    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(true)
    }
}

/// Events received from messaging platforms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagingEvent {
    /// A new inbound message
    MessageReceived {
        /// Platform message id (Twilio MessageSid)
        message_id: String,
        /// Sender address (e.g. `whatsapp:+1415...`)
        from: String,
        /// Receiver address (the bot's number)
        to: String,
        /// Sender display name, if the platform provides one
        sender_name: Option<String>,
        /// Message text
        content: String,
    },

    /// Delivery status callback for a previously sent message
    StatusUpdate {
        message_id: String,
        status: String,
    },
}

impl MessagingEvent {
    /// Get the message content if available
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::MessageReceived { content, .. } => Some(content),
            Self::StatusUpdate { .. } => None,
        }
    }

    /// Get the sender address if available
    pub fn from(&self) -> Option<&str> {
        match self {
            Self::MessageReceived { from, .. } => Some(from),
            Self::StatusUpdate { .. } => None,
        }
    }
}
