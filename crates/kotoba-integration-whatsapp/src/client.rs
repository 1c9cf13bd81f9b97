//! Twilio REST client for outbound WhatsApp messages

use std::time::Duration;

use kotoba::DomainError;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::TwilioConfig;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Client for the Twilio Messages API
#[derive(Clone)]
pub struct TwilioClient {
    client: Client,
    config: TwilioConfig,
}

#[derive(Deserialize)]
struct MessageResource {
    sid: String,
    status: String,
}

impl TwilioClient {
    /// Create a new client for the given account
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Send a WhatsApp message. Returns the created message SID.
    ///
    /// `to` is a `whatsapp:+E.164` address; the sender comes from config.
    pub async fn send_message(&self, to: &str, body: &str) -> Result<String, DomainError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        );

        let params = [
            ("From", self.config.whatsapp_from.as_str()),
            ("To", to),
            ("Body", body),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Twilio request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DomainError::ExternalService(format!(
                "Twilio API error {}: {}",
                status, body
            )));
        }

        let message: MessageResource = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Malformed Twilio response: {}", e))
        })?;

        debug!(sid = %message.sid, status = %message.status, "WhatsApp message queued");
        Ok(message.sid)
    }

    /// Verify the account is reachable with the configured credentials.
    pub async fn check_account(&self) -> Result<bool, DomainError> {
        let url = format!(
            "{}/Accounts/{}.json",
            TWILIO_API_BASE, self.config.account_sid
        );

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }
}
