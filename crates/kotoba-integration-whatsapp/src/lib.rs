//! WhatsApp Integration for Kotoba
//!
//! This crate provides WhatsApp platform integration via the Twilio REST
//! API for the Kotoba persona assistant.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kotoba_integration_whatsapp::{TwilioConfig, WhatsAppIntegration};
//!
//! let config = TwilioConfig::from_env()?;
//! let integration = WhatsAppIntegration::new(config);
//! ```

mod client;
mod config;
mod integration;
mod webhook;

pub use client::TwilioClient;
pub use config::TwilioConfig;
pub use integration::WhatsAppIntegration;
pub use webhook::{TwilioWebhookHandler, WebhookPayload};
