use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

mod routes;
mod twiml;

use kotoba::{AppConfig, MessagingIntegration, Responder, DEFAULT_CONFIG_FILE};
use kotoba_integration_whatsapp::{TwilioConfig, TwilioWebhookHandler, WhatsAppIntegration};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub webhook_handler: Arc<TwilioWebhookHandler>,
    /// Public webhook url; set to enforce signature validation
    pub webhook_url: Option<String>,
    pub integration: Option<Arc<WhatsAppIntegration>>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    backend: String,
    twilio: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    let twilio = match &state.integration {
        Some(integration) => match integration.health_check().await {
            Ok(true) => "up",
            _ => "down",
        },
        None => "disabled",
    };

    Json(HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "Kotoba is running - {} is listening",
            state.responder.persona().name
        ),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.responder.provider().provider_name().to_string(),
        twilio: twilio.to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🗣️  Kotoba server initializing...");

    // Startup errors are fatal: a misconfiguration must surface here,
    // not at the first incoming message.
    let config_path =
        std::env::var("KOTOBA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = AppConfig::load(&config_path)?;
    let responder = Arc::new(Responder::from_config(&config)?);

    tracing::info!(
        persona = %config.persona.name,
        backend = %config.settings.llm_backend,
        model = %config.settings.model,
        "Persona loaded"
    );

    // Twilio is optional: without credentials the server still answers
    // webhooks with TwiML, it just can't validate signatures or health-check
    // the account.
    let validate_signature = std::env::var("TWILIO_VALIDATE_SIGNATURE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let (integration, webhook_handler) = match TwilioConfig::from_settings(&config.twilio) {
        Ok(twilio_config) => {
            let twilio_config = twilio_config.with_signature_validation(validate_signature);
            let handler = if validate_signature {
                TwilioWebhookHandler::with_auth_token(twilio_config.auth_token.clone())
            } else {
                TwilioWebhookHandler::new()
            };
            tracing::info!("📱 WhatsApp integration initialized");
            (
                Some(Arc::new(WhatsAppIntegration::new(twilio_config))),
                Arc::new(handler),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "⚠️  Twilio not configured - signature validation disabled");
            (None, Arc::new(TwilioWebhookHandler::new()))
        }
    };

    // Signature enforcement needs the public url Twilio signed against.
    let webhook_url = std::env::var("KOTOBA_WEBHOOK_URL").ok();
    let enforce = validate_signature && integration.is_some();
    if enforce && webhook_url.is_none() {
        tracing::warn!("⚠️  TWILIO_VALIDATE_SIGNATURE set but KOTOBA_WEBHOOK_URL missing - validation disabled");
    }

    let state = AppState {
        responder,
        webhook_handler,
        webhook_url: if enforce { webhook_url } else { None },
        integration,
    };

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::webhook::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind = std::env::var("KOTOBA_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;

    tracing::info!(addr = %bind, "✅ Kotoba server ready - send a WhatsApp message");

    axum::serve(listener, router).await?;
    Ok(())
}
