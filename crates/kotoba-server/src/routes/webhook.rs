//! Webhook Route - inbound WhatsApp messages
//!
//! Twilio posts form-encoded payloads here; the reply goes back as TwiML on
//! the same request. Per-message failures never surface as HTTP errors: a
//! failed generation degrades to the responder's fallback text, and an
//! unparseable payload is acknowledged with an empty TwiML document.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use kotoba::MessagingEvent;
use tracing::{debug, info, warn};

use crate::twiml;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(handle_webhook))
}

async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !verify_signature(&state, &headers, &body) {
        warn!("Rejected webhook with invalid signature");
        return (StatusCode::FORBIDDEN, "invalid signature").into_response();
    }

    let event = match state.webhook_handler.parse_event(&body) {
        Ok(Some(event)) => event,
        Ok(None) => {
            debug!("Webhook payload required no action");
            return twiml_response(twiml::empty_response());
        }
        Err(e) => {
            warn!(error = %e, "Failed to parse webhook payload");
            return twiml_response(twiml::empty_response());
        }
    };

    match event {
        MessagingEvent::MessageReceived {
            message_id,
            from,
            content,
            sender_name,
            ..
        } => {
            info!(
                message_id = %message_id,
                from = %from,
                sender = %sender_name.as_deref().unwrap_or("unknown"),
                "Inbound WhatsApp message"
            );

            let reply = state.responder.generate_response(&content).await;
            twiml_response(twiml::message_response(&reply))
        }
        MessagingEvent::StatusUpdate { message_id, status } => {
            debug!(message_id = %message_id, status = %status, "Delivery status update");
            twiml_response(twiml::empty_response())
        }
    }
}

fn verify_signature(state: &AppState, headers: &HeaderMap, body: &[u8]) -> bool {
    let Some(ref url) = state.webhook_url else {
        // Validation not configured; accept.
        return true;
    };

    let signature = headers
        .get("X-Twilio-Signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    state
        .webhook_handler
        .verify_signature(signature, url, body)
        .unwrap_or(false)
}

fn twiml_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}
