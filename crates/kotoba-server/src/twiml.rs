//! TwiML rendering
//!
//! Twilio consumes the webhook reply as a TwiML document; a `<Message>`
//! element queues an outbound message on the same conversation.

/// TwiML document replying with a single message.
pub fn message_response(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape(text)
    )
}

/// TwiML document with no reply (acknowledges the webhook).
pub fn empty_response() -> String {
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response></Response>".to_string()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response() {
        let twiml = message_response("Hello!");
        assert_eq!(
            twiml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Hello!</Message></Response>"
        );
    }

    #[test]
    fn test_escaping() {
        let twiml = message_response("a < b & b > c");
        assert!(twiml.contains("a &lt; b &amp; b &gt; c"));
        assert!(!twiml.contains("a < b"));
    }

    #[test]
    fn test_empty_response() {
        assert!(empty_response().contains("<Response></Response>"));
    }
}
