//! Setup check - validates config, backend and credentials
//!
//! The CLI rendition of the usual "is my bot wired up" checklist: config
//! file present and valid, backend identifier known, credentials in the
//! environment.

use anyhow::{bail, Result};
use colored::Colorize;

use kotoba::{backends, AppConfig, Backend};
use kotoba_integration_whatsapp::TwilioConfig;

fn pass(label: &str) {
    println!("  {} {}", "✅".green(), label);
}

fn fail(label: &str, detail: &str) {
    println!("  {} {} - {}", "❌".red(), label, detail.dimmed());
}

fn warn(label: &str, detail: &str) {
    println!("  {} {} - {}", "⚠️ ".yellow(), label, detail.dimmed());
}

/// Run all checks. Fails with exit code 1 when a required check fails.
pub async fn run(config_path: &str) -> Result<()> {
    let mut ok = true;

    println!("{}", "🔍 Checking configuration...".bold());
    let config = match AppConfig::load(config_path) {
        Ok(config) => {
            pass(&format!("{} found and valid", config_path));
            Some(config)
        }
        Err(e) => {
            fail(config_path, &e.to_string());
            ok = false;
            None
        }
    };

    if let Some(config) = &config {
        match config.backend() {
            Ok(backend) => pass(&format!(
                "backend '{}' with model '{}'",
                backend, config.settings.model
            )),
            Err(e) => {
                fail("settings.llm_backend", &e.to_string());
                ok = false;
            }
        }

        println!("{}", "🔍 Checking credentials...".bold());
        match config.backend() {
            Ok(Backend::OpenAi) => {
                if std::env::var(backends::OPENAI_API_KEY_VAR).is_ok() {
                    pass(backends::OPENAI_API_KEY_VAR);
                } else {
                    fail(backends::OPENAI_API_KEY_VAR, "not set");
                    ok = false;
                }
            }
            Ok(backend) => {
                warn(
                    &format!("backend '{}'", backend),
                    "stub backend, replies with a fixed fallback",
                );
            }
            Err(_) => {}
        }

        println!("{}", "🔍 Checking Twilio...".bold());
        match TwilioConfig::from_settings(&config.twilio) {
            Ok(twilio) => {
                pass(&format!("credentials for {}", twilio.account_sid));
                pass(&format!("sender {}", twilio.whatsapp_from));
            }
            Err(e) => {
                // The demo loop works without Twilio; only delivery needs it.
                warn("Twilio", &e.to_string());
            }
        }
    }

    if ok {
        println!("{}", "✅ Setup looks good!".green().bold());
        Ok(())
    } else {
        bail!("setup check failed");
    }
}
