//! Kotoba CLI - chat with the configured persona
//!
//! Demo loop and setup checks for the WhatsApp assistant, without needing
//! a public webhook endpoint.

mod chat;
mod check;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use kotoba::{AppConfig, MessagingIntegration, Responder, DEFAULT_CONFIG_FILE};
use kotoba_integration_whatsapp::{TwilioConfig, WhatsAppIntegration};

#[derive(Parser)]
#[command(name = "kotoba")]
#[command(about = "Kotoba CLI - persona chat and setup checks", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the persona config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive demo chat loop
    Chat,

    /// Generate one reply, optionally delivering it over WhatsApp
    Send {
        /// Message to respond to
        message: String,
        /// WhatsApp recipient (`whatsapp:+E.164`); prints locally when omitted
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Validate configuration, backend and credentials
    Check,

    /// Show the loaded configuration
    Config,
}

fn config_path(cli: &Cli) -> String {
    cli.config
        .clone()
        .or_else(|| std::env::var("KOTOBA_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let path = config_path(&cli);

    match cli.command {
        Commands::Chat => {
            let config = AppConfig::load(&path)?;
            let responder = Responder::from_config(&config)?;
            chat::run(&responder).await
        }
        Commands::Send { message, to } => {
            let config = AppConfig::load(&path)?;
            let responder = Responder::from_config(&config)?;
            let reply = responder.generate_response(&message).await;

            match to {
                Some(to) => {
                    let twilio = TwilioConfig::from_settings(&config.twilio)
                        .context("Twilio is not configured")?;
                    let integration = WhatsAppIntegration::new(twilio);
                    integration
                        .post_message(&to, &reply)
                        .await
                        .context("Failed to deliver message")?;
                    println!("{} {}", "Sent to".green(), to);
                }
                None => println!("{}", reply),
            }
            Ok(())
        }
        Commands::Check => check::run(&path).await,
        Commands::Config => {
            let config = AppConfig::load(&path)?;
            println!("{}", "Loaded configuration:".bold());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
