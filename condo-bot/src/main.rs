//! Binary for the condominium document assistant over Telegram.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use condo_core::{init_tracing, ArtifactHandle, Transport};
use condo_docs::FsDocumentStore;
use condo_router::{ConversationRouter, InactivityNotifier, Roster};
use condo_session::InMemorySessions;
use condo_telegram::{run_poll, TelegramTransport};
use config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "condo-bot", about = "Condominium document assistant bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot against Telegram.
    Run {
        /// Bot token; falls back to the BOT_TOKEN environment variable.
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(AppConfig::from_env(token)?).await,
    }
}

async fn run(config: AppConfig) -> Result<()> {
    init_tracing(config.log_file.as_deref())?;

    let roster = Arc::new(Roster::from_file(&config.roster_file)?);
    if roster.is_empty() {
        warn!(roster_file = %config.roster_file.display(), "Roster is empty; nobody can use the bot");
    }
    info!(
        users = roster.len(),
        data_dir = %config.data_dir.display(),
        timeout_ms = config.inactivity_timeout.as_millis() as u64,
        "Starting condo-bot"
    );

    let bot = teloxide::Bot::new(config.bot_token.clone());
    let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::new(bot.clone()));
    let sessions = Arc::new(InMemorySessions::new(
        config.inactivity_timeout,
        Arc::new(InactivityNotifier::new(transport.clone())),
    ));
    let documents = Arc::new(FsDocumentStore::new(config.data_dir.clone()));

    let mut router = ConversationRouter::new(roster, sessions, documents, transport);
    if let Some(image) = &config.greeting_image {
        if image.is_file() {
            let filename = image
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("assistant.png")
                .to_string();
            router = router.with_greeting_image(ArtifactHandle::new(image.clone(), filename));
        } else {
            warn!(path = %image.display(), "GREETING_IMAGE does not exist; skipping");
        }
    }

    run_poll(bot, Arc::new(router)).await
}
