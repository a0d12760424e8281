//! Adapters between teloxide types and the core transport seam.

use async_trait::async_trait;
use condo_core::{ArtifactHandle, CondoError, InboundEvent, Result, Transport};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, InputFile};

/// Thin wrapper around `teloxide::Bot` implementing the core [`Transport`].
pub struct TelegramTransport {
    bot: teloxide::Bot,
}

impl TelegramTransport {
    /// Wraps an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// The underlying teloxide Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Parses a sender identity into a Telegram chat id. Sender ids on this
/// transport are the numeric chat id rendered as a string.
pub fn parse_chat_id(s: &str) -> Result<i64> {
    s.parse()
        .map_err(|_| CondoError::Transport(format!("Invalid chat id: {}", s)))
}

/// Converts a teloxide message into a core [`InboundEvent`]. Non-text
/// messages carry nothing the router can act on and yield `None`.
pub fn to_inbound_event(msg: &teloxide::types::Message) -> Option<InboundEvent> {
    let text = msg.text()?;
    Some(InboundEvent {
        sender_id: msg.chat.id.0.to_string(),
        body: text.to_string(),
        message_id: msg.id.to_string(),
    })
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_text(&self, to: &str, text: &str) -> Result<()> {
        let chat = ChatId(parse_chat_id(to)?);
        self.bot
            .send_message(chat, text.to_string())
            .await
            .map_err(|e| CondoError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, to: &str, artifact: &ArtifactHandle) -> Result<()> {
        let chat = ChatId(parse_chat_id(to)?);
        let file = InputFile::file(artifact.path.clone()).file_name(artifact.filename.clone());
        self.bot
            .send_document(chat, file)
            .await
            .map_err(|e| CondoError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, to: &str) -> Result<()> {
        let chat = ChatId(parse_chat_id(to)?);
        self.bot
            .send_chat_action(chat, ChatAction::Typing)
            .await
            .map_err(|e| CondoError::Transport(e.to_string()))?;
        Ok(())
    }
}
