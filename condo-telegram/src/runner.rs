//! Long-poll runner: converts teloxide messages to inbound events and hands
//! them to the conversation router, one spawned task per message. The
//! router's per-sender lock serializes the spawned tasks, so two events for
//! one sender never mutate its session concurrently; it does not promise a
//! strict arrival order between tasks racing for the lock.

use anyhow::Result;
use condo_router::ConversationRouter;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapter::to_inbound_event;

/// Starts the long-poll loop with the given bot and router. Runs until the
/// poll loop terminates.
#[instrument(skip(bot, router))]
pub async fn run_poll(bot: teloxide::Bot, router: Arc<ConversationRouter>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Connected to Telegram");
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let router = router.clone();

        async move {
            match to_inbound_event(&msg) {
                Some(event) => {
                    info!(
                        sender_id = %event.sender_id,
                        message_id = %event.message_id,
                        "Received message"
                    );
                    tokio::spawn(async move {
                        if let Err(e) = router.handle_event(&event).await {
                            error!(error = %e, sender_id = %event.sender_id, "Router failed");
                        }
                    });
                }
                None => {
                    info!(chat_id = msg.chat.id.0, "Received non-text message");
                }
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
