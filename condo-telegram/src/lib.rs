//! # condo-telegram
//!
//! Telegram transport layer: [`TelegramTransport`] implements
//! [`condo_core::Transport`] via teloxide, and [`run_poll`] drives the
//! conversation router from the long-poll loop. Handles only Telegram
//! connectivity; no conversation logic.

mod adapter;
mod runner;

pub use adapter::{parse_chat_id, to_inbound_event, TelegramTransport};
pub use runner::run_poll;
