//! # condo-router
//!
//! The conversational core: roster gate, input normalization, menu catalog,
//! the declarative transition table, and the dispatcher that executes
//! transitions against the [`condo_core::Transport`], [`condo_docs::DocumentStore`]
//! and [`condo_session::SessionStore`] seams.

mod expiry;
mod menu;
pub mod messages;
mod normalize;
mod roster;
mod route;
mod router;


pub use expiry::InactivityNotifier;
pub use menu::{next_state, MenuItem, MENU};
pub use normalize::{canonical_sender, normalize_input};
pub use roster::Roster;
pub use route::{route, Action};
pub use router::ConversationRouter;
