//! # condo-session
//!
//! Per-sender conversation state: the [`SessionStore`] seam and its in-memory
//! implementation. Owns the session map, re-delivery dedup ids, per-sender
//! serialization locks, and the inactivity expiry timers.

mod store;


pub use store::{ConvState, ExpiryHook, InMemorySessions, SessionStore};
