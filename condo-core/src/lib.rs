//! # condo-core
//!
//! Core types and traits for the condominium document assistant: the
//! [`Transport`] seam, inbound event and roster types, the error taxonomy,
//! and tracing initialization. Transport-agnostic; used by every other crate
//! in the workspace.

pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use error::{CondoError, DocumentError, Result};
pub use logger::init_tracing;
pub use transport::Transport;
pub use types::{
    ArtifactHandle, AuthorizedUser, DocumentCategory, DocumentRequest, InboundEvent,
};
