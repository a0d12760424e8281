//! Outbound transport abstraction.
//!
//! [`Transport`] is transport-agnostic; condo-telegram implements it via
//! teloxide, tests substitute a recording fake.

use crate::error::Result;
use crate::types::ArtifactHandle;
use async_trait::async_trait;

/// Abstraction for outbound chat operations. Implementations map to a
/// transport (e.g. Telegram).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a text message to the given sender identity.
    async fn send_text(&self, to: &str, text: &str) -> Result<()>;
    /// Sends a document, displayed under `artifact.filename`.
    async fn send_document(&self, to: &str, artifact: &ArtifactHandle) -> Result<()>;
    /// Shows a typing indicator. Best-effort; callers ignore failures.
    async fn send_typing(&self, to: &str) -> Result<()>;
}
