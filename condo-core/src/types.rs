//! Core types: inbound event, roster entry, document categories and artifacts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One inbound chat event as seen by the router. The transport adapter maps
/// its native message type into this; the core never looks at anything else.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    /// Transport-level sender identity (may carry a transport suffix).
    pub sender_id: String,
    pub body: String,
    /// Opaque per-message id, used for re-delivery deduplication.
    pub message_id: String,
}

/// A roster entry: who the sender is and which unit they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedUser {
    /// Canonical sender identity (transport suffix stripped).
    pub sender_id: String,
    pub name: String,
    pub unit: String,
}

/// A class of deliverable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    /// Per-unit billing statements, one batch per unit (manifest-driven).
    Billing,
    /// Monthly financial report, selected by month number.
    MonthlyReport,
    /// Per-unit notices, one batch per unit (manifest-driven).
    Notices,
    /// Static shared expense forecast.
    ExpenseForecast,
    /// Static shared reserve fund statements (fixed batch).
    ReserveFund,
    /// Static shared assembly minutes archive.
    AssemblyMinutes,
}

/// A document lookup request. `period` is only meaningful for
/// [`DocumentCategory::MonthlyReport`] (month number 1..=12).
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    pub category: DocumentCategory,
    pub unit: String,
    pub period: Option<u32>,
}

/// A retrievable artifact: where it lives and the filename shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    pub path: PathBuf,
    pub filename: String,
}

impl ArtifactHandle {
    pub fn new(path: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
        }
    }
}
