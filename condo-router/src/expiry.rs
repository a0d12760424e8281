//! Inactivity notice sent when a session expires.

use crate::messages;
use async_trait::async_trait;
use condo_core::Transport;
use condo_session::ExpiryHook;
use std::sync::Arc;
use tracing::{error, info};

/// [`ExpiryHook`] that sends the fixed inactivity notice. The session store
/// has already cleared the session when this runs.
pub struct InactivityNotifier {
    transport: Arc<dyn Transport>,
}

impl InactivityNotifier {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ExpiryHook for InactivityNotifier {
    async fn session_expired(&self, sender_id: &str) {
        info!(sender_id = %sender_id, "Sending inactivity notice");
        if let Err(e) = self.transport.send_text(sender_id, messages::INACTIVITY).await {
            error!(error = %e, sender_id = %sender_id, "Failed to send inactivity notice");
        }
    }
}
