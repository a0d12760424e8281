//! Session map, dedup guard, and inactivity timers.
//!
//! One entry per sender identity. Every accepted event that keeps the session
//! alive must `touch` it; `touch` aborts the previous expiry task and
//! schedules a new one. Expiry runs under the same per-sender serialization
//! lock as inbound processing, so a timer never fires in the middle of a
//! handler turn for its own sender.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Conversation state, one per live session. Absence of a session is the
/// implicit initial/terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvState {
    MainMenu,
    /// Generic submenu after a per-unit batch send ("0 to go back").
    CategoryMenu,
    /// Month picker for periodic reports.
    PeriodSelection,
    /// After a period document was sent ("0" re-shows the picker).
    PeriodResultNavigation,
    /// Leaf reached after a one-shot document send ("0 to go back").
    TerminalInfoMenu,
}

/// Called when a session expires from inactivity, after the session has been
/// cleared. Implementations send the user-facing inactivity notice.
#[async_trait]
pub trait ExpiryHook: Send + Sync {
    async fn session_expired(&self, sender_id: &str);
}

/// Per-sender conversation state store.
///
/// `serial_lock` hands out the per-sender mutex that serializes all
/// processing for one sender, inbound events and expiry alike. Callers must
/// hold it across a whole processing turn.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current conversation state, if the sender has a live session with one.
    async fn get(&self, sender_id: &str) -> Option<ConvState>;
    /// Sets the conversation state, creating the session entry if needed.
    async fn set(&self, sender_id: &str, state: ConvState);
    /// Dedup guard: false exactly when `message_id` equals the last accepted
    /// id for this sender; otherwise records it and returns true.
    async fn accept(&self, sender_id: &str, message_id: &str) -> bool;
    /// Removes the whole session atomically: state, dedup id, and timer.
    async fn clear(&self, sender_id: &str);
    /// Cancels any pending expiry and schedules a new one. No-op when the
    /// sender has no session entry.
    async fn touch(&self, sender_id: &str);
    /// The serialization lock for this sender.
    async fn serial_lock(&self, sender_id: &str) -> Arc<Mutex<()>>;
}

#[derive(Default)]
struct Entry {
    state: Option<ConvState>,
    last_message_id: Option<String>,
    /// Bumped on every touch; a sleeping expiry task only fires if its epoch
    /// still matches (abort alone can lose the race with a task already past
    /// its sleep).
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

struct Inner {
    timeout: Duration,
    hook: Arc<dyn ExpiryHook>,
    sessions: Mutex<HashMap<String, Entry>>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// In-memory [`SessionStore`]. Sessions are deliberately not persisted; a
/// process restart drops them all.
pub struct InMemorySessions {
    inner: Arc<Inner>,
}

impl InMemorySessions {
    pub fn new(timeout: Duration, hook: Arc<dyn ExpiryHook>) -> Self {
        Self {
            inner: Arc::new(Inner {
                timeout,
                hook,
                sessions: Mutex::new(HashMap::new()),
                locks: Mutex::new(HashMap::new()),
            }),
        }
    }
}

impl Inner {
    async fn serial_lock(&self, sender_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(sender_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Expiry body: serialized with inbound processing, fires only if the
    /// epoch is still current, clears the entry before notifying.
    async fn expire(self: Arc<Self>, sender_id: String, epoch: u64) {
        let lock = self.serial_lock(&sender_id).await;
        let _guard = lock.lock().await;

        let fired = {
            let mut sessions = self.sessions.lock().await;
            match sessions.get(&sender_id) {
                Some(entry) if entry.epoch == epoch => {
                    sessions.remove(&sender_id);
                    true
                }
                _ => false,
            }
        };

        if fired {
            info!(sender_id = %sender_id, "Session expired from inactivity");
            self.hook.session_expired(&sender_id).await;
        } else {
            debug!(sender_id = %sender_id, "Stale expiry task skipped");
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessions {
    async fn get(&self, sender_id: &str) -> Option<ConvState> {
        let sessions = self.inner.sessions.lock().await;
        sessions.get(sender_id).and_then(|entry| entry.state)
    }

    async fn set(&self, sender_id: &str, state: ConvState) {
        let mut sessions = self.inner.sessions.lock().await;
        let entry = sessions.entry(sender_id.to_string()).or_default();
        entry.state = Some(state);
    }

    async fn accept(&self, sender_id: &str, message_id: &str) -> bool {
        let mut sessions = self.inner.sessions.lock().await;
        let entry = sessions.entry(sender_id.to_string()).or_default();
        if entry.last_message_id.as_deref() == Some(message_id) {
            debug!(sender_id = %sender_id, message_id = %message_id, "Duplicate event dropped");
            false
        } else {
            entry.last_message_id = Some(message_id.to_string());
            true
        }
    }

    async fn clear(&self, sender_id: &str) {
        let mut sessions = self.inner.sessions.lock().await;
        if let Some(entry) = sessions.remove(sender_id) {
            if let Some(timer) = entry.timer {
                timer.abort();
            }
            debug!(sender_id = %sender_id, "Session cleared");
        }
    }

    async fn touch(&self, sender_id: &str) {
        let mut sessions = self.inner.sessions.lock().await;
        let Some(entry) = sessions.get_mut(sender_id) else {
            return;
        };
        entry.epoch += 1;
        if let Some(timer) = entry.timer.take() {
            timer.abort();
        }
        let epoch = entry.epoch;
        let inner = Arc::clone(&self.inner);
        let timeout = self.inner.timeout;
        let sender = sender_id.to_string();
        entry.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            inner.expire(sender, epoch).await;
        }));
    }

    async fn serial_lock(&self, sender_id: &str) -> Arc<Mutex<()>> {
        self.inner.serial_lock(sender_id).await
    }
}
