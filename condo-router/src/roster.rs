//! Static roster of authorized users and the authorization gate.

use crate::normalize::canonical_sender;
use condo_core::{AuthorizedUser, CondoError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize)]
struct RosterEntry {
    name: String,
    unit: String,
}

/// Immutable map from canonical sender identity to [`AuthorizedUser`].
/// Loaded once at startup; `authorize` is a pure lookup.
#[derive(Debug)]
pub struct Roster {
    users: HashMap<String, AuthorizedUser>,
}

impl Roster {
    pub fn new(users: impl IntoIterator<Item = AuthorizedUser>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|u| (u.sender_id.clone(), u))
                .collect(),
        }
    }

    /// Parses the roster JSON: an object keyed by canonical sender id with
    /// `{"name": ..., "unit": ...}` values.
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: HashMap<String, RosterEntry> = serde_json::from_str(raw)
            .map_err(|e| CondoError::Config(format!("roster: {}", e)))?;
        Ok(Self::new(entries.into_iter().map(|(sender_id, entry)| {
            AuthorizedUser {
                sender_id,
                name: entry.name,
                unit: entry.unit,
            }
        })))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The authorization gate: canonicalizes the sender identity and looks it
    /// up. No side effects; unauthorized senders never acquire state.
    pub fn authorize(&self, sender_id: &str) -> Option<&AuthorizedUser> {
        self.users.get(canonical_sender(sender_id))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
