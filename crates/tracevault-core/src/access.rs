//! Access log: append-only audit trail of ledger mutations.
//!
//! One entry is recorded per successful append. Entries are never edited
//! or deleted, and the genesis block is not logged (no prior actor).

use serde::{Deserialize, Serialize};

use crate::types::Actor;

/// Action label recorded for a ledger append.
pub const ACTION_STORE: &str = "store_data";

/// Who performed what ledger action, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub user: String,
    pub role: String,
    /// Free-form action label, e.g. [`ACTION_STORE`].
    pub action: String,
    /// Wall-clock capture at record time (Unix milliseconds).
    pub timestamp_ms: i64,
}

/// Append-only sequence of access entries, owned by one ledger instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessLog {
    entries: Vec<AccessLogEntry>,
}

impl AccessLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one action. Entries keep insertion order.
    pub fn record(&mut self, actor: &Actor, action: &str, timestamp_ms: i64) {
        self.entries.push(AccessLogEntry {
            user: actor.user.clone(),
            role: actor.role.clone(),
            action: action.to_string(),
            timestamp_ms,
        });
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[AccessLogEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
