//! Message sink for the Tour of Heroes data layer.
//!
//! [`MessageService`] accumulates a human-readable audit trail of
//! data-access outcomes for display. It is append-only from any number of
//! callers, clearable, and readable in full.
//!
//! The sink is an explicitly passed collaborator: there is no global
//! instance. Clone the handle to share the same underlying log.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

/// Shared, insertion-ordered log of short messages.
///
/// Cloning yields another handle to the same log. The log has no size cap
/// and does no deduplication.
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<RwLock<Vec<String>>>,
}

impl MessageService {
    /// Create an empty message log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log.
    pub fn add(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(message = %message, "message added");
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Remove every message from the log.
    pub fn clear(&self) {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Snapshot of the current contents, oldest first.
    pub fn all(&self) -> Vec<String> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages currently held.
    pub fn len(&self) -> usize {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any held message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|m| m.contains(needle))
    }
}
