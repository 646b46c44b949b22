//! External collaborators invoked by the record store.
//!
//! The store reports each successful mutation to a [`Notifier`] and asks a
//! [`Confirm`] implementation before deleting anything.

use std::sync::{Arc, Mutex};

use tracing::info;

/// Status message sent after a record is created.
pub const RECORD_ADDED: &str = "Record added";

/// Status message sent after a record is updated.
pub const RECORD_UPDATED: &str = "Record updated";

/// Status message sent after a record is deleted.
pub const RECORD_DELETED: &str = "Record deleted";

/// Prompt passed to the confirmation collaborator before a delete.
pub const DELETE_PROMPT: &str = "Delete this record?";

/// Receives short human-readable status messages.
pub trait Notifier: Send + Sync {
    /// Delivers one status message.
    fn notify(&self, message: &str);
}

/// Emits every status message as a `tracing` info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(notification = message, "Store notification");
    }
}

/// Keeps every status message in memory.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Answers a yes/no prompt before a destructive action.
pub trait Confirm {
    /// Returns true when the user accepts `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
