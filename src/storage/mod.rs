//! The persistence boundary: a string key-value store.
//!
//! [`KeyValueStorage`] mirrors the browser `localStorage` contract:
//! synchronous access to string values by string key. Two backends are provided:
//! [`MemoryStorage`] for embedding and tests, and [`FileStorage`] for
//! durable storage under a directory.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::RecordResult;

/// A synchronous string key-value store.
///
/// Implementations surface failures as
/// [`RecordError::Persistence`](crate::error::RecordError::Persistence)
/// instead of dropping writes.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> RecordResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> RecordResult<()>;
}
