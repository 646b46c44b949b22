//! In-process storage backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{RecordError, RecordResult};

use super::KeyValueStorage;

/// A `HashMap`-backed store.
///
/// Clones share the same underlying map, so a handle kept outside the
/// record store observes every write the store makes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one key.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut items) = storage.items.write() {
            items.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> RecordResult<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| RecordError::persistence(key, e))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> RecordResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| RecordError::persistence(key, e))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
