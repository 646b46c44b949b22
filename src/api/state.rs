//! Application state for the record store API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the one record store behind an async mutex, so each request's
/// store operation runs to completion before the next begins.
#[derive(Clone)]
pub struct AppState {
    /// The record store serving every request.
    store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    /// Creates a new application state owning `store`.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Locks the store for one operation.
    pub async fn store(&self) -> MutexGuard<'_, RecordStore> {
        self.store.lock().await
    }
}
