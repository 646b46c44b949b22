//! The record store: the single owner of the employee record sequence.
//!
//! [`RecordStore`] keeps records newest-first, persists the whole sequence
//! after every mutation and reports each successful change to a
//! [`Notifier`]. A mutation whose write fails leaves the in-memory
//! sequence unchanged.
//!
//! # Example
//!
//! ```
//! use employee_records::config::StoreConfig;
//! use employee_records::models::NewEmployee;
//! use employee_records::storage::MemoryStorage;
//! use employee_records::store::RecordStore;
//!
//! let config = StoreConfig {
//!     seed_demo_records: false,
//!     ..StoreConfig::default()
//! };
//! let mut store = RecordStore::open(MemoryStorage::new(), config)?;
//!
//! let created = store.create(NewEmployee {
//!     name: "Ayesha Khan".to_string(),
//!     email: "ayesha.khan@gmail.com".to_string(),
//!     phone: "+92 300 1234567".to_string(),
//!     role: "Manager".to_string(),
//!     salary: "120000".to_string(),
//!     ..NewEmployee::default()
//! })?;
//!
//! assert_eq!(store.list().len(), 1);
//! assert_eq!(created.salary, "120000.00");
//! assert_eq!(created.currency, "PKR");
//! # Ok::<(), employee_records::error::RecordError>(())
//! ```

mod collaborators;
mod demo;
mod persist;

pub use collaborators::{
    Confirm, DELETE_PROMPT, MemoryNotifier, Notifier, RECORD_ADDED, RECORD_DELETED,
    RECORD_UPDATED, TracingNotifier,
};
pub use demo::demo_records;
pub use persist::{decode_records, encode_records, load_records, save_records};

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::{RecordError, RecordResult};
use crate::models::{EmployeePatch, EmployeeRecord, NewEmployee};
use crate::query::{Projection, SearchField, filter};
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// Generates a fresh opaque record id.
pub fn generate_id() -> String {
    format!("id_{}", Uuid::new_v4().simple())
}

/// What a confirmed or declined delete did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed and the sequence persisted.
    Deleted(EmployeeRecord),
    /// The confirmation prompt was declined; nothing changed.
    Declined,
}

/// Owns the canonical record sequence and its persistence.
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
    storage: Box<dyn KeyValueStorage>,
    notifier: Box<dyn Notifier>,
    config: StoreConfig,
}

impl RecordStore {
    /// Opens a store over `storage`, loading whatever is persisted there.
    ///
    /// When nothing (or an empty array) is stored and
    /// `config.seed_demo_records` is set, the three demo records are
    /// written before returning.
    pub fn open<S>(storage: S, config: StoreConfig) -> RecordResult<Self>
    where
        S: KeyValueStorage + 'static,
    {
        let mut store = Self {
            records: Vec::new(),
            storage: Box::new(storage),
            notifier: Box::new(TracingNotifier),
            config,
        };
        store.load()?;

        if store.records.is_empty() && store.config.seed_demo_records {
            let seeded = demo_records();
            store.commit(seeded)?;
            info!(count = store.records.len(), "Seeded demo records into empty store");
        }

        Ok(store)
    }

    /// Opens a store using the backend selected by `config.data_dir`.
    ///
    /// A data directory selects [`FileStorage`]; otherwise records are kept
    /// in a fresh [`MemoryStorage`].
    pub fn from_config(config: StoreConfig) -> RecordResult<Self> {
        match config.data_dir.clone() {
            Some(dir) => Self::open(FileStorage::open(dir)?, config),
            None => Self::open(MemoryStorage::new(), config),
        }
    }

    /// Replaces the notification sink.
    pub fn with_notifier<N>(mut self, notifier: N) -> Self
    where
        N: Notifier + 'static,
    {
        self.notifier = Box::new(notifier);
        self
    }

    /// Re-reads the sequence from storage, replacing the in-memory copy.
    pub fn load(&mut self) -> RecordResult<()> {
        self.records = load_records(&*self.storage, &self.config.storage_key)?;
        Ok(())
    }

    /// Writes the current sequence to storage.
    pub fn save(&self) -> RecordResult<()> {
        save_records(&*self.storage, &self.config.storage_key, &self.records)
    }

    /// Returns every record, newest first.
    pub fn list(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &str) -> RecordResult<&EmployeeRecord> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| RecordError::NotFound { id: id.to_string() })
    }

    /// Filters the current sequence; see [`filter`].
    pub fn search(&self, query: &str, field: SearchField) -> Projection<'_> {
        filter(&self.records, query, field)
    }

    /// Validates `input`, assigns an id when none is given, prepends the
    /// record and persists.
    ///
    /// # Errors
    ///
    /// - `Validation` when a required field is empty, the salary is not a
    ///   number, or the supplied id is already taken.
    /// - `Persistence` when the write fails; the store is left unchanged.
    pub fn create(&mut self, mut input: NewEmployee) -> RecordResult<EmployeeRecord> {
        let id = match input.id.take().map(|id| id.trim().to_string()) {
            Some(id) if !id.is_empty() => {
                if self.records.iter().any(|record| record.id == id) {
                    return Err(RecordError::Validation {
                        field: "id".to_string(),
                        message: format!("'{}' already exists", id),
                    });
                }
                id
            }
            _ => generate_id(),
        };

        let record = input.into_record(id, &self.config.default_currency)?;

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(record.clone());
        next.extend(self.records.iter().cloned());
        self.commit(next)?;

        info!(record_id = %record.id, count = self.records.len(), "Record created");
        self.notifier.notify(RECORD_ADDED);
        Ok(record)
    }

    /// Merges `patch` over the record with `id` and persists.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no record has `id`; nothing is written.
    /// - `Validation` when the merged record is missing a required field.
    /// - `Persistence` when the write fails; the store is left unchanged.
    pub fn update(&mut self, id: &str, patch: &EmployeePatch) -> RecordResult<EmployeeRecord> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            warn!(record_id = id, "Update target not found");
            return Err(RecordError::NotFound { id: id.to_string() });
        };

        let updated = patch.apply(&self.records[index], &self.config.default_currency)?;

        let mut next = self.records.clone();
        next[index] = updated.clone();
        self.commit(next)?;

        info!(record_id = id, "Record updated");
        self.notifier.notify(RECORD_UPDATED);
        Ok(updated)
    }

    /// Removes the record with `id` once `confirm` accepts [`DELETE_PROMPT`].
    ///
    /// A confirmed delete persists the sequence even when no record
    /// matched, then reports `NotFound`.
    pub fn delete<C>(&mut self, id: &str, confirm: &C) -> RecordResult<DeleteOutcome>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            info!(record_id = id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.records.iter().find(|record| record.id == id).cloned();
        let next: Vec<EmployeeRecord> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        match removed {
            Some(record) => {
                info!(record_id = id, count = self.records.len(), "Record deleted");
                self.notifier.notify(RECORD_DELETED);
                Ok(DeleteOutcome::Deleted(record))
            }
            None => {
                warn!(record_id = id, "Delete target not found");
                Err(RecordError::NotFound { id: id.to_string() })
            }
        }
    }

    /// Persists `next` and adopts it only if the write succeeded.
    fn commit(&mut self, next: Vec<EmployeeRecord>) -> RecordResult<()> {
        save_records(&*self.storage, &self.config.storage_key, &next)?;
        self.records = next;
        Ok(())
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
