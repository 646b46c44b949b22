//! Reading and writing the record array at the persistence boundary.
//!
//! The whole sequence lives under one key as a JSON array. An absent or
//! malformed value reads as an empty sequence; storage I/O failures are
//! returned as errors.

use tracing::{debug, warn};

use crate::error::{RecordError, RecordResult};
use crate::models::EmployeeRecord;
use crate::storage::KeyValueStorage;

/// Decodes a stored JSON array. Anything unreadable decodes as empty.
pub fn decode_records(key: &str, raw: Option<&str>) -> Vec<EmployeeRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<EmployeeRecord>>(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key = key, error = %e, "Stored records are malformed; treating as empty");
            Vec::new()
        }
    }
}

/// Encodes records as the JSON array persisted under the storage key.
pub fn encode_records(key: &str, records: &[EmployeeRecord]) -> RecordResult<String> {
    serde_json::to_string(records).map_err(|e| RecordError::persistence(key, e))
}

/// Reads the record array stored under `key`.
pub fn load_records(storage: &dyn KeyValueStorage, key: &str) -> RecordResult<Vec<EmployeeRecord>> {
    let raw = storage.get_item(key)?;
    let records = decode_records(key, raw.as_deref());
    debug!(key = key, count = records.len(), "Loaded records");
    Ok(records)
}

/// Writes `records` under `key`, replacing the previous array.
pub fn save_records(
    storage: &dyn KeyValueStorage,
    key: &str,
    records: &[EmployeeRecord],
) -> RecordResult<()> {
    let encoded = encode_records(key, records)?;
    storage.set_item(key, &encoded)?;
    debug!(key = key, count = records.len(), "Saved records");
    Ok(())
}
