//! Configuration types for the record store.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from a YAML configuration file.

use serde::Deserialize;
use std::path::PathBuf;

/// Default storage key for the record array.
pub const DEFAULT_STORAGE_KEY: &str = "employee_records_v1";

/// Currency applied when a record is saved without one.
pub const DEFAULT_CURRENCY: &str = "PKR";

/// Settings for a [`RecordStore`](crate::store::RecordStore).
///
/// Any key missing from the YAML file falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// The storage key holding the serialized record array.
    pub storage_key: String,
    /// The currency code used when a record has none.
    pub default_currency: String,
    /// Whether an empty store is seeded with demo records on open.
    pub seed_demo_records: bool,
    /// Directory for file-backed storage; `None` keeps records in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            seed_demo_records: true,
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "employee_records_v1");
        assert_eq!(config.default_currency, "PKR");
        assert!(config.seed_demo_records);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: StoreConfig = serde_yaml::from_str("default_currency: USD\n").unwrap();
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.seed_demo_records);
    }
}
