//! Configuration loading and management for the record store.
//!
//! This module loads store settings (storage key, default currency,
//! demo seeding, data directory) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_records::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/records.yaml").unwrap();
//! println!("Default currency: {}", config.config().default_currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_CURRENCY, DEFAULT_STORAGE_KEY, StoreConfig};
