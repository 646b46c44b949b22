//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading store
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RecordError, RecordResult};

use super::types::StoreConfig;

/// Loads and provides access to store configuration.
///
/// # Example
///
/// ```no_run
/// use employee_records::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/records.yaml").unwrap();
/// println!("Storage key: {}", loader.config().storage_key);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StoreConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RecordResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RecordError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| RecordError::ConfigParseError {
            path: path_str,
            message,
        })?;

        Ok(Self { config })
    }

    /// Parses configuration from YAML text; an empty document yields the defaults.
    fn parse(content: &str) -> Result<StoreConfig, String> {
        if content.trim().is_empty() {
            return Ok(StoreConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> StoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/records.yaml"
    }

    fn write_temp_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.storage_key, "employee_records_v1");
        assert_eq!(config.default_currency, "PKR");
        assert!(config.seed_demo_records);
        assert_eq!(config.data_dir, Some(PathBuf::from("./data")));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/records.yaml");

        match result {
            Err(RecordError::ConfigNotFound { path }) => {
                assert!(path.contains("records.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let file = write_temp_config("seed_demo_records: [not, a, bool]\n");

        match ConfigLoader::load(file.path()) {
            Err(RecordError::ConfigParseError { path, message }) => {
                assert_eq!(path, file.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_file_yields_defaults() {
        let file = write_temp_config("");
        let loader = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(loader.config(), &StoreConfig::default());
    }

    #[test]
    fn test_load_overrides_selected_keys() {
        let file = write_temp_config("storage_key: staff\nseed_demo_records: false\n");
        let config = ConfigLoader::load(file.path()).unwrap().into_config();
        assert_eq!(config.storage_key, "staff");
        assert!(!config.seed_demo_records);
        assert_eq!(config.default_currency, "PKR");
    }
}
