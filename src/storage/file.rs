//! Directory-backed storage backend.
//!
//! Each key maps to `<dir>/<key>.json`. Writes land in a sibling temporary
//! file first and are renamed into place, so a crash mid-write leaves the
//! previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RecordError, RecordResult};

use super::KeyValueStorage;

/// Stores each key as a JSON file inside one directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> RecordResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| RecordError::persistence(&dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    /// Returns the directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> RecordResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(RecordError::persistence(key, "key is not a valid file name"));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> RecordResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RecordError::persistence(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> RecordResult<()> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, value).map_err(|e| RecordError::persistence(key, e))?;
        fs::rename(&staging, &path).map_err(|e| RecordError::persistence(key, e))?;

        debug!(key = key, path = %path.display(), bytes = value.len(), "Wrote storage key");
        Ok(())
    }
}
