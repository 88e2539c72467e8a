//! Key-value store backends.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EstimatorError, EstimatorResult};

/// A string key-value store with whole-value reads and writes.
pub trait KeyValueStore: Send {
    /// Reads a slot; `Ok(None)` means the slot has never been written.
    fn get(&self, slot: &str) -> EstimatorResult<Option<String>>;

    /// Overwrites a slot with `value`.
    fn set(&mut self, slot: &str, value: &str) -> EstimatorResult<()>;
}

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already written.
    pub fn with_slot(slot: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(slot.into(), value.into());
        Self { slots }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, slot: &str) -> EstimatorResult<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn set(&mut self, slot: &str, value: &str) -> EstimatorResult<()> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

/// A store keeping each slot as `<slot>.json` inside a directory.
///
/// Writes go to a temporary file that is then renamed over the slot file, so
/// a slot is always either the previous or the new value.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `directory`. The directory is created on
    /// first write.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Returns the file backing a slot.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.directory.join(format!("{}.json", slot))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, slot: &str) -> EstimatorResult<Option<String>> {
        let path = self.slot_path(slot);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "Read slot");
                Ok(Some(content))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(EstimatorError::StorageRead {
                slot: slot.to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn set(&mut self, slot: &str, value: &str) -> EstimatorResult<()> {
        let write_error = |err: std::io::Error| EstimatorError::StorageWrite {
            slot: slot.to_string(),
            message: err.to_string(),
        };

        fs::create_dir_all(&self.directory).map_err(write_error)?;

        let path = self.slot_path(slot);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(write_error)?;
        fs::rename(&tmp_path, &path).map_err(write_error)?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("log").unwrap(), None);

        store.set("log", "[]").unwrap();
        assert_eq!(store.get("log").unwrap(), Some("[]".to_string()));

        store.set("log", "[1]").unwrap();
        assert_eq!(store.get("log").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn test_memory_store_with_slot() {
        let store = MemoryStore::with_slot("log", "[]");
        assert_eq!(store.get("log").unwrap(), Some("[]".to_string()));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("log").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("log", "first").unwrap();
        store.set("log", "second").unwrap();

        assert_eq!(store.get("log").unwrap(), Some("second".to_string()));
        assert!(store.slot_path("log").exists());
        assert!(!store.slot_path("log").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be makes every write fail.
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let mut store = FileStore::new(&blocker);
        let result = store.set("log", "[]");
        match result {
            Err(EstimatorError::StorageWrite { slot, .. }) => assert_eq!(slot, "log"),
            other => panic!("Expected StorageWrite error, got {:?}", other),
        }
    }
}
