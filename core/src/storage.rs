//! Storage port and adapters for the persisted group collections.
//!
//! The engine only ever talks to `StoragePort`: one JSON blob per domain
//! key, read once on load and rewritten whole after every mutation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::config::{get_state_dir, load_config};

/// Key for the lead-table group collection.
pub const LEAD_GROUPS_KEY: &str = "lead-groups";
/// Key for the owner/listing-table group collection.
pub const OWNER_GROUPS_KEY: &str = "owner-groups";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read/write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("group serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory adapter, used by tests and as a no-persistence fallback.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed adapter: one `<key>.json` per key under the state directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open a store rooted at the configured state directory.
    pub fn open_default() -> Result<Self> {
        let config = load_config()?;
        let dir = get_state_dir(&config)?;
        Ok(Self::new(dir)?)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StoragePort for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        // Backup before writing
        if path.exists() {
            let backup = path.with_extension("json.bak");
            fs::copy(&path, backup)?;
        }
        fs::write(&path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set(LEAD_GROUPS_KEY, "[]").unwrap();
        assert_eq!(store.get(LEAD_GROUPS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        assert!(store.get(OWNER_GROUPS_KEY).unwrap().is_none());
        store.set(OWNER_GROUPS_KEY, r#"[{"name":"x"}]"#).unwrap();
        assert_eq!(
            store.get(OWNER_GROUPS_KEY).unwrap().as_deref(),
            Some(r#"[{"name":"x"}]"#)
        );
    }

    #[test]
    fn test_file_store_backs_up_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set(LEAD_GROUPS_KEY, "first").unwrap();
        store.set(LEAD_GROUPS_KEY, "second").unwrap();

        let backup = dir.path().join(format!("{}.json.bak", LEAD_GROUPS_KEY));
        assert_eq!(fs::read_to_string(backup).unwrap(), "first");
        assert_eq!(store.get(LEAD_GROUPS_KEY).unwrap().as_deref(), Some("second"));
    }
}
