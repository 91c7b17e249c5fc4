use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Storage;
use crate::error::JournalError;

const STORE_VERSION: u8 = 1;

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u8,
    entries: HashMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// File-backed key-value store: one JSON document holding every key.
/// The whole document is rewritten on each mutation, which keeps the
/// on-disk state consistent with the last completed operation.
pub struct FileStorage {
    path: PathBuf,
    store: StoreFile,
}

impl FileStorage {
    /// Open an existing store file or start empty. An unreadable or
    /// malformed file is treated as recoverable: the store starts from
    /// defaults and the file is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let path = path.into();
        let store = if path.exists() {
            let data = fs::read(&path)?;
            match serde_json::from_slice::<StoreFile>(&data) {
                Ok(store) => store,
                Err(e) => {
                    log::warn!(
                        "Malformed store file {:?}, starting from defaults: {}",
                        path,
                        e
                    );
                    StoreFile::default()
                }
            }
        } else {
            StoreFile::default()
        };

        Ok(Self { path, store })
    }

    fn flush(&self) -> Result<(), JournalError> {
        let data = serde_json::to_vec_pretty(&self.store)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, JournalError> {
        Ok(self.store.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), JournalError> {
        self.store
            .entries
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), JournalError> {
        self.store.entries.remove(key);
        self.flush()
    }
}
