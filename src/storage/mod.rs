//! Persistence boundary. The stores read their collections from an
//! injected key-value adapter at startup and write them back on every
//! mutation; values are JSON documents keyed by the names below.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::JournalError;

/// Logical collection keys, shared with the data produced by earlier
/// versions of the journal.
pub mod keys {
    pub const ACCOUNTS: &str = "trade_journal_accounts";
    pub const TRADES: &str = "trade_journal_trades";
    pub const CUSTOM_PAIRS: &str = "trade_journal_custom_pairs";
    pub const SELECTED_ACCOUNT: &str = "trade_journal_selected_account";
    pub const JOURNAL_ENTRIES: &str = "trade_journal_entries";
    pub const GOALS: &str = "trade_journal_goals";
}

/// A string key-value store. Values under the collection keys are JSON;
/// the selected-account key holds a bare id.
pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, JournalError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), JournalError>;
    fn remove(&mut self, key: &str) -> Result<(), JournalError>;
}

/// Cloneable handle to a shared storage backend. Store constructors take
/// one of these, so the same backend can serve every store while writer
/// access stays serialized.
#[derive(Clone)]
pub struct StorageHandle {
    inner: Arc<Mutex<dyn Storage>>,
}

impl StorageHandle {
    pub fn new<S: Storage + 'static>(backend: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(backend)),
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, JournalError> {
        self.lock()?.get(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), JournalError> {
        self.lock()?.set(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<(), JournalError> {
        self.lock()?.remove(key)
    }

    /// Read and deserialize a collection, degrading to the default on a
    /// missing key or malformed document. Hydration must never fail hard:
    /// the worst case is starting from an empty collection.
    pub fn read_collection<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Malformed data under '{}', using defaults: {}", key, e);
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("Failed to read '{}', using defaults: {}", key, e);
                T::default()
            }
        }
    }

    /// Serialize and write back the full collection for one entity type.
    pub fn write_collection<T: Serialize>(&self, key: &str, value: &T) -> Result<(), JournalError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    fn lock(&self) -> Result<MutexGuard<'_, dyn Storage + 'static>, JournalError> {
        self.inner
            .lock()
            .map_err(|e| JournalError::Storage(format!("Storage lock poisoned: {}", e)))
    }
}
