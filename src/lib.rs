//! Core engine for a personal trading journal.
//!
//! The [`metrics`] module holds the pure performance calculations; the
//! [`stores`] own trades/accounts, journal entries and goals and keep
//! account balances consistent under mutation; [`storage`] is the
//! injected key-value persistence boundary.

pub mod error;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod stores;

pub use error::JournalError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageHandle};
pub use stores::{GoalsStore, JournalStore, TradeStore};
