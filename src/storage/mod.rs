//! Storage layer for cashflow-cli
//!
//! Provides key-value persistence with atomic writes and the entry store
//! built on top of it.

pub mod entries;
pub mod kv;

pub use entries::EntryStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore, LEDGER_KEY};

use crate::config::paths::CashflowPaths;
use crate::error::CashflowResult;

/// Open the ledger at the configured data directory
pub fn open_ledger(paths: &CashflowPaths) -> CashflowResult<EntryStore<FileStore>> {
    paths.ensure_directories()?;
    Ok(EntryStore::open(FileStore::new(paths.data_dir())))
}
