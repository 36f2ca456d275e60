//! Key-value persistence with atomic writes
//!
//! The ledger persists as an opaque string blob under a fixed key. `FileStore`
//! maps each key to a file in the data directory and writes atomically
//! (temp file, fsync, rename) so a crash mid-write cannot corrupt an
//! existing store.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{CashflowError, CashflowResult};

/// The storage key the ledger lives under
pub const LEDGER_KEY: &str = "cashflow_v2";

/// An opaque string value per key
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> CashflowResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> CashflowResult<()>;
}

/// File-backed store: one file per key under a base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CashflowResult<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            CashflowError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> CashflowResult<()> {
        let path = self.key_path(key);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CashflowError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Create temp file in same directory (important for atomic rename)
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| CashflowError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| CashflowError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| CashflowError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| CashflowError::Storage(format!("Failed to sync data: {}", e)))?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            CashflowError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CashflowResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CashflowResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
