//! Path management for cashflow-cli
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories`
//!    (Linux: `~/.config/cashflow`, macOS: `~/Library/Application Support/cashflow`,
//!    Windows: `%APPDATA%\cashflow`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{CashflowError, CashflowResult};

/// Manages all paths used by cashflow-cli
#[derive(Debug, Clone)]
pub struct CashflowPaths {
    /// Base directory for all cashflow data
    base_dir: PathBuf,
}

impl CashflowPaths {
    /// Create a new CashflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> CashflowResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("CASHFLOW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the ledger store
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> CashflowResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashflowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashflowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path for the current platform
fn resolve_default_path() -> CashflowResult<PathBuf> {
    let dirs = ProjectDirs::from("", "", "cashflow")
        .ok_or_else(|| CashflowError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().to_path_buf())
}
