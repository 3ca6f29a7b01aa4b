//! High score storage
//!
//! The best score is a single integer cell. Backends:
//! - `MemoryStore`: tests and throwaway sessions
//! - `FileStore`: JSON file on native targets
//! - `LocalStorageStore`: browser LocalStorage on wasm32

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Errors from a score store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored score is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage is unavailable")]
    Unavailable,
}

/// On-disk / in-storage representation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct StoredScore {
    pub best: u64,
}

/// A persisted single-integer high score cell
pub trait ScoreStore {
    /// Last known best score (0 when nothing was stored yet)
    fn load(&self) -> Result<u64, StoreError>;
    /// Overwrite the stored best score
    fn save(&mut self, best: u64) -> Result<(), StoreError>;
}

/// Volatile store, forgets everything on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u64,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u64) -> Self {
        Self { best, writes: 0 }
    }

    /// Number of successful saves
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<u64, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        self.best = best;
        self.writes += 1;
        Ok(())
    }
}
