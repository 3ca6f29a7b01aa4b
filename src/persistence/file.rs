//! JSON file backend for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StoreError, StoredScore};

/// Stores `{ "best": n }` in a file, written via a temp file and rename
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Environment variable overriding the default file location
    pub const PATH_ENV: &'static str = "DOODLE_JUMP_HIGHSCORE";
    pub const DEFAULT_PATH: &'static str = "doodle_jump_highscore.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$DOODLE_JUMP_HIGHSCORE`, or the default file name
    pub fn from_env() -> Self {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<u64, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        let stored: StoredScore = serde_json::from_str(&json)?;
        log::info!("Loaded high score {} from {}", stored.best, self.path.display());
        Ok(stored.best)
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string(&StoredScore { best })?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("High score {} saved to {}", best, self.path.display());
        Ok(())
    }
}
