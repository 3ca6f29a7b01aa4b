//! Best-score tracking
//!
//! The simulation bumps the best score every tick the running score passes
//! it; the host flushes it to a `ScoreStore` when it is dirty.

use serde::{Deserialize, Serialize};

use crate::persistence::{ScoreStore, StoreError};

/// Best score seen across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
    /// Changed since the last flush
    #[serde(skip)]
    dirty: bool,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best, dirty: false }
    }

    /// Read the stored best, starting from zero if the store fails
    pub fn load(store: &impl ScoreStore) -> Self {
        match store.load() {
            Ok(best) => Self::new(best),
            Err(e) => {
                log::warn!("Could not read high score ({}), starting from 0", e);
                Self::new(0)
            }
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Offer a score; returns true if it is a new best
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Write the best score if it changed since the last flush
    pub fn flush(&mut self, store: &mut impl ScoreStore) -> Result<bool, StoreError> {
        if !self.dirty {
            return Ok(false);
        }
        store.save(self.best)?;
        self.dirty = false;
        Ok(true)
    }
}
