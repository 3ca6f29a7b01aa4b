//! Browser LocalStorage backend

use super::{ScoreStore, StoreError, StoredScore};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "doodle_jump_highscore";

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> Result<u64, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                let stored: StoredScore = serde_json::from_str(&json)?;
                log::info!("Loaded high score {}", stored.best);
                Ok(stored.best)
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Ok(0)
            }
            Err(_) => Err(StoreError::Unavailable),
        }
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(&StoredScore { best })?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StoreError::Unavailable)
    }
}
