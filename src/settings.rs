//! Gameplay tuning
//!
//! Immutable for the lifetime of a session. Loaded from JSON (a file natively,
//! LocalStorage on the web) and validated before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics and geometry tuning. Units are game units per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Downward acceleration added each unsupported tick
    pub gravity: f32,
    /// Vertical velocity set on bounce (negative = upward)
    pub jump_velocity: f32,
    /// Horizontal speed cap
    pub max_velocity: f32,
    /// Horizontal acceleration while a drag is held
    pub acceleration_rate: f32,
    /// Friction multiplier applied when no drag is held, in (0, 1]
    pub deceleration_rate: f32,
    /// Screen Y above which the camera scrolls instead of the doodler rising
    pub scroll_threshold: f32,
    /// Doodler size (the sprite is square)
    pub doodler_height: f32,
    pub platform_width: f32,
    pub platform_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            jump_velocity: -10.0,
            max_velocity: 6.0,
            acceleration_rate: 0.5,
            deceleration_rate: 0.9,
            scroll_threshold: 200.0,
            doodler_height: 50.0,
            platform_width: 100.0,
            platform_height: 20.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the physical invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        }

        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.jump_velocity < 0.0) {
            return invalid("jump_velocity", "must be negative (upward)");
        }
        if !(self.deceleration_rate > 0.0 && self.deceleration_rate <= 1.0) {
            return invalid("deceleration_rate", "must be in (0, 1]");
        }
        if !(self.max_velocity > 0.0) {
            return invalid("max_velocity", "must be positive");
        }
        if !(self.acceleration_rate >= 0.0) {
            return invalid("acceleration_rate", "must not be negative");
        }
        if !(self.doodler_height > 0.0) {
            return invalid("doodler_height", "must be positive");
        }
        if !(self.platform_width > 0.0 && self.platform_height > 0.0) {
            return invalid("platform_width", "platform dimensions must be positive");
        }
        Ok(())
    }

    /// Half the doodler size; also used as the horizontal wrap margin
    #[inline]
    pub fn half_doodler(&self) -> f32 {
        self.doodler_height / 2.0
    }

    /// Environment variable naming a JSON settings file (native only)
    pub const PATH_ENV: &'static str = "DOODLE_JUMP_SETTINGS";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "doodle_jump_settings";

    /// Read settings from the file named by `DOODLE_JUMP_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_configured() -> Result<Option<Self>, SettingsError> {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            return Ok(None);
        };
        let json = std::fs::read_to_string(&path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path);
        Ok(Some(settings))
    }

    /// Load settings, falling back to defaults on any problem
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match Self::read_configured() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
