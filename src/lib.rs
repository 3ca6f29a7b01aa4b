//! Doodle Jump - an endless vertical jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scrolling, platforms)
//! - `platform`: Host abstraction (fixed-step clock, drag input)
//! - `persistence`: High score storage backends
//! - `settings`: Gameplay tuning loaded from JSON

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScore;
pub use settings::{Settings, SettingsError};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz)
    pub const TICK_INTERVAL: f32 = 0.02;
    /// Maximum substeps per advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap the clock will try to catch up on
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Platforms kept alive at all times during play
    pub const MIN_PLATFORMS: usize = 5;
    /// Horizontal spawn range for new platforms
    pub const PLATFORM_MIN_X: f32 = 50.0;
    pub const PLATFORM_MAX_X: f32 = 350.0;
    /// Vertical gap between the topmost platform and a new one
    pub const PLATFORM_GAP_MIN: f32 = 80.0;
    pub const PLATFORM_GAP_MAX: f32 = 100.0;
    /// Moving platform drift per tick
    pub const MOVING_PLATFORM_STEP: f32 = 2.0;

    /// Starting platforms relative to the doodler's start Y (below, above, higher)
    pub const START_PLATFORM_OFFSETS: [f32; 3] = [50.0, -90.0, -200.0];

    /// Viewport used by headless hosts
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 400.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;
}

/// Screen size in game units. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(consts::DEFAULT_VIEWPORT_WIDTH, consts::DEFAULT_VIEWPORT_HEIGHT)
    }
}
