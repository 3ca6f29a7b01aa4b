//! Drag gesture decoding
//!
//! A drag only ever writes the doodler's horizontal acceleration; the tick
//! reads it on the next step.

use serde::{Deserialize, Serialize};

use crate::sim::GameSession;

/// Raw gesture events from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragInput {
    /// Drag moved; `translation_x` is the offset from where it began
    Changed { translation_x: f32 },
    /// Finger lifted / button released
    Ended,
}

impl DragInput {
    /// New acceleration given the current one. A zero translation keeps it.
    pub fn acceleration(self, current: f32, rate: f32) -> f32 {
        match self {
            DragInput::Changed { translation_x } if translation_x > 0.0 => rate,
            DragInput::Changed { translation_x } if translation_x < 0.0 => -rate,
            DragInput::Changed { .. } => current,
            DragInput::Ended => 0.0,
        }
    }
}

impl GameSession {
    /// Apply a drag event to the doodler's acceleration
    pub fn apply_drag(&mut self, drag: DragInput) {
        self.actor.accel_x = drag.acceleration(self.actor.accel_x, self.settings.acceleration_rate);
    }
}
