//! Fixed-step clock
//!
//! Wall-clock frames have arbitrary length; the simulation only ever
//! advances in whole `TICK_INTERVAL` steps.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, TICK_INTERVAL};

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    accumulator: f32,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl FixedStepClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed elapsed seconds; returns how many ticks to run now.
    ///
    /// Long stalls are clamped and at most `MAX_SUBSTEPS` ticks are returned,
    /// dropping the backlog beyond that.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !(self.step > 0.0) {
            return 0;
        }

        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}
