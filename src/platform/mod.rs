//! Platform abstraction layer
//!
//! Host-side pieces that feed the simulation:
//! - Time: fixed-step clock deciding how many ticks to run
//! - Input: drag gestures decoded into horizontal acceleration

pub mod clock;
pub mod input;

pub use clock::FixedStepClock;
pub use input::DragInput;
