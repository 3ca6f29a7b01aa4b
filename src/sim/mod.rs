//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per step)
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod lifecycle;
pub mod physics;
pub mod platforms;
pub mod scroll;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Contact, lands_on, resolve_platform_contact};
pub use platforms::PlatformRegistry;
pub use snapshot::{PlatformView, Snapshot};
pub use state::{Actor, GameEvent, GameSession, GameState, Platform, PlatformKind};
pub use tick::{TickInput, tick};
