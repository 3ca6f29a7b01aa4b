//! Camera scrolling
//!
//! The doodler never rises above the scroll threshold; instead the world is
//! pushed down by the overshoot, and that overshoot is the height climbed.

use super::platforms::PlatformRegistry;
use super::state::Actor;
use crate::Settings;

/// Pin a rising doodler at the threshold and shift the platforms.
/// Returns the scroll offset (0 when the camera did not move).
pub fn scroll_camera(actor: &mut Actor, platforms: &mut PlatformRegistry, settings: &Settings) -> f32 {
    if actor.vel.y >= 0.0 || actor.pos.y >= settings.scroll_threshold {
        return 0.0;
    }

    let offset = settings.scroll_threshold - actor.pos.y;
    actor.pos.y = settings.scroll_threshold;
    platforms.shift_down(offset);
    offset
}
