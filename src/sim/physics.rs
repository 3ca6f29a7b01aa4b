//! Doodler integration: gravity, fall bound, horizontal movement

use super::state::Actor;
use crate::Settings;

/// Apply gravity unless the doodler just bounced, then integrate Y
pub fn apply_gravity(actor: &mut Actor, supported: bool, settings: &Settings) {
    if !supported {
        actor.vel.y += settings.gravity;
    }
    actor.pos.y += actor.vel.y;
}

/// Clamp the doodler at the bottom bound. Returns true if it fell out.
pub fn limit_fall(actor: &mut Actor, viewport_height: f32, settings: &Settings) -> bool {
    let bound = viewport_height + settings.doodler_height;
    if actor.pos.y > bound {
        actor.pos.y = bound;
        true
    } else {
        false
    }
}

/// Accelerate, cap, apply friction, move and wrap around the screen edges
pub fn apply_horizontal_movement(actor: &mut Actor, viewport_width: f32, settings: &Settings) {
    let width = viewport_width.max(0.0);
    // Height, not width: the sprite is square
    let margin = settings.half_doodler();

    actor.vel.x = (actor.vel.x + actor.accel_x).clamp(-settings.max_velocity, settings.max_velocity);

    // Friction only when no drag is held
    if actor.accel_x == 0.0 {
        actor.vel.x *= settings.deceleration_rate;
    }

    actor.pos.x += actor.vel.x;

    if actor.pos.x < -margin {
        actor.pos.x = width + margin;
    } else if actor.pos.x > width + margin {
        actor.pos.x = -margin;
    }
}
