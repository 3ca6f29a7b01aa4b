//! Doodler vs platform contact
//!
//! Only the doodler's lower edge matters, and only while falling. Platforms
//! are one-way: the doodler passes through them on the way up.

use super::platforms::PlatformRegistry;
use super::state::{Actor, Platform, PlatformKind};
use crate::Settings;

/// A bounce resolved this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Registry index of the platform bounced on
    pub index: usize,
    pub kind: PlatformKind,
}

/// True if the doodler's feet overlap the platform band while falling
pub fn lands_on(actor: &Actor, platform: &Platform, settings: &Settings) -> bool {
    if !platform.visible || actor.vel.y <= 0.0 {
        return false;
    }

    let feet = actor.bottom(settings);
    let half_h = settings.platform_height / 2.0;
    let half_w = settings.platform_width / 2.0;

    feet >= platform.pos.y - half_h
        && feet <= platform.pos.y + half_h
        && actor.pos.x >= platform.pos.x - half_w
        && actor.pos.x <= platform.pos.x + half_w
}

/// Bounce off the first platform under the doodler, if any.
///
/// Sets the vertical velocity to the jump impulse and hides disappearing
/// platforms. A `Some` result means the doodler is supported this tick.
pub fn resolve_platform_contact(
    actor: &mut Actor,
    platforms: &mut PlatformRegistry,
    settings: &Settings,
) -> Option<Contact> {
    let (index, platform) = platforms
        .iter_mut()
        .enumerate()
        .find(|(_, p)| lands_on(&*actor, p, settings))?;

    if platform.kind == PlatformKind::Disappearing {
        platform.visible = false;
    }
    actor.vel.y = settings.jump_velocity;

    Some(Contact {
        index,
        kind: platform.kind,
    })
}
