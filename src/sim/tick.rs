//! Fixed timestep simulation tick
//!
//! Phase order matters: the bounce is resolved before gravity, so a bounce
//! tick gets no gravity, and scrolling sees the post-bounce velocity.

use std::cmp::Ordering;

use super::collision::resolve_platform_contact;
use super::lifecycle::update_platforms;
use super::physics::{apply_gravity, apply_horizontal_movement, limit_fall};
use super::scroll::scroll_camera;
use super::state::{GameEvent, GameSession, GameState, PlatformKind};

/// Per-tick host data
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Current screen width (may change on resize/rotation)
    pub viewport_width: f32,
    /// Idle/demo mode - the doodler steers itself
    pub idle_mode: bool,
}

impl TickInput {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            idle_mode: false,
        }
    }
}

/// Advance the session by one fixed step. No-op unless Active.
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if session.state != GameState::Active {
        return;
    }

    session.viewport.width = input.viewport_width;
    session.time_ticks += 1;

    if input.idle_mode {
        session.actor.accel_x = idle_acceleration(session);
    }

    // Collision first: a bounce this tick suppresses this tick's gravity
    let contact = resolve_platform_contact(&mut session.actor, &mut session.platforms, &session.settings);
    if let Some(contact) = contact {
        session.events.push(GameEvent::Bounced { kind: contact.kind });
        if contact.kind == PlatformKind::Disappearing {
            session.events.push(GameEvent::PlatformVanished);
        }
    }
    apply_gravity(&mut session.actor, contact.is_some(), &session.settings);

    if limit_fall(&mut session.actor, session.viewport.height, &session.settings) {
        session.state = GameState::Stopped;
        session.events.push(GameEvent::Fell { score: session.score });
        log::info!(
            "Game over after {} ticks: score {}, best {}",
            session.time_ticks,
            session.score,
            session.high_score.best()
        );
    }

    let offset = scroll_camera(&mut session.actor, &mut session.platforms, &session.settings);
    if offset > 0.0 {
        session.add_score(offset);
    }

    update_platforms(
        &mut session.platforms,
        session.viewport.height,
        &session.settings,
        &mut session.rng,
    );

    apply_horizontal_movement(&mut session.actor, input.viewport_width, &session.settings);
}

/// Demo steering: head for the nearest platform below when falling,
/// or the nearest one above when rising.
fn idle_acceleration(session: &GameSession) -> f32 {
    let settings = &session.settings;
    let actor = &session.actor;
    let feet = actor.bottom(settings);
    let falling = actor.vel.y > 0.0;

    let target_x = session
        .platforms
        .visible()
        .filter(|p| if falling { p.pos.y >= feet } else { p.pos.y < feet })
        .min_by(|a, b| {
            (a.pos.y - feet)
                .abs()
                .partial_cmp(&(b.pos.y - feet).abs())
                .unwrap_or(Ordering::Equal)
        })
        .map(|p| p.pos.x);

    match target_x {
        Some(x) if (x - actor.pos.x).abs() > settings.platform_width / 4.0 => {
            (x - actor.pos.x).signum() * settings.acceleration_rate
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_PLATFORMS;
    use crate::sim::platforms::PlatformRegistry;
    use crate::sim::state::Platform;
    use crate::{HighScore, Settings, Viewport};
    use glam::Vec2;
    use proptest::prelude::*;

    fn active_session(seed: u64) -> GameSession {
        let mut session = GameSession::new(
            Settings::default(),
            Viewport::new(400.0, 800.0),
            seed,
            HighScore::default(),
        );
        session.start();
        session
    }

    #[test]
    fn test_tick_ready_is_noop() {
        let mut session = GameSession::new(
            Settings::default(),
            Viewport::new(400.0, 800.0),
            1,
            HighScore::default(),
        );
        let before = session.clone();
        tick(&mut session, &TickInput::new(400.0));
        assert_eq!(session.actor, before.actor);
        assert_eq!(session.platforms, before.platforms);
        assert_eq!(session.time_ticks, 0);
    }

    #[test]
    fn test_bounce_sets_jump_velocity() {
        let settings = Settings {
            doodler_height: 20.0,
            scroll_threshold: 0.0,
            ..Default::default()
        };
        let mut session = GameSession::new(settings, Viewport::new(400.0, 800.0), 1, HighScore::default());
        session.start();
        session.actor.pos = Vec2::new(200.0, 100.0);
        session.actor.vel.y = 5.0;
        session.platforms = [Platform::new(200.0, 110.0, PlatformKind::Static)].into_iter().collect();

        tick(&mut session, &TickInput::new(400.0));

        assert_eq!(session.actor.vel.y, session.settings.jump_velocity);
        assert_eq!(session.actor.pos.y, 100.0 + session.settings.jump_velocity);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::Bounced {
                kind: PlatformKind::Static
            }]
        );
    }

    #[test]
    fn test_disappearing_platform_removed_same_tick() {
        let mut session = active_session(2);
        session.actor.pos = Vec2::new(200.0, 85.0);
        session.actor.vel.y = 4.0;
        session.platforms = [Platform::new(200.0, 110.0, PlatformKind::Disappearing)]
            .into_iter()
            .collect();

        tick(&mut session, &TickInput::new(400.0));

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::PlatformVanished));
        assert!(session.platforms.iter().all(|p| p.visible));
        assert_eq!(session.platforms.len(), MIN_PLATFORMS);
    }

    #[test]
    fn test_fall_stops_game() {
        let mut session = active_session(3);
        session.platforms = PlatformRegistry::new();
        session.actor.pos.y = 845.0;
        session.actor.vel.y = 10.0;
        session.score = 42;

        tick(&mut session, &TickInput::new(400.0));
        assert_eq!(session.state, GameState::Stopped);
        assert_eq!(session.actor.pos.y, 850.0);
        assert!(session.drain_events().contains(&GameEvent::Fell { score: 42 }));

        let frozen = session.clone();
        tick(&mut session, &TickInput::new(400.0));
        assert_eq!(session.actor, frozen.actor);
        assert_eq!(session.platforms, frozen.platforms);

        assert!(session.reset(Viewport::new(400.0, 800.0)));
        assert_eq!(session.state, GameState::Ready);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_scroll_scores_and_records_best() {
        let mut session = active_session(4);
        session.actor.pos.y = 100.0;
        session.actor.vel.y = -5.0;
        let top_before = session.platforms.topmost_y().unwrap();

        tick(&mut session, &TickInput::new(400.0));

        // vy -4.7 -> y 95.3 -> offset 104.7
        assert_eq!(session.actor.pos.y, session.settings.scroll_threshold);
        assert_eq!(session.score, 104);
        assert_eq!(session.high_score.best(), 104);
        assert!(session.high_score.is_dirty());
        assert!(session.platforms.iter().any(|p| (p.pos.y - (top_before + 104.7)).abs() < 1e-3));
    }

    #[test]
    fn test_first_game_lands_on_start_platform() {
        let mut session = active_session(5);
        let input = TickInput::new(400.0);
        let mut bounced = false;
        for _ in 0..200 {
            tick(&mut session, &input);
            if session
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::Bounced { .. }))
            {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        assert_eq!(session.state, GameState::Active);
    }

    #[test]
    fn test_idle_mode_steers_toward_platform() {
        let mut session = active_session(6);
        session.actor.pos = Vec2::new(100.0, 300.0);
        session.actor.vel.y = 2.0;
        session.platforms = [Platform::new(300.0, 500.0, PlatformKind::Static)].into_iter().collect();

        assert_eq!(idle_acceleration(&session), session.settings.acceleration_rate);
        session.actor.pos.x = 290.0;
        assert_eq!(idle_acceleration(&session), 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = active_session(99999);
        let mut b = active_session(99999);
        let input = TickInput {
            viewport_width: 400.0,
            idle_mode: true,
        };
        for _ in 0..500 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.time_ticks, b.time_ticks);
    }

    fn drag() -> impl Strategy<Value = i8> {
        prop_oneof![Just(-1i8), Just(0i8), Just(1i8)]
    }

    proptest! {
        #[test]
        fn prop_inactive_ticks_change_nothing(seed in any::<u64>(), stopped in any::<bool>(), width in -100.0f32..1000.0) {
            let mut session = GameSession::new(Settings::default(), Viewport::new(400.0, 800.0), seed, HighScore::default());
            if stopped {
                session.state = GameState::Stopped;
            }
            let before = session.clone();
            tick(&mut session, &TickInput { viewport_width: width, idle_mode: true });
            prop_assert_eq!(session.actor, before.actor);
            prop_assert_eq!(&session.platforms, &before.platforms);
            prop_assert_eq!(session.score, before.score);
            prop_assert_eq!(session.state, before.state);
        }

        #[test]
        fn prop_tick_invariants(seed in any::<u64>(), drags in prop::collection::vec(drag(), 1..400)) {
            let mut session = active_session(seed);
            let settings = session.settings.clone();
            let margin = settings.half_doodler();

            for d in drags {
                if session.state != GameState::Active {
                    break;
                }
                session.actor.accel_x = f32::from(d) * settings.acceleration_rate;
                let vy_before = session.actor.vel.y;
                let score_before = session.score;

                tick(&mut session, &TickInput::new(400.0));
                let events = session.drain_events();

                let bounced = events.iter().any(|e| matches!(e, GameEvent::Bounced { .. }));
                if bounced {
                    prop_assert_eq!(session.actor.vel.y, settings.jump_velocity);
                } else {
                    prop_assert_eq!(session.actor.vel.y, vy_before + settings.gravity);
                }
                prop_assert!(session.actor.vel.x.abs() <= settings.max_velocity);
                prop_assert!(session.actor.pos.x >= -margin && session.actor.pos.x <= 400.0 + margin);
                prop_assert!(session.platforms.len() >= MIN_PLATFORMS);
                prop_assert!(session.platforms.iter().all(|p| p.visible));
                prop_assert!(session.score >= score_before);
                prop_assert!(session.high_score.best() >= session.score);
            }
        }
    }
}
