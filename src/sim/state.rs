//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platforms::PlatformRegistry;
use crate::consts::*;
use crate::{HighScore, Settings, Viewport};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player to press play
    Ready,
    /// Simulation running
    Active,
    /// Doodler fell off the bottom, waiting for reset
    Stopped,
}

/// Platform behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Static,
    /// Drifts right and wraps back to the left edge
    Moving,
    /// Vanishes after one bounce
    Disappearing,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 3] = [
        PlatformKind::Static,
        PlatformKind::Moving,
        PlatformKind::Disappearing,
    ];
}

/// A platform, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub kind: PlatformKind,
    pub visible: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, kind: PlatformKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            visible: true,
        }
    }
}

/// The doodler. Position is the sprite center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Written by input only; read by horizontal movement
    pub accel_x: f32,
}

impl Actor {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Y of the sprite's lower edge
    #[inline]
    pub fn bottom(&self, settings: &Settings) -> f32 {
        self.pos.y + settings.half_doodler()
    }
}

/// Things that happened during a tick, for sound/persistence/UI hosts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Bounced { kind: PlatformKind },
    PlatformVanished,
    NewHighScore { score: u64 },
    Fell { score: u64 },
}

/// One play session: everything the tick mutates
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    pub viewport: Viewport,
    pub actor: Actor,
    pub platforms: PlatformRegistry,
    pub score: u64,
    pub high_score: HighScore,
    pub state: GameState,
    /// Active ticks since the last reset
    pub time_ticks: u64,
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in the Ready state, laid out for `viewport`
    pub fn new(settings: Settings, viewport: Viewport, seed: u64, high_score: HighScore) -> Self {
        let mut session = Self {
            settings,
            viewport,
            actor: Actor::default(),
            platforms: PlatformRegistry::new(),
            score: 0,
            high_score,
            state: GameState::Ready,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        session.lay_out(viewport);
        session
    }

    /// Ready -> Active. Returns false if the session was not Ready.
    pub fn start(&mut self) -> bool {
        if self.state != GameState::Ready {
            log::debug!("Ignoring start in {:?}", self.state);
            return false;
        }
        self.state = GameState::Active;
        log::info!("Game started");
        true
    }

    /// Back to Ready with a fresh doodler, score and starting platforms.
    /// Rejected while a game is running.
    pub fn reset(&mut self, viewport: Viewport) -> bool {
        if self.state == GameState::Active {
            log::debug!("Ignoring reset while active");
            return false;
        }
        self.lay_out(viewport);
        log::info!(
            "Game reset ({}x{}), best {}",
            viewport.width,
            viewport.height,
            self.high_score.best()
        );
        true
    }

    fn lay_out(&mut self, viewport: Viewport) {
        self.viewport = viewport;

        let start = Vec2::new(viewport.width / 2.0, viewport.height * 2.0 / 3.0);
        self.actor = Actor::at(start);
        self.score = 0;
        self.time_ticks = 0;
        self.events.clear();

        self.platforms = START_PLATFORM_OFFSETS
            .iter()
            .map(|dy| Platform::new(start.x, start.y + dy, PlatformKind::Static))
            .collect();

        self.state = GameState::Ready;
    }

    /// Add scrolled height to the score and track the best
    pub(crate) fn add_score(&mut self, offset: f32) {
        self.score += offset.floor().max(0.0) as u64;
        if self.high_score.record(self.score) {
            self.events.push(GameEvent::NewHighScore { score: self.score });
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
