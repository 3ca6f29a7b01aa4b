//! Read-only view of a session for renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameSession, GameState, PlatformKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub pos: Vec2,
    pub kind: PlatformKind,
    pub visible: bool,
}

/// Everything a frame needs to draw, copied out of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor: Vec2,
    /// Visible platforms in registry order
    pub platforms: Vec<PlatformView>,
    pub score: u64,
    pub high_score: u64,
    pub state: GameState,
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actor: self.actor.pos,
            platforms: self
                .platforms
                .visible()
                .map(|p| PlatformView {
                    pos: p.pos,
                    kind: p.kind,
                    visible: p.visible,
                })
                .collect(),
            score: self.score,
            high_score: self.high_score.best(),
            state: self.state,
        }
    }
}
