//! Browser bindings
//!
//! JS owns the timer (`setInterval(..., 20)`) and the drawing; it calls
//! `tick` with the canvas width and reads `snapshot_json` each frame.

use wasm_bindgen::prelude::*;

use crate::persistence::LocalStorageStore;
use crate::platform::DragInput;
use crate::sim::{GameSession, GameState, TickInput, tick};
use crate::{HighScore, Settings, Viewport};

#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
    store: LocalStorageStore,
    idle_mode: bool,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        console_error_panic_hook::set_once();
        // Already initialized when the page recreates the game
        let _ = console_log::init_with_level(log::Level::Info);

        let store = LocalStorageStore;
        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(
            Settings::load(),
            Viewport::new(width, height),
            seed,
            HighScore::load(&store),
        );
        log::info!("Game initialized with seed: {}", seed);

        WebGame {
            session,
            store,
            idle_mode: false,
        }
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn reset(&mut self, width: f32, height: f32) -> bool {
        self.session.reset(Viewport::new(width, height))
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.idle_mode = idle;
        log::info!("Idle mode: {}", idle);
    }

    /// One fixed step. Persists the best score when it changed.
    pub fn tick(&mut self, width: f32) {
        tick(
            &mut self.session,
            &TickInput {
                viewport_width: width,
                idle_mode: self.idle_mode,
            },
        );
        self.session.drain_events();

        if self.session.high_score.is_dirty() {
            if let Err(e) = self.session.high_score.flush(&mut self.store) {
                log::warn!("High score not saved: {}", e);
            }
        }
    }

    pub fn drag_changed(&mut self, translation_x: f32) {
        self.session.apply_drag(DragInput::Changed { translation_x });
    }

    pub fn drag_ended(&mut self) {
        self.session.apply_drag(DragInput::Ended);
    }

    pub fn is_stopped(&self) -> bool {
        self.session.state == GameState::Stopped
    }

    pub fn high_score(&self) -> f64 {
        self.session.high_score.best() as f64
    }

    /// Current frame for the renderer, as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
    }
}
