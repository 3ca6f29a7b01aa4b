//! Doodle Jump entry point
//!
//! Natively this runs a headless demo session in real time: the doodler
//! steers itself (idle mode) until it falls, and the best score is kept in a
//! JSON file. The browser build is driven from JS through `doodle_jump::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::thread;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use doodle_jump::consts::TICK_INTERVAL;
    use doodle_jump::persistence::FileStore;
    use doodle_jump::platform::FixedStepClock;
    use doodle_jump::sim::{GameEvent, GameSession, GameState, TickInput, tick};
    use doodle_jump::{HighScore, Settings, Viewport};

    /// Give up after a minute of game time
    const MAX_TICKS: u64 = 3000;
    /// Progress log cadence
    const REPORT_EVERY: u64 = 250;
    /// Minimum time between high score writes while climbing
    const FLUSH_INTERVAL: Duration = Duration::from_secs(1);

    fn seed() -> u64 {
        if let Some(seed) = std::env::var("DOODLE_JUMP_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            return seed;
        }
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    fn flush(high_score: &mut HighScore, store: &mut FileStore) {
        if let Err(e) = high_score.flush(store) {
            log::warn!("Could not save high score to {}: {}", store.path().display(), e);
        }
    }

    pub fn run() {
        let settings = Settings::load();
        let mut store = FileStore::from_env();
        let viewport = Viewport::default();
        let seed = seed();

        let mut session = GameSession::new(settings, viewport, seed, HighScore::load(&store));
        log::info!("Game initialized with seed: {}", seed);
        session.start();

        let input = TickInput {
            viewport_width: viewport.width,
            idle_mode: true,
        };
        let mut clock = FixedStepClock::default();
        let mut last_frame = Instant::now();
        let mut last_flush = Instant::now();

        while session.state == GameState::Active && session.time_ticks < MAX_TICKS {
            thread::sleep(Duration::from_secs_f32(TICK_INTERVAL));
            let now = Instant::now();
            let ticks = clock.advance((now - last_frame).as_secs_f32());
            last_frame = now;

            for _ in 0..ticks {
                tick(&mut session, &input);
                if session.time_ticks % REPORT_EVERY == 0 {
                    log::info!(
                        "tick {}: score {}, {} platforms",
                        session.time_ticks,
                        session.score,
                        session.platforms.len()
                    );
                }
            }

            for event in session.drain_events() {
                match event {
                    GameEvent::Bounced { kind } => log::trace!("Bounced on {:?}", kind),
                    GameEvent::PlatformVanished => log::trace!("Platform vanished"),
                    GameEvent::NewHighScore { score } => log::trace!("New best {}", score),
                    GameEvent::Fell { score } => log::info!("Fell with score {}", score),
                }
            }

            if session.high_score.is_dirty() && last_flush.elapsed() >= FLUSH_INTERVAL {
                flush(&mut session.high_score, &mut store);
                last_flush = Instant::now();
            }
        }

        flush(&mut session.high_score, &mut store);

        let result = session.snapshot();
        if result.state != GameState::Stopped {
            log::info!("Demo time limit reached");
        }
        println!("Game Over");
        println!("Score: {}", result.score);
        println!("BEST: {}", result.high_score);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Doodle Jump (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is `doodle_jump::web::WebGame`
}
