//! Star Raid entry point
//!
//! Runs the simulation headlessly against a simulated wall clock, the same
//! way a windowed front end would drive it, and prints a run summary.
//!
//! Usage: `star-raid [settings.json] [seconds]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use star_raid::Settings;
use star_raid::consts::*;
use star_raid::renderer::{SpriteInstance, draw_frame};
use star_raid::sim::{Entity, FrameClock, GameEvent, GamePhase, GameState, TickInput, tick};

/// Display refresh the fake wall clock runs at
const DISPLAY_HZ: f32 = 75.0;

/// Default run length in seconds
const DEFAULT_SECONDS: f32 = 30.0;

/// Drives the fixed-step simulation from variable display frames
struct Game {
    state: GameState,
    clock: FrameClock,
    accumulator: f32,
    input: TickInput,
    sprites: Vec<SpriteInstance>,
    stats: RunStats,
}

#[derive(Debug, Default, Serialize)]
struct RunStats {
    seed: u64,
    ticks: u64,
    seconds: f64,
    enemies_spawned: u32,
    enemies_destroyed: u32,
    shots_fired: u32,
    shots_landed: u32,
    rams_taken: u32,
    player_health: i32,
    player_alive: bool,
    peak_sprites: usize,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: GameState::from_settings(settings, seed),
            clock: FrameClock::new(),
            accumulator: 0.0,
            input: TickInput::default(),
            sprites: Vec::new(),
            stats: RunStats {
                seed,
                ..Default::default()
            },
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.steer();
            let time = self.clock.advance(SIM_DT);
            tick(&mut self.state, &self.input, &time);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;

            for event in self.state.drain_events() {
                self.record(event);
            }
        }
    }

    /// Scripted pilot: weave toward the nearest enemy's height
    fn steer(&mut self) {
        let ship_y = self.state.player.position().y;
        let target = self
            .state
            .enemies
            .iter()
            .min_by(|a, b| a.position().x.total_cmp(&b.position().x))
            .map(|e| e.position().y)
            .unwrap_or(self.state.viewport.height as f32 / 2.0);

        self.input.up = target < ship_y - 4.0;
        self.input.down = target > ship_y + 4.0;
    }

    fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::EnemySpawned { .. } => self.stats.enemies_spawned += 1,
            GameEvent::ProjectileFired { .. } => self.stats.shots_fired += 1,
            GameEvent::EnemyHit { .. } => self.stats.shots_landed += 1,
            GameEvent::EnemyDestroyed { pos } => {
                self.stats.enemies_destroyed += 1;
                log::debug!("Enemy destroyed at ({:.0}, {:.0})", pos.x, pos.y);
            }
            GameEvent::PlayerHit { damage, health } => {
                self.stats.rams_taken += 1;
                log::info!("Player hit for {damage}, health now {health}");
            }
            GameEvent::PlayerDestroyed => log::info!("Game over"),
        }
    }

    fn render(&mut self) {
        self.sprites.clear();
        draw_frame(&self.state, &mut self.sprites);
        self.stats.peak_sprites = self.stats.peak_sprites.max(self.sprites.len());
    }

    fn finish(mut self) -> RunStats {
        self.stats.ticks = self.state.time_ticks;
        self.stats.seconds = self.clock.total();
        self.stats.player_health = self.state.player.health();
        self.stats.player_alive = self.state.player.is_active();
        self.stats
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("star-raid.json"));
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let settings = Settings::load_or_default(&settings_path);
    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("Star Raid (headless) starting: seed={seed}, {seconds}s");

    let mut game = Game::new(&settings, seed);
    let frame_dt = 1.0 / DISPLAY_HZ;
    let mut elapsed = 0.0;
    while elapsed < seconds && game.state.phase != GamePhase::GameOver {
        game.update(frame_dt);
        game.render();
        elapsed += frame_dt;
    }

    let stats = game.finish();
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to encode run summary: {err}"),
    }
}
