//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, including the
//! spawn and fire timers and the random source.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::entity::{Enemy, Entity, Player, Projectile};
use super::parallax::ParallaxLayer;
use super::spawn::{FireControl, Spawner};
use crate::colors::WHITE;
use crate::consts::*;
use crate::renderer::TextureId;
use crate::settings::{Settings, Viewport};
use crate::textures;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player ship destroyed. The whole world freezes: enemies, projectiles
    /// and parallax layers stop updating along with the player.
    GameOver,
}

/// Things that happened during a tick, for sound, effects and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { pos: Vec2 },
    ProjectileFired { pos: Vec2 },
    /// Enemy rammed the player
    PlayerHit { damage: i32, health: i32 },
    /// Projectile struck an enemy
    EnemyHit { damage: i32 },
    EnemyDestroyed { pos: Vec2 },
    PlayerDestroyed,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub player: Player,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Live projectiles, in fire order
    pub projectiles: Vec<Projectile>,
    pub spawner: Spawner,
    pub fire: FireControl,
    pub layers: Vec<ParallaxLayer>,
    /// Events from the latest tick; `tick` clears them on entry
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with default settings and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Viewport::default(), Tuning::default())
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self::with_config(seed, settings.viewport, settings.tuning.clone())
    }

    pub fn with_config(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let animation = Animation::new(
            textures::PLAYER,
            Vec2::ZERO,
            PLAYER_FRAME_WIDTH,
            PLAYER_FRAME_HEIGHT,
            PLAYER_FRAME_COUNT,
            SHEET_FPS,
            WHITE,
            1.0,
            true,
        );
        // Back of the screen, vertically centred
        let start = Vec2::new(PLAYFIELD_MARGIN, viewport.height as f32 / 2.0);
        let mut player = Player::new(animation, start, &tuning);
        player.clamp_to_playfield(viewport);

        let layers = tuning
            .parallax_speeds
            .iter()
            .enumerate()
            .map(|(i, &speed)| {
                ParallaxLayer::new(
                    TextureId(textures::BG_LAYER_1.0 + i as u32),
                    viewport.width,
                    viewport.height,
                    viewport.width,
                    speed,
                )
            })
            .collect();

        log::debug!(
            "New run: seed={seed} viewport={}x{}",
            viewport.width,
            viewport.height
        );

        Self {
            seed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            viewport,
            spawner: Spawner::new(tuning.spawn_interval, seed),
            fire: FireControl::new(tuning.fire_interval),
            tuning,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            layers,
            events: Vec::new(),
        }
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Remove every inactive enemy and projectile.
    ///
    /// `retain` visits each element exactly once and keeps survivors in order.
    pub fn prune(&mut self) {
        self.enemies.retain(|e| e.is_active());
        self.projectiles.retain(|p| p.is_active());
    }
}
