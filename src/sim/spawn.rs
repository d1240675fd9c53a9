//! Time-gated factories for enemies and projectiles
//!
//! Both gates compare total game time against the time of the last emission.
//! There is no catch-up: a long stall emits at most one entity.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::clock::FrameTime;
use super::entity::{Enemy, Entity, Player, Projectile};
use crate::colors::WHITE;
use crate::consts::*;
use crate::settings::Viewport;
use crate::textures;
use crate::tuning::Tuning;

/// Fires when strictly more than `interval` seconds have passed since the last firing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalTimer {
    pub interval: f64,
    previous: f64,
}

impl IntervalTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            previous: 0.0,
        }
    }

    /// Check the gate at `total` seconds, re-arming it if it fires
    pub fn ready(&mut self, total: f64) -> bool {
        if total - self.previous > self.interval {
            self.previous = total;
            true
        } else {
            false
        }
    }

    pub fn previous(&self) -> f64 {
        self.previous
    }
}

/// Enemy spawner with the run's random source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub timer: IntervalTimer,
    rng: Pcg32,
}

impl Spawner {
    /// Seed once per run; every spawn draws from the same stream
    pub fn new(interval: f64, seed: u64) -> Self {
        Self {
            timer: IntervalTimer::new(interval),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Emit one enemy if the spawn interval has elapsed
    pub fn update(&mut self, time: &FrameTime, viewport: Viewport, tuning: &Tuning) -> Option<Enemy> {
        if !self.timer.ready(time.total) {
            return None;
        }
        Some(self.spawn(viewport, tuning))
    }

    /// Build an enemy just past the right edge at a random height
    pub fn spawn(&mut self, viewport: Viewport, tuning: &Tuning) -> Enemy {
        let animation = Animation::new(
            textures::ENEMY,
            Vec2::ZERO,
            ENEMY_FRAME_WIDTH,
            ENEMY_FRAME_HEIGHT,
            ENEMY_FRAME_COUNT,
            SHEET_FPS,
            WHITE,
            1.0,
            true,
        );
        let x = viewport.width as f32 + animation.width() as f32 / 2.0;
        let y = self.spawn_height(viewport);
        Enemy::new(animation, Vec2::new(x, y as f32), tuning)
    }

    /// Uniform in [margin, height - margin)
    fn spawn_height(&mut self, viewport: Viewport) -> i32 {
        let low = SPAWN_MARGIN;
        let high = viewport.height - SPAWN_MARGIN;
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}

/// Automatic fire for the player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireControl {
    pub timer: IntervalTimer,
}

impl FireControl {
    pub fn new(interval: f64) -> Self {
        Self {
            timer: IntervalTimer::new(interval),
        }
    }

    /// Emit one projectile from the player's muzzle if the fire interval has elapsed
    pub fn update(&mut self, time: &FrameTime, player: &Player, tuning: &Tuning) -> Option<Projectile> {
        if !player.is_active() || !self.timer.ready(time.total) {
            return None;
        }
        let animation = Animation::still(
            textures::PROJECTILE,
            Vec2::ZERO,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        );
        Some(Projectile::new(animation, player.muzzle(), tuning))
    }
}
