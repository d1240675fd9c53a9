//! Per-frame simulation tick
//!
//! Core game loop step: input, movement, spawning, collisions, death and
//! pruning, in that order.

use glam::Vec2;

use super::clock::FrameTime;
use super::collision::{player_vs_enemies, projectiles_vs_enemies};
use super::entity::Entity;
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Digital directions (keyboard / d-pad)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Analog stick, each axis in [-1, 1], Y up
    pub analog: Vec2,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Unit steps per axis from the digital directions, screen space (Y down)
    pub fn digital_direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Advance the game state by one frame.
///
/// `state.events` is cleared on entry and afterwards holds only this tick's
/// events. Callers that want them must drain or read them before the next
/// tick.
pub fn tick(state: &mut GameState, input: &TickInput, time: &FrameTime) {
    state.events.clear();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                log::info!("Paused at tick {}", state.time_ticks);
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    log::trace!("tick {} t={:.3}", state.time_ticks, time.total);

    update_player(state, input, time);

    for layer in &mut state.layers {
        layer.update();
    }

    update_enemies(state, time);
    update_projectiles(state, time);

    player_vs_enemies(&mut state.player, &mut state.enemies, &mut state.events);
    projectiles_vs_enemies(&mut state.projectiles, &mut state.enemies, &mut state.events);

    resolve_deaths(state);
    state.prune();
}

/// Steer, animate and fire
fn update_player(state: &mut GameState, input: &TickInput, time: &FrameTime) {
    let viewport = state.viewport;
    state
        .player
        .steer(input.digital_direction(), input.analog, viewport);
    state.player.update(time.elapsed);

    if let Some(projectile) = state.fire.update(time, &state.player, &state.tuning) {
        state.events.push(GameEvent::ProjectileFired {
            pos: projectile.position(),
        });
        state.projectiles.push(projectile);
    }
}

/// Spawn on cadence, then move every enemy
fn update_enemies(state: &mut GameState, time: &FrameTime) {
    if let Some(enemy) = state.spawner.update(time, state.viewport, &state.tuning) {
        log::debug!("Enemy spawned at {:?}", enemy.position());
        state.events.push(GameEvent::EnemySpawned {
            pos: enemy.position(),
        });
        state.enemies.push(enemy);
    }

    for enemy in &mut state.enemies {
        enemy.update(time.elapsed);
    }
}

fn update_projectiles(state: &mut GameState, time: &FrameTime) {
    let viewport = state.viewport;
    for projectile in &mut state.projectiles {
        projectile.update(time.elapsed, viewport);
    }
}

/// The one place health turns into death
fn resolve_deaths(state: &mut GameState) {
    for enemy in &mut state.enemies {
        if enemy.resolve_death() {
            state.events.push(GameEvent::EnemyDestroyed {
                pos: enemy.position(),
            });
        }
    }

    if state.player.resolve_death() {
        log::info!("Player destroyed at tick {}", state.time_ticks);
        state.events.push(GameEvent::PlayerDestroyed);
        state.phase = GamePhase::GameOver;
    }
}
