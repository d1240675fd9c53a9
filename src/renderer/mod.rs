//! Renderer boundary
//!
//! The simulation never touches pixels. Each frame it is flattened into
//! `SpriteInstance`s, back to front, for whatever renderer owns the device.

pub mod sprite;

pub use sprite::{SpriteBatch, SpriteInstance, TextureId};

use crate::colors::WHITE;
use crate::sim::{Entity, GameState};
use crate::textures;

/// Emit every visible sprite for the current state, back to front
pub fn draw_frame(state: &GameState, batch: &mut impl SpriteBatch) {
    draw_background(state, batch);

    for layer in &state.layers {
        layer.draw(batch);
    }

    for enemy in &state.enemies {
        enemy.body.animation.draw(batch);
    }

    for projectile in &state.projectiles {
        projectile.body.animation.draw(batch);
    }

    if state.player.is_active() {
        state.player.body.animation.draw(batch);
    }
}

/// Static backdrop stretched over the whole viewport, under the parallax layers
fn draw_background(state: &GameState, batch: &mut impl SpriteBatch) {
    let w = state.viewport.width as f32;
    let h = state.viewport.height as f32;
    batch.draw(SpriteInstance {
        texture: textures::BACKGROUND.0,
        source: [0.0, 0.0, w, h],
        dest: [0.0, 0.0, w, h],
        tint: WHITE,
    });
}

/// Convenience for callers that just want a list
pub fn collect_sprites(state: &GameState) -> Vec<SpriteInstance> {
    let mut sprites = Vec::new();
    draw_frame(state, &mut sprites);
    sprites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FrameClock, TickInput, tick};
    use crate::{Tuning, Viewport};

    #[test]
    fn test_fresh_state_draws_background_and_player() {
        let state = GameState::new(1);
        let sprites = collect_sprites(&state);
        // Backdrop, two layers of two tiles, then the ship on top
        assert_eq!(sprites.len(), 6);
        let backdrop = &sprites[0];
        assert_eq!(backdrop.texture_id(), textures::BACKGROUND);
        assert_eq!(backdrop.dest, [0.0, 0.0, 800.0, 480.0]);
        assert!(
            sprites[1..5]
                .iter()
                .all(|s| s.texture_id() == textures::BG_LAYER_1 || s.texture_id() == textures::BG_LAYER_2)
        );
        let ship = sprites.last().unwrap();
        assert_eq!(ship.texture_id(), textures::PLAYER);
        assert_eq!(ship.dest_center(), [60.5, 240.5]);
    }

    #[test]
    fn test_entities_drawn_after_background() {
        let mut state = GameState::new(1);
        let mut clock = FrameClock::new();
        for _ in 0..90 {
            tick(&mut state, &TickInput::default(), &clock.advance(1.0 / 60.0));
        }
        assert!(!state.enemies.is_empty());
        assert!(!state.projectiles.is_empty());

        let sprites = collect_sprites(&state);
        let first_enemy = sprites
            .iter()
            .position(|s| s.texture_id() == textures::ENEMY)
            .unwrap();
        assert!(
            sprites[..first_enemy]
                .iter()
                .all(|s| s.texture_id() != textures::PLAYER)
        );
        assert_eq!(sprites.last().unwrap().texture_id(), textures::PLAYER);
    }

    #[test]
    fn test_backdrop_follows_viewport() {
        let state = GameState::with_config(1, Viewport::new(1024, 600), Tuning::default());
        let sprites = collect_sprites(&state);
        assert_eq!(sprites[0].texture_id(), textures::BACKGROUND);
        assert_eq!(sprites[0].source, [0.0, 0.0, 1024.0, 600.0]);
        assert_eq!(sprites[0].dest, [0.0, 0.0, 1024.0, 600.0]);
        assert_eq!(
            sprites
                .iter()
                .filter(|s| s.texture_id() == textures::BACKGROUND)
                .count(),
            1
        );
    }

    #[test]
    fn test_dead_player_not_drawn() {
        let mut state = GameState::new(1);
        state.player.deactivate();
        let sprites = collect_sprites(&state);
        assert!(sprites.iter().all(|s| s.texture_id() != textures::PLAYER));
    }
}
