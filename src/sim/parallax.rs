//! Scrolling background layers
//!
//! Purely cosmetic. Each layer is a row of copies of one texture that slides
//! a fixed number of pixels per tick and recycles tiles that scroll away.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::colors::WHITE;
use crate::renderer::{SpriteBatch, SpriteInstance, TextureId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub texture: TextureId,
    texture_width: i32,
    texture_height: i32,
    /// Pixels per tick, negative scrolls left
    speed: f32,
    /// Top-left corner of each tile
    tiles: Vec<Vec2>,
}

impl ParallaxLayer {
    pub fn new(
        texture: TextureId,
        texture_width: i32,
        texture_height: i32,
        screen_width: i32,
        speed: f32,
    ) -> Self {
        let texture_width = texture_width.max(1);
        // Enough tiles to cover the screen plus one entering
        let count = screen_width.max(0) / texture_width + 1;
        let tiles = (0..count)
            .map(|i| Vec2::new((i * texture_width) as f32, 0.0))
            .collect();
        Self {
            texture,
            texture_width,
            texture_height,
            speed,
            tiles,
        }
    }

    pub fn update(&mut self) {
        let width = self.texture_width as f32;
        let last_slot = width * (self.tiles.len() as f32 - 1.0);

        for tile in &mut self.tiles {
            tile.x += self.speed;
            if self.speed <= 0.0 {
                if tile.x <= -width {
                    tile.x = last_slot;
                }
            } else if tile.x >= last_slot {
                tile.x = -width;
            }
        }
    }

    pub fn tiles(&self) -> &[Vec2] {
        &self.tiles
    }

    pub fn draw(&self, batch: &mut impl SpriteBatch) {
        let w = self.texture_width as f32;
        let h = self.texture_height as f32;
        for tile in &self.tiles {
            batch.draw(SpriteInstance {
                texture: self.texture.0,
                source: [0.0, 0.0, w, h],
                dest: [tile.x, tile.y, w, h],
                tint: WHITE,
            });
        }
    }
}
