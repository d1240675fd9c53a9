//! Sprite records for 2D rendering

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Opaque handle to a texture owned by the external renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// One textured quad: which texture, which texels, where on screen, what tint.
///
/// Laid out for direct upload as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub texture: u32,
    /// Source rectangle in texels: x, y, width, height
    pub source: [f32; 4],
    /// Destination rectangle in screen pixels: x, y, width, height
    pub dest: [f32; 4],
    pub tint: [f32; 4],
}

impl SpriteInstance {
    pub fn texture_id(&self) -> TextureId {
        TextureId(self.texture)
    }

    /// Centre of the destination rectangle
    pub fn dest_center(&self) -> [f32; 2] {
        [
            self.dest[0] + self.dest[2] / 2.0,
            self.dest[1] + self.dest[3] / 2.0,
        ]
    }
}

/// Sink for sprites emitted during a frame
pub trait SpriteBatch {
    fn draw(&mut self, sprite: SpriteInstance);
}

impl SpriteBatch for Vec<SpriteInstance> {
    fn draw(&mut self, sprite: SpriteInstance) {
        self.push(sprite);
    }
}
