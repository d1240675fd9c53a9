//! Sprite-sheet animation
//!
//! A sheet is a single row of equally sized frames. The animation only keeps
//! a frame cursor over elapsed time; it has no physics of its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{SpriteBatch, SpriteInstance, TextureId};

/// Slack for float drift when the accumulator lands exactly on a frame boundary
const FRAME_EPSILON: f64 = 1e-5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub texture: TextureId,
    /// Centre of the sprite on screen (mirrors the owning entity)
    pub position: Vec2,
    frame_width: u32,
    frame_height: u32,
    frame_count: u32,
    frames_per_second: f32,
    pub tint: [f32; 4],
    scale: f32,
    looping: bool,
    /// Time carried toward the next frame
    accumulator: f64,
    frame_index: u32,
    finished: bool,
}

impl Animation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        texture: TextureId,
        position: Vec2,
        frame_width: u32,
        frame_height: u32,
        frame_count: u32,
        frames_per_second: f32,
        tint: [f32; 4],
        scale: f32,
        looping: bool,
    ) -> Self {
        Self {
            texture,
            position,
            frame_width,
            frame_height,
            frame_count: frame_count.max(1),
            frames_per_second: if frames_per_second > 0.0 {
                frames_per_second
            } else {
                1.0
            },
            tint,
            scale,
            looping,
            accumulator: 0.0,
            frame_index: 0,
            finished: false,
        }
    }

    /// A one-frame "animation" for plain textures
    pub fn still(texture: TextureId, position: Vec2, width: u32, height: u32) -> Self {
        Self::new(
            texture,
            position,
            width,
            height,
            1,
            1.0,
            crate::colors::WHITE,
            1.0,
            false,
        )
    }

    /// Seconds each frame stays on screen
    #[inline]
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frames_per_second
    }

    /// Advance the frame cursor by `elapsed` seconds.
    ///
    /// The whole frames in the accumulator are counted in one step and the
    /// remainder is carried, so the cursor lands on the same frame however
    /// the time is sliced and a long stall costs no more than a short tick.
    pub fn update(&mut self, elapsed: f32) {
        if self.finished {
            return;
        }
        let frame_duration = 1.0 / self.frames_per_second as f64;
        let total = self.accumulator + elapsed.max(0.0) as f64;
        let steps = ((total + FRAME_EPSILON) / frame_duration).floor();
        self.accumulator = (total - steps * frame_duration).max(0.0);
        if steps < 1.0 {
            return;
        }

        // Saturating cast; only the step count modulo the sheet matters
        let steps = steps as u64;
        let count = self.frame_count as u64;
        let index = self.frame_index as u64;
        if self.looping {
            self.frame_index = ((index + steps % count) % count) as u32;
        } else if index.saturating_add(steps) >= count {
            self.frame_index = self.frame_count - 1;
            self.finished = true;
            self.accumulator = 0.0;
        } else {
            self.frame_index = (index + steps) as u32;
        }
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Non-looping animation has reached and is holding its last frame
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// On-screen width in whole pixels
    pub fn width(&self) -> i32 {
        (self.frame_width as f32 * self.scale) as i32
    }

    /// On-screen height in whole pixels
    pub fn height(&self) -> i32 {
        (self.frame_height as f32 * self.scale) as i32
    }

    /// Texel rectangle of the current frame: x, y, width, height
    pub fn source_rect(&self) -> [f32; 4] {
        [
            (self.frame_index * self.frame_width) as f32,
            0.0,
            self.frame_width as f32,
            self.frame_height as f32,
        ]
    }

    /// Screen rectangle, centred on `position`
    pub fn dest_rect(&self) -> [f32; 4] {
        let w = self.width();
        let h = self.height();
        [
            (self.position.x as i32 - w / 2) as f32,
            (self.position.y as i32 - h / 2) as f32,
            w as f32,
            h as f32,
        ]
    }

    pub fn draw(&self, batch: &mut impl SpriteBatch) {
        batch.draw(SpriteInstance {
            texture: self.texture.0,
            source: self.source_rect(),
            dest: self.dest_rect(),
            tint: self.tint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;

    fn sheet(frame_count: u32, fps: f32, looping: bool) -> Animation {
        Animation::new(
            TextureId(1),
            Vec2::ZERO,
            115,
            69,
            frame_count,
            fps,
            WHITE,
            1.0,
            looping,
        )
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut anim = sheet(8, 30.0, true);
        let dt = anim.frame_duration();
        for _ in 0..9 {
            anim.update(dt);
        }
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_single_long_update_matches_sliced_updates() {
        let mut anim = sheet(8, 30.0, true);
        anim.update(9.0 / 30.0);
        assert_eq!(anim.frame_index(), 1);

        let mut anim = sheet(8, 30.0, true);
        anim.update(20.5 / 30.0);
        assert_eq!(anim.frame_index(), 20 % 8);
    }

    #[test]
    fn test_hour_long_update_lands_on_cycle_boundary() {
        // 3600 s at 30 fps is 108000 frames, a whole number of 8-frame cycles
        let mut anim = sheet(8, 30.0, true);
        anim.update(3600.0);
        assert_eq!(anim.frame_index(), 0);

        anim.update(3.0 / 30.0);
        assert_eq!(anim.frame_index(), 3);
    }

    #[test]
    fn test_huge_update_terminates() {
        let mut anim = sheet(8, 30.0, true);
        anim.update(1.0e7);
        assert_eq!(anim.frame_index(), 0);

        let mut anim = sheet(4, 10.0, false);
        anim.update(1.0e7);
        assert_eq!(anim.frame_index(), 3);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_partial_frame_does_not_advance() {
        let mut anim = sheet(8, 30.0, true);
        anim.update(0.5 / 30.0);
        assert_eq!(anim.frame_index(), 0);
        anim.update(0.6 / 30.0);
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_non_looping_freezes_on_last_frame() {
        let mut anim = sheet(4, 10.0, false);
        anim.update(2.0);
        assert_eq!(anim.frame_index(), 3);
        assert!(anim.is_finished());
        anim.update(1.0);
        assert_eq!(anim.frame_index(), 3);
    }

    #[test]
    fn test_degenerate_parameters() {
        let mut anim = sheet(0, 0.0, true);
        assert_eq!(anim.frame_count(), 1);
        anim.update(5.0);
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn test_source_and_dest_rects() {
        let mut anim = sheet(8, 30.0, true);
        anim.position = Vec2::new(200.0, 100.0);
        anim.update(2.0 / 30.0);
        assert_eq!(anim.source_rect(), [230.0, 0.0, 115.0, 69.0]);
        // 115 / 2 = 57, 69 / 2 = 34
        assert_eq!(anim.dest_rect(), [143.0, 66.0, 115.0, 69.0]);

        let mut batch = Vec::new();
        anim.draw(&mut batch);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].texture, 1);
    }

    #[test]
    fn test_scale_changes_size() {
        let anim = Animation::new(TextureId(1), Vec2::ZERO, 40, 20, 1, 1.0, WHITE, 1.5, false);
        assert_eq!(anim.width(), 60);
        assert_eq!(anim.height(), 30);
    }
}
