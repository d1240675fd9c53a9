//! Star Raid - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `renderer`: Sprite records handed to an external renderer
//! - `settings`: Runtime configuration loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError, Viewport};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one update per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default backbuffer size
    pub const VIEWPORT_WIDTH: i32 = 800;
    pub const VIEWPORT_HEIGHT: i32 = 480;

    /// Player may not get closer than this to the left, right and top edges
    pub const PLAYFIELD_MARGIN: f32 = 60.0;
    /// Enemies spawn at least this far from the top and bottom edges
    pub const SPAWN_MARGIN: i32 = 100;

    /// Player ship sheet: 8 frames of 115x69 at 30 fps
    pub const PLAYER_FRAME_WIDTH: u32 = 115;
    pub const PLAYER_FRAME_HEIGHT: u32 = 69;
    pub const PLAYER_FRAME_COUNT: u32 = 8;

    /// Mine sheet: 8 frames of 47x61 at 30 fps
    pub const ENEMY_FRAME_WIDTH: u32 = 47;
    pub const ENEMY_FRAME_HEIGHT: u32 = 61;
    pub const ENEMY_FRAME_COUNT: u32 = 8;

    /// Laser bolt: a single 46x16 frame
    pub const PROJECTILE_WIDTH: u32 = 46;
    pub const PROJECTILE_HEIGHT: u32 = 16;

    pub const SHEET_FPS: f32 = 30.0;
}

/// Texture handles understood by the renderer. The simulation never loads them.
pub mod textures {
    use crate::renderer::TextureId;

    pub const PLAYER: TextureId = TextureId(1);
    pub const ENEMY: TextureId = TextureId(2);
    pub const PROJECTILE: TextureId = TextureId(3);
    pub const BACKGROUND: TextureId = TextureId(4);
    pub const BG_LAYER_1: TextureId = TextureId(5);
    pub const BG_LAYER_2: TextureId = TextureId(6);
}

/// Tint colors (RGBA)
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
