//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in through `FrameTime`, never from the system clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod animation;
pub mod clock;
pub mod collision;
pub mod entity;
pub mod parallax;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use animation::Animation;
pub use clock::{FrameClock, FrameTime};
pub use collision::{player_vs_enemies, projectiles_vs_enemies};
pub use entity::{Body, Enemy, Entity, Player, Projectile};
pub use parallax::ParallaxLayer;
pub use rect::Rect;
pub use spawn::{FireControl, IntervalTimer, Spawner};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
