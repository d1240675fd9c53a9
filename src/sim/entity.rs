//! Player, enemy and projectile entities
//!
//! All three share a `Body`: a centre position, an animation that defines
//! their size, an active flag and health. Positions are sprite centres, the
//! same point the animation is drawn around, so every bounding box is built
//! the same way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::rect::Rect;
use crate::settings::Viewport;
use crate::tuning::Tuning;

/// State shared by every entity kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub animation: Animation,
    active: bool,
    health: i32,
}

impl Body {
    pub fn new(pos: Vec2, mut animation: Animation, health: i32) -> Self {
        animation.position = pos;
        Self {
            pos,
            animation,
            active: true,
            health,
        }
    }

    /// Move the animation to the body and step it
    fn animate(&mut self, elapsed: f32) {
        self.animation.position = self.pos;
        self.animation.update(elapsed);
    }
}

/// The "positioned, bounded, healthy, active" capability set
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    fn position(&self) -> Vec2 {
        self.body().pos
    }

    fn width(&self) -> i32 {
        self.body().animation.width()
    }

    fn height(&self) -> i32 {
        self.body().animation.height()
    }

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn health(&self) -> i32 {
        self.body().health
    }

    fn set_health(&mut self, health: i32) {
        self.body_mut().health = health;
    }

    fn take_damage(&mut self, amount: i32) {
        let body = self.body_mut();
        body.health = body.health.saturating_sub(amount);
    }

    /// Bounding box centred on the position
    fn bounds(&self) -> Rect {
        Rect::centered(self.position(), self.width(), self.height())
    }

    /// Mark for removal. One-way; health is clamped so a dead entity never
    /// reports less than zero.
    fn deactivate(&mut self) {
        let body = self.body_mut();
        body.active = false;
        body.health = body.health.max(0);
    }

    /// Deactivate if health has run out. Returns true on the transition.
    fn resolve_death(&mut self) -> bool {
        if self.is_active() && self.health() <= 0 {
            self.deactivate();
            return true;
        }
        false
    }
}

/// The player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Pixels per tick per direction
    pub move_speed: f32,
    pub score: u64,
}

impl Player {
    pub fn new(animation: Animation, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, animation, tuning.player_health),
            move_speed: tuning.player_move_speed,
            score: 0,
        }
    }

    /// Apply one tick of steering, then clamp into the playfield
    pub fn steer(&mut self, direction: Vec2, analog: Vec2, viewport: Viewport) {
        let speed = self.move_speed;
        // Stick Y points up, screen Y points down
        self.body.pos.x += analog.x * speed;
        self.body.pos.y -= analog.y * speed;
        self.body.pos += direction * speed;
        self.clamp_to_playfield(viewport);
    }

    /// X in [margin, width - margin], Y in [margin, height - ship height]
    pub fn clamp_to_playfield(&mut self, viewport: Viewport) {
        use crate::consts::PLAYFIELD_MARGIN;

        let max_x = (viewport.width as f32 - PLAYFIELD_MARGIN).max(PLAYFIELD_MARGIN);
        let max_y = (viewport.height as f32 - self.height() as f32).max(PLAYFIELD_MARGIN);
        self.body.pos.x = self.body.pos.x.clamp(PLAYFIELD_MARGIN, max_x);
        self.body.pos.y = self.body.pos.y.clamp(PLAYFIELD_MARGIN, max_y);
    }

    pub fn update(&mut self, elapsed: f32) {
        self.body.animate(elapsed);
    }

    /// Where shots leave the ship: horizontal centre offset, same height
    pub fn muzzle(&self) -> Vec2 {
        self.body.pos + Vec2::new((self.width() / 2) as f32, 0.0)
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// A mine drifting right to left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    /// Damage dealt to the player on contact
    pub damage: i32,
    /// Leftward pixels per tick
    pub speed: f32,
}

impl Enemy {
    pub fn new(animation: Animation, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, animation, tuning.enemy_health),
            damage: tuning.enemy_damage,
            speed: tuning.enemy_speed,
        }
    }

    pub fn update(&mut self, elapsed: f32) {
        self.body.pos.x -= self.speed;
        self.body.animate(elapsed);

        if self.is_off_screen() {
            self.deactivate();
        }
    }

    /// Entirely past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.bounds().right() < 0
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// A laser bolt travelling left to right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub damage: i32,
    /// Rightward pixels per tick
    pub speed: f32,
}

impl Projectile {
    /// Projectiles have one hit point; they die by hitting, not by damage
    pub fn new(animation: Animation, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, animation, 1),
            damage: tuning.projectile_damage,
            speed: tuning.projectile_speed,
        }
    }

    pub fn update(&mut self, elapsed: f32, viewport: Viewport) {
        self.body.pos.x += self.speed;
        self.body.animate(elapsed);

        if self.is_off_screen(viewport) {
            self.deactivate();
        }
    }

    /// Leading edge has left the right side of the viewport
    pub fn is_off_screen(&self, viewport: Viewport) -> bool {
        self.bounds().right() > viewport.width
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
