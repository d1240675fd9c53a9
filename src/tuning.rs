//! Data-driven game balance
//!
//! Movement values are in pixels per simulation tick, timers in seconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_move_speed: f32,
    pub player_health: i32,
    /// Seconds between automatic shots
    pub fire_interval: f64,

    // === Enemies ===
    /// Seconds between enemy spawns
    pub spawn_interval: f64,
    pub enemy_speed: f32,
    pub enemy_health: i32,
    /// Damage dealt to the player on contact
    pub enemy_damage: i32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_damage: i32,

    // === Background ===
    /// Per-layer scroll speed, negative scrolls left
    pub parallax_speeds: Vec<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_move_speed: 8.0,
            player_health: 100,
            fire_interval: 0.15,

            spawn_interval: 1.0,
            enemy_speed: 6.0,
            enemy_health: 10,
            enemy_damage: 10,

            projectile_speed: 20.0,
            projectile_damage: 2,

            parallax_speeds: vec![-1.0, -2.0],
        }
    }
}

impl Tuning {
    /// First offending field, if any
    pub fn invalid_field(&self) -> Option<&'static str> {
        if self.player_health <= 0 {
            return Some("player_health");
        }
        if self.enemy_health <= 0 {
            return Some("enemy_health");
        }
        if self.fire_interval.is_nan() || self.fire_interval <= 0.0 {
            return Some("fire_interval");
        }
        if self.spawn_interval.is_nan() || self.spawn_interval <= 0.0 {
            return Some("spawn_interval");
        }
        if self.player_move_speed < 0.0 {
            return Some("player_move_speed");
        }
        if self.enemy_damage < 0 || self.projectile_damage < 0 {
            return Some("damage");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().invalid_field(), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "enemy_speed": 3.5 }"#).unwrap();
        assert_eq!(tuning.enemy_speed, 3.5);
        assert_eq!(tuning.fire_interval, 0.15);
        assert_eq!(tuning.parallax_speeds, vec![-1.0, -2.0]);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let tuning = Tuning {
            spawn_interval: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.invalid_field(), Some("spawn_interval"));
    }
}
