//! Collision detection and damage
//!
//! Two passes run after movement: the player against every enemy, then every
//! projectile against every enemy. Both use the entities' centred bounding
//! boxes. Damage is applied here; deciding who died is left to a single
//! health check afterwards.

use super::entity::{Enemy, Entity, Player, Projectile};
use super::state::GameEvent;

/// Player vs enemies.
///
/// Each touching enemy damages the player and is reduced to zero health.
/// Hits accumulate; there is no invulnerability window.
pub fn player_vs_enemies(player: &mut Player, enemies: &mut [Enemy], events: &mut Vec<GameEvent>) {
    if !player.is_active() {
        return;
    }
    let player_box = player.bounds();

    for enemy in enemies.iter_mut().filter(|e| e.is_active()) {
        if player_box.intersects(&enemy.bounds()) {
            player.take_damage(enemy.damage);
            enemy.set_health(0);
            events.push(GameEvent::PlayerHit {
                damage: enemy.damage,
                health: player.health(),
            });
        }
    }
}

/// Projectiles vs enemies, full cross scan.
///
/// A projectile is spent on its first hit and skips the remaining enemies.
pub fn projectiles_vs_enemies(
    projectiles: &mut [Projectile],
    enemies: &mut [Enemy],
    events: &mut Vec<GameEvent>,
) {
    for projectile in projectiles.iter_mut().filter(|p| p.is_active()) {
        let shot_box = projectile.bounds();

        for enemy in enemies.iter_mut().filter(|e| e.is_active()) {
            if shot_box.intersects(&enemy.bounds()) {
                enemy.take_damage(projectile.damage);
                projectile.deactivate();
                events.push(GameEvent::EnemyHit {
                    damage: projectile.damage,
                });
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::TextureId;
    use crate::sim::animation::Animation;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn still(w: u32, h: u32) -> Animation {
        Animation::still(TextureId(1), Vec2::ZERO, w, h)
    }

    fn enemy_at(x: f32, y: f32, health: i32, damage: i32) -> Enemy {
        let tuning = Tuning {
            enemy_health: health,
            enemy_damage: damage,
            ..Default::default()
        };
        Enemy::new(still(50, 50), Vec2::new(x, y), &tuning)
    }

    fn shot_at(x: f32, y: f32, damage: i32) -> Projectile {
        let tuning = Tuning {
            projectile_damage: damage,
            ..Default::default()
        };
        Projectile::new(still(46, 16), Vec2::new(x, y), &tuning)
    }

    #[test]
    fn test_player_rammed() {
        let mut player = Player::new(still(50, 50), Vec2::new(100.0, 100.0), &Tuning::default());
        let mut enemies = vec![enemy_at(110.0, 110.0, 10, 20)];
        let mut events = Vec::new();

        player_vs_enemies(&mut player, &mut enemies, &mut events);

        assert_eq!(player.health(), 80);
        assert_eq!(enemies[0].health(), 0);
        assert!(player.is_active());
        assert_eq!(
            events,
            vec![GameEvent::PlayerHit {
                damage: 20,
                health: 80
            }]
        );
    }

    #[test]
    fn test_multiple_rams_accumulate() {
        let mut player = Player::new(still(50, 50), Vec2::new(100.0, 100.0), &Tuning::default());
        let mut enemies = vec![
            enemy_at(110.0, 110.0, 10, 60),
            enemy_at(90.0, 95.0, 10, 60),
            enemy_at(400.0, 400.0, 10, 60),
        ];
        let mut events = Vec::new();

        player_vs_enemies(&mut player, &mut enemies, &mut events);

        assert_eq!(player.health(), -20);
        assert_eq!(enemies[2].health(), 10);
        assert_eq!(events.len(), 2);
        // Death is decided later, in one place
        assert!(player.is_active());
        assert!(player.resolve_death());
        assert_eq!(player.health(), 0);
    }

    #[test]
    fn test_projectile_one_hit() {
        let mut shots = vec![shot_at(200.0, 200.0, 10)];
        let mut enemies = vec![enemy_at(200.0, 200.0, 10, 10)];
        let mut events = Vec::new();

        projectiles_vs_enemies(&mut shots, &mut enemies, &mut events);

        assert_eq!(enemies[0].health(), 0);
        assert!(!shots[0].is_active());
    }

    #[test]
    fn test_spent_projectile_skips_other_enemies() {
        let mut shots = vec![shot_at(200.0, 200.0, 4)];
        let mut enemies = vec![
            enemy_at(200.0, 200.0, 10, 10),
            enemy_at(205.0, 200.0, 10, 10),
        ];
        let mut events = Vec::new();

        projectiles_vs_enemies(&mut shots, &mut enemies, &mut events);

        assert_eq!(enemies[0].health(), 6);
        assert_eq!(enemies[1].health(), 10);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_two_shots_one_enemy() {
        let mut shots = vec![shot_at(200.0, 200.0, 4), shot_at(210.0, 205.0, 4)];
        let mut enemies = vec![enemy_at(200.0, 200.0, 10, 10)];
        let mut events = Vec::new();

        projectiles_vs_enemies(&mut shots, &mut enemies, &mut events);

        assert_eq!(enemies[0].health(), 2);
        assert!(shots.iter().all(|s| !s.is_active()));
    }

    #[test]
    fn test_inactive_entities_ignored() {
        let mut shots = vec![shot_at(200.0, 200.0, 4)];
        let mut enemies = vec![enemy_at(200.0, 200.0, 10, 10)];
        enemies[0].deactivate();
        let mut events = Vec::new();

        projectiles_vs_enemies(&mut shots, &mut enemies, &mut events);

        assert!(shots[0].is_active());
        assert!(events.is_empty());
    }

    #[test]
    fn test_near_miss() {
        // Boxes 46 and 50 wide centred 48 apart only touch, no overlap
        let mut shots = vec![shot_at(200.0, 200.0, 4)];
        let mut enemies = vec![enemy_at(248.0, 200.0, 10, 10)];
        let mut events = Vec::new();

        projectiles_vs_enemies(&mut shots, &mut enemies, &mut events);

        assert!(shots[0].is_active());
        assert_eq!(enemies[0].health(), 10);
    }
}
