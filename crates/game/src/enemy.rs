//! Enemy archetypes and their per-tick steering.

use glam::DVec3;
use sim_core::HouseLayout;

/// Distance at which a Lurker breaks off and keeps range.
const LURKER_RETREAT_RANGE: f64 = 4.5;

/// The three intruder archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Slow, straight-line advance.
    Brute,
    /// Fast, straight-line advance.
    Sprinter,
    /// Kites: retreats when close, advances at full speed otherwise.
    Lurker,
}

/// One intruder. Spawned by the engine, dropped once no longer alive.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: DVec3,
    /// May dip below zero on the killing hit; alive means strictly positive.
    pub health: f64,
    pub speed: f64,
    pub hit_radius: f64,
    pub attack_interval: f64,
    pub attack_damage: i32,
    pub attack_cooldown: f64,
}

impl Enemy {
    pub fn new(kind: EnemyKind, position: DVec3) -> Self {
        Self {
            kind,
            position,
            health: 50.0,
            speed: 2.5,
            hit_radius: 0.75,
            attack_interval: 1.25,
            attack_damage: 8,
            attack_cooldown: 0.0,
        }
    }

    /// Steer toward (or away from) the player and tick the attack cooldown.
    /// Dead enemies do nothing.
    pub fn update(&mut self, dt: f64, player_position: DVec3, layout: &HouseLayout) {
        if !self.is_alive() {
            return;
        }

        if self.attack_cooldown > 0.0 {
            self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
        }

        let offset = player_position - self.position;
        let distance = offset.length();
        let mut direction = offset.normalize_or_zero();
        let mut desired_speed = self.speed;

        match self.kind {
            EnemyKind::Brute => desired_speed *= 0.6,
            EnemyKind::Sprinter => desired_speed *= 1.4,
            EnemyKind::Lurker => {
                if distance < LURKER_RETREAT_RANGE {
                    // Back away slightly to keep distance before dashing in.
                    direction = -direction;
                    desired_speed *= 0.9;
                }
            }
        }

        // Stop steering once adjacent to avoid jitter against the player.
        if distance > self.hit_radius * 0.5 {
            self.position = layout.constrain(self.position + direction * desired_speed * dt);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
