//! Bullets in flight.

use glam::DVec3;

/// A fired round. Integrated every tick; the engine prunes bullets whose
/// lifetime expired or that left the house bounds.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: DVec3,
    /// World units per second.
    pub velocity: DVec3,
    pub damage: f64,
    /// Seconds of flight remaining.
    pub ttl: f64,
    pub radius: f64,
}

impl Bullet {
    pub fn new(position: DVec3, velocity: DVec3, damage: f64, ttl: f64) -> Self {
        Self {
            position,
            velocity,
            damage,
            ttl,
            radius: 0.25,
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.ttl -= dt;
    }

    pub fn is_active(&self) -> bool {
        self.ttl > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrates_position_and_ttl() {
        let mut bullet = Bullet::new(DVec3::ZERO, DVec3::new(30.0, 0.0, 0.0), 15.0, 1.5);
        bullet.update(0.1);
        assert!((bullet.position.x - 3.0).abs() < 1e-9);
        assert!((bullet.ttl - 1.4).abs() < 1e-9);
        assert!(bullet.is_active());
    }

    #[test]
    fn expires_when_ttl_runs_out() {
        let mut bullet = Bullet::new(DVec3::ZERO, DVec3::ZERO, 15.0, 0.05);
        bullet.update(0.05);
        assert!(!bullet.is_active());
    }
}
