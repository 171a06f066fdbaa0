//! Player state: movement, weapon gating, and persistent aim.

use glam::DVec3;
use sim_core::HouseLayout;

/// The defender. Created once at game start and mutated every tick by the
/// simulation engine.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: DVec3,
    pub speed: f64,
    pub health: i32,
    pub magazine_size: u32,
    pub ammo: u32,
    /// Cooldown applied per shot, in seconds.
    pub fire_rate: f64,
    pub reload_duration: f64,
    pub fire_cooldown: f64,
    pub reload_cooldown: f64,
    pub eye_height: f64,
    /// Where the player is looking. Always unit length; only replaced when a
    /// non-degenerate aim vector arrives, so aim persists across idle frames.
    pub view_direction: DVec3,
}

impl Player {
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            speed: 6.0,
            health: 100,
            magazine_size: 40,
            ammo: 40,
            fire_rate: 0.08,
            reload_duration: 1.5,
            fire_cooldown: 0.0,
            reload_cooldown: 0.0,
            eye_height: 1.4,
            view_direction: DVec3::new(0.0, 0.0, -1.0),
        }
    }

    /// Move along `direction` (unnormalized intent) for `dt` seconds, then
    /// clamp back into the house. A zero direction is a no-op.
    pub fn apply_movement(&mut self, direction: DVec3, dt: f64, layout: &HouseLayout) {
        if direction.length() == 0.0 {
            return;
        }
        let displacement = direction.normalize_or_zero() * self.speed * dt;
        self.position = layout.constrain(self.position + displacement);
    }

    /// Tick cooldown timers. When the reload timer runs out the magazine is
    /// refilled in the same step.
    pub fn update(&mut self, dt: f64) {
        if self.fire_cooldown > 0.0 {
            self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        }
        if self.reload_cooldown > 0.0 {
            self.reload_cooldown = (self.reload_cooldown - dt).max(0.0);
            if self.reload_cooldown == 0.0 {
                self.ammo = self.magazine_size;
            }
        }
    }

    pub fn can_fire(&self) -> bool {
        self.ammo > 0 && self.fire_cooldown == 0.0 && self.reload_cooldown == 0.0
    }

    /// Consume one round and start the per-shot cooldown. Returns false when
    /// gating rejects the shot.
    pub fn trigger_shot(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.ammo -= 1;
        self.fire_cooldown = self.fire_rate;
        true
    }

    /// Start a reload. Rejected while a reload is running or the magazine is
    /// already full. Reloading blocks firing until the timer expires.
    pub fn request_reload(&mut self) -> bool {
        if self.reload_cooldown > 0.0 || self.ammo == self.magazine_size {
            return false;
        }
        self.reload_cooldown = self.reload_duration;
        true
    }

    /// Store a new aim direction. Zero-length input is ignored so the last
    /// valid direction persists.
    pub fn set_view_direction(&mut self, direction: DVec3) {
        if direction.length() == 0.0 {
            return;
        }
        self.view_direction = direction.normalize_or_zero();
    }

    pub fn eye_position(&self) -> DVec3 {
        self.position + DVec3::new(0.0, self.eye_height, 0.0)
    }
}
