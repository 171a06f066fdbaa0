//! Encounter scripting: the opening wave and timed reinforcements.
//!
//! Spawning lives on the host side so the simulation tick itself stays
//! deterministic; all randomness is confined to the seeded spawner.

use glam::DVec3;
use rand::prelude::*;
use sim_core::HouseLayout;

use crate::enemy::EnemyKind;
use crate::state::GameState;

/// How far out on the clamp bounds ground-floor intruders appear.
const GROUND_PERIMETER_RATIO: f64 = 0.85;
/// The upper-floor lurker starts slightly deeper into the perimeter.
const UPPER_PERIMETER_RATIO: f64 = 0.9;

/// Place the standard three-intruder encounter: a brute and a sprinter on
/// opposite ground-floor corners, a lurker on the upper floor.
pub fn spawn_opening_wave(state: &mut GameState) {
    let bounds_x = state.layout.bounds_x;
    let bounds_z = state.layout.bounds_z;
    let upper_y = state.layout.floor_height + 0.5;

    let brute = state.layout.constrain(DVec3::new(
        -bounds_x * GROUND_PERIMETER_RATIO,
        0.5,
        bounds_z * GROUND_PERIMETER_RATIO,
    ));
    let sprinter = state.layout.constrain(DVec3::new(
        bounds_x * GROUND_PERIMETER_RATIO,
        0.5,
        bounds_z * GROUND_PERIMETER_RATIO,
    ));
    let lurker = state
        .layout
        .constrain(DVec3::new(0.0, upper_y, bounds_z * UPPER_PERIMETER_RATIO));

    state.spawn_enemy(EnemyKind::Brute, Some(brute), None);
    state.spawn_enemy(EnemyKind::Sprinter, Some(sprinter), None);
    state.spawn_enemy(EnemyKind::Lurker, Some(lurker), None);
}

/// Interval-driven reinforcements at random perimeter angles, capped by the
/// number of intruders still alive.
pub struct EncounterSpawner {
    interval: f64,
    timer: f64,
    max_active: usize,
    rng: StdRng,
}

impl EncounterSpawner {
    pub fn new(interval: f64, max_active: usize, seed: u64) -> Self {
        Self {
            interval,
            timer: 0.0,
            max_active,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Accumulate time and spawn a reinforcement for every elapsed interval,
    /// as long as the live count stays under the cap.
    pub fn update(&mut self, state: &mut GameState, dt: f64) {
        self.timer += dt;
        while self.timer >= self.interval {
            self.timer -= self.interval;
            let active = state.enemies().iter().filter(|e| e.is_alive()).count();
            if active >= self.max_active {
                continue;
            }
            let kind = self.random_kind();
            let position = self.perimeter_position(&state.layout);
            state.spawn_enemy(kind, Some(position), None);
            log::debug!("reinforcement: {:?} at the perimeter", kind);
        }
    }

    fn random_kind(&mut self) -> EnemyKind {
        let roll = self.rng.gen::<f64>();
        if roll < 0.5 {
            EnemyKind::Brute
        } else if roll < 0.85 {
            EnemyKind::Sprinter
        } else {
            EnemyKind::Lurker
        }
    }

    fn perimeter_position(&mut self, layout: &HouseLayout) -> DVec3 {
        let angle = self.rng.gen::<f64>() * std::f64::consts::TAU;
        let x = angle.cos() * layout.bounds_x * GROUND_PERIMETER_RATIO;
        let z = angle.sin() * layout.bounds_z * GROUND_PERIMETER_RATIO;
        layout.constrain(DVec3::new(x, 0.5, z))
    }
}
