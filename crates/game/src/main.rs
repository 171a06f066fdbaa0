//! Holdout - first-person house defense. Headless host for the simulation
//! core: wires config, logging, the encounter spawner and a scripted
//! defender into the per-tick update loop.

mod config;
mod enemy;
mod events;
mod input;
mod player;
mod projectile;
mod spawner;
mod state;
mod stats;

use anyhow::Result;
use glam::DVec3;
use log::{info, warn};
use sim_core::{standard_layout, Time};

use config::HostConfig;
use events::{EventListener, GameEvent};
use input::TickInput;
use spawner::{spawn_opening_wave, EncounterSpawner};
use state::GameState;

/// Logs every simulation event. Stands in for the renderer/audio/score
/// observers a graphical host would register.
struct EventLog;

impl EventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent<'_>) {
        match event {
            GameEvent::EnemySpawned { enemy } => {
                info!(
                    "{:?} entered the house at ({:.1}, {:.1}, {:.1})",
                    enemy.kind, enemy.position.x, enemy.position.y, enemy.position.z
                );
            }
            GameEvent::BulletFired { bullet } => {
                log::debug!(
                    "shot fired from ({:.1}, {:.1}, {:.1})",
                    bullet.position.x, bullet.position.y, bullet.position.z
                );
            }
            GameEvent::EnemyDefeated { enemy } => {
                info!("{:?} down", enemy.kind);
            }
            GameEvent::PlayerDamaged { enemy, health } => {
                warn!("hit by {:?}, health now {}", enemy.kind, health);
            }
        }
    }
}

/// Scripted defender for the drill: aim at the nearest living intruder,
/// hold the trigger, reload when dry. Stands in for real device input.
fn drill_input(state: &GameState) -> TickInput {
    let eye = state.player.eye_position();
    let target = state
        .enemies()
        .iter()
        .filter(|enemy| enemy.is_alive())
        .min_by(|a, b| {
            let da = (a.position - eye).length_squared();
            let db = (b.position - eye).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(enemy) => TickInput {
            aim: Some(enemy.position + DVec3::new(0.0, 0.5, 0.0) - eye),
            fire: true,
            reload: state.player.ammo == 0,
            ..TickInput::default()
        },
        None => TickInput::idle(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HostConfig::load();
    info!(
        "starting holdout drill: {:.0} Hz fixed step, {:.0}s",
        config.target_fps, config.demo_seconds
    );

    let mut state = GameState::new(standard_layout());
    state.add_listener(Box::new(EventLog));
    spawn_opening_wave(&mut state);

    let mut spawner = EncounterSpawner::new(
        config.spawn_interval,
        config.max_active_enemies,
        config.spawn_seed,
    );

    let mut time = Time::new();
    time.set_fixed_rate(config.target_fps);

    while !state.is_game_over() && time.elapsed_seconds() < config.demo_seconds {
        time.update();
        while time.should_fixed_update() {
            let dt = time.fixed_timestep_seconds();
            state.update(dt, drill_input(&state));
            spawner.update(&mut state, dt);
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    let stats = state.statistics;
    info!(
        "drill complete after {} frames: {} defeated, {}/{} shots landed ({:.0}% accuracy), {} damage taken",
        time.frame_count(),
        stats.enemies_defeated,
        stats.shots_landed,
        stats.shots_fired,
        stats.accuracy() * 100.0,
        stats.damage_taken
    );
    if state.is_game_over() {
        warn!("defender overrun - the house is lost");
    }

    Ok(())
}
