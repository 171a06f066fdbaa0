//! Host configuration. Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};

/// Settings for the headless host. Loaded from `config.ron` in the current
/// directory; missing or invalid files fall back to defaults. The core
/// simulation never reads this, it only sees the `dt` and inputs the host
/// derives from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Fixed simulation rate in Hz.
    #[serde(default = "default_target_fps")]
    pub target_fps: f64,
    /// Wall-clock length of the drill before the host exits.
    #[serde(default = "default_demo_seconds")]
    pub demo_seconds: f64,
    /// Seconds between reinforcement spawns.
    #[serde(default = "default_spawn_interval")]
    pub spawn_interval: f64,
    /// Live intruder cap for the reinforcement spawner.
    #[serde(default = "default_max_active")]
    pub max_active_enemies: usize,
    /// Seed for the reinforcement spawner's RNG.
    #[serde(default)]
    pub spawn_seed: u64,
}

fn default_target_fps() -> f64 {
    60.0
}
fn default_demo_seconds() -> f64 {
    30.0
}
fn default_spawn_interval() -> f64 {
    4.0
}
fn default_max_active() -> usize {
    6
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            demo_seconds: default_demo_seconds(),
            spawn_interval: default_spawn_interval(),
            max_active_enemies: default_max_active(),
            spawn_seed: 0,
        }
    }
}

impl HostConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(config) => return config,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}
