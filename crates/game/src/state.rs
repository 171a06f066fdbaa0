//! Authoritative simulation state and the per-tick update pipeline.

use glam::DVec3;
use sim_core::HouseLayout;

use crate::enemy::{Enemy, EnemyKind};
use crate::events::{dispatch, EventListener, GameEvent};
use crate::input::TickInput;
use crate::player::Player;
use crate::projectile::Bullet;
use crate::stats::GameStatistics;

/// Muzzle velocity in world units per second.
const BULLET_SPEED: f64 = 30.0;
const BULLET_DAMAGE: f64 = 15.0;
const BULLET_TTL: f64 = 1.5;
/// Bullets spawn slightly ahead of the eye so they clear the player.
const MUZZLE_OFFSET: f64 = 0.3;
/// Extra reach on top of an enemy's hit radius for melee attacks.
const MELEE_REACH: f64 = 0.2;

fn default_spawn_position() -> DVec3 {
    DVec3::new(0.0, 0.5, 6.0)
}

/// Root aggregate and single source of truth. Owns every entity for its
/// lifetime; hosts mutate the simulation only through [`GameState::update`].
pub struct GameState {
    pub layout: HouseLayout,
    pub player: Player,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    pub statistics: GameStatistics,
    listeners: Vec<Box<dyn EventListener>>,
}

impl GameState {
    /// Build a fresh simulation around an already-constructed layout. The
    /// composition root decides the geometry (usually `standard_layout()`).
    pub fn new(layout: HouseLayout) -> Self {
        let player = Player::new(layout.spawn_point());
        Self {
            layout,
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            statistics: GameStatistics::default(),
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn is_game_over(&self) -> bool {
        self.player.health <= 0
    }

    // ── Entity management ───────────────────────────────────────────────

    /// Add an enemy to the active set and announce it. Position defaults to
    /// the hallway entrance, health to the archetype default.
    pub fn spawn_enemy(
        &mut self,
        kind: EnemyKind,
        position: Option<DVec3>,
        health: Option<f64>,
    ) -> &Enemy {
        let mut enemy = Enemy::new(kind, position.unwrap_or_else(default_spawn_position));
        if let Some(health) = health {
            enemy.health = health;
        }
        self.enemies.push(enemy);
        let idx = self.enemies.len() - 1;
        dispatch(
            &mut self.listeners,
            GameEvent::EnemySpawned {
                enemy: &self.enemies[idx],
            },
        );
        &self.enemies[idx]
    }

    /// Fire a bullet along the player's view direction. An explicit
    /// `direction` re-aims first; otherwise the persisted aim is used, with
    /// a forward fallback should it ever be degenerate. Returns `None` when
    /// ammo or cooldown gating rejects the shot.
    pub fn fire_projectile(&mut self, direction: Option<DVec3>) -> Option<&Bullet> {
        if let Some(direction) = direction {
            self.player.set_view_direction(direction);
        }

        let mut aim = self.player.view_direction;
        if aim.length() == 0.0 {
            aim = DVec3::new(0.0, 0.0, -1.0);
        }
        let aim = aim.normalize_or_zero();

        if !self.player.trigger_shot() {
            return None;
        }

        let bullet = Bullet::new(
            self.player.eye_position() + aim * MUZZLE_OFFSET,
            aim * BULLET_SPEED,
            BULLET_DAMAGE,
            BULLET_TTL,
        );
        self.bullets.push(bullet);
        self.statistics.shots_fired += 1;
        let idx = self.bullets.len() - 1;
        dispatch(
            &mut self.listeners,
            GameEvent::BulletFired {
                bullet: &self.bullets[idx],
            },
        );
        self.bullets.get(idx)
    }

    // ── Simulation loop ─────────────────────────────────────────────────

    /// Advance the simulation by `dt` seconds. The step order is fixed:
    /// reload request, movement, aim, player cooldowns, firing, bullet
    /// integration and pruning, enemy AI, collision resolution. One call
    /// runs to completion before the next may start; listeners observe
    /// events synchronously from inside this call.
    pub fn update(&mut self, dt: f64, input: TickInput) {
        if input.reload {
            self.player.request_reload();
        }

        if let Some(movement) = input.movement {
            self.player.apply_movement(movement, dt, &self.layout);
        }

        if let Some(aim) = input.aim {
            self.player.set_view_direction(aim);
        }

        self.player.update(dt);

        if input.fire && self.player.can_fire() {
            let _ = self.fire_projectile(None);
        }

        self.update_bullets(dt);
        self.update_enemies(dt);
        self.handle_collisions();
    }

    // ── Internal helpers ────────────────────────────────────────────────

    fn update_bullets(&mut self, dt: f64) {
        let layout = &self.layout;
        self.bullets.retain_mut(|bullet| {
            bullet.update(dt);
            bullet.is_active() && layout.is_inside(bullet.position)
        });
    }

    fn update_enemies(&mut self, dt: f64) {
        let player_position = self.player.position;
        for enemy in &mut self.enemies {
            enemy.update(dt, player_position, &self.layout);
        }
    }

    fn handle_collisions(&mut self) {
        let Self {
            player,
            enemies,
            bullets,
            statistics,
            listeners,
            ..
        } = self;

        // Enemies killed last tick had their death event already; sweep them
        // before anyone gets to act this tick.
        enemies.retain(|enemy| enemy.is_alive());

        // Melee contact: at most one attack per enemy per tick, but several
        // enemies may each land one.
        for enemy in enemies.iter_mut() {
            if enemy.attack_cooldown > 0.0 {
                continue;
            }
            let distance = (enemy.position - player.position).length();
            if distance > enemy.hit_radius + MELEE_REACH {
                continue;
            }
            player.health -= enemy.attack_damage;
            enemy.attack_cooldown = enemy.attack_interval;
            statistics.damage_taken += enemy.attack_damage as u32;
            dispatch(
                listeners,
                GameEvent::PlayerDamaged {
                    enemy,
                    health: player.health,
                },
            );
        }

        // Bullet hits: first living enemy in iteration order wins, the
        // bullet is consumed whether or not the hit was lethal.
        let mut surviving = Vec::with_capacity(bullets.len());
        for bullet in std::mem::take(bullets) {
            let mut consumed = false;
            for enemy in enemies.iter_mut() {
                if !enemy.is_alive() {
                    continue;
                }
                if (enemy.position - bullet.position).length() > enemy.hit_radius + bullet.radius {
                    continue;
                }
                enemy.health -= bullet.damage;
                if !enemy.is_alive() {
                    statistics.enemies_defeated += 1;
                    dispatch(listeners, GameEvent::EnemyDefeated { enemy });
                }
                statistics.shots_landed += 1;
                consumed = true;
                break;
            }
            if !consumed {
                surviving.push(bullet);
            }
        }
        *bullets = surviving;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::standard_layout;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn new_state() -> GameState {
        GameState::new(standard_layout())
    }

    fn advance(state: &mut GameState, seconds: f64, step: f64) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            state.update(step, TickInput::idle());
            elapsed += step;
        }
    }

    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl EventListener for Recorder {
        fn on_event(&mut self, event: &GameEvent<'_>) {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, event.name()));
        }
    }

    #[test]
    fn bullet_eliminates_enemy() {
        let mut state = new_state();
        let enemy_position = DVec3::new(6.0, 0.5, 0.0);
        state.spawn_enemy(EnemyKind::Brute, Some(enemy_position), Some(15.0));
        // Shots leave from the eye, so the aim must account for the drop.
        let direction = enemy_position - state.player.eye_position();

        assert!(state.fire_projectile(Some(direction)).is_some());
        advance(&mut state, 0.8, 1.0 / 120.0);

        assert_eq!(state.statistics.enemies_defeated, 1);
        assert!(state.statistics.shots_landed >= 1);
        assert!(state.enemies().is_empty(), "corpse must be swept by now");
    }

    #[test]
    fn ammo_management_requires_reload() {
        let mut state = new_state();
        state.player.magazine_size = 3;
        state.player.ammo = 3;
        let direction = DVec3::new(1.0, 0.0, 0.0);

        for _ in 0..3 {
            assert!(state.fire_projectile(Some(direction)).is_some());
            let fire_rate = state.player.fire_rate;
            advance(&mut state, fire_rate, fire_rate);
        }

        assert_eq!(state.player.ammo, 0);
        assert!(state.fire_projectile(Some(direction)).is_none());

        assert!(state.player.request_reload());
        let reload = state.player.reload_duration;
        advance(&mut state, reload, 1.0 / 120.0);
        assert_eq!(state.player.ammo, state.player.magazine_size);

        assert!(state.fire_projectile(Some(direction)).is_some());
    }

    #[test]
    fn dry_fire_leaves_cooldown_and_stats_untouched() {
        let mut state = new_state();
        state.player.ammo = 0;

        assert!(state.fire_projectile(None).is_none());
        assert_eq!(state.player.fire_cooldown, 0.0);
        assert_eq!(state.statistics.shots_fired, 0);
        assert!(state.bullets().is_empty());
    }

    #[test]
    fn enemy_ai_closes_on_player() {
        let mut state = new_state();
        state.spawn_enemy(EnemyKind::Sprinter, Some(DVec3::new(0.0, 0.5, 8.0)), None);

        let start = (state.enemies()[0].position - state.player.position).length();
        advance(&mut state, 1.0, 1.0 / 60.0);
        let end = (state.enemies()[0].position - state.player.position).length();

        assert!(end < start);
    }

    #[test]
    fn aim_persists_across_idle_frames() {
        let mut state = new_state();
        let aim = DVec3::new(0.4, -0.3, -1.0);
        state.update(
            1.0 / 120.0,
            TickInput {
                aim: Some(aim),
                ..TickInput::default()
            },
        );
        let stored = state.player.view_direction;
        assert!((stored - aim.normalize_or_zero()).length() < 1e-12);

        advance(&mut state, 0.2, 1.0 / 120.0);
        assert_eq!(state.player.view_direction, stored);

        let bullet = state.fire_projectile(None).expect("gating allows the shot");
        let flight = bullet.velocity.normalize_or_zero();
        assert!((flight - stored).length() < 1e-12);
    }

    #[test]
    fn melee_attack_damages_player_once_per_cooldown() {
        let mut state = new_state();
        state.spawn_enemy(EnemyKind::Brute, Some(DVec3::new(0.0, 0.5, 0.2)), None);

        state.update(1.0 / 120.0, TickInput::idle());
        assert_eq!(state.player.health, 92);
        assert_eq!(state.statistics.damage_taken, 8);

        // Attack cooldown holds the next hit back.
        state.update(1.0 / 120.0, TickInput::idle());
        assert_eq!(state.player.health, 92);
    }

    #[test]
    fn dead_enemies_are_swept_on_the_following_tick() {
        let mut state = new_state();
        let enemy_position = DVec3::new(3.0, 0.5, 0.0);
        state.spawn_enemy(EnemyKind::Brute, Some(enemy_position), Some(10.0));
        let direction = enemy_position - state.player.eye_position();
        assert!(state.fire_projectile(Some(direction)).is_some());

        // Step until the kill registers; the corpse stays listed that tick.
        let mut killed_tick_seen = false;
        for _ in 0..60 {
            state.update(1.0 / 120.0, TickInput::idle());
            if state.statistics.enemies_defeated == 1 && !killed_tick_seen {
                killed_tick_seen = true;
                assert_eq!(state.enemies().len(), 1);
                assert!(!state.enemies()[0].is_alive());
                state.update(1.0 / 120.0, TickInput::idle());
                assert!(state.enemies().is_empty());
                break;
            }
        }
        assert!(killed_tick_seen, "bullet never connected");
    }

    #[test]
    fn bullets_expire_and_leave_bounds() {
        let mut state = new_state();
        assert!(state.fire_projectile(Some(DVec3::new(1.0, 0.0, 0.0))).is_some());
        assert_eq!(state.bullets().len(), 1);

        // 30 u/s against a 6 unit half-width: gone well within 0.3 s.
        advance(&mut state, 0.3, 1.0 / 120.0);
        assert!(state.bullets().is_empty());
        assert_eq!(state.statistics.shots_fired, 1);
        assert_eq!(state.statistics.shots_landed, 0);
    }

    #[test]
    fn events_fire_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = new_state();
        state.add_listener(Box::new(Recorder { tag: "a", log: Rc::clone(&log) }));
        state.add_listener(Box::new(Recorder { tag: "b", log: Rc::clone(&log) }));

        state.spawn_enemy(EnemyKind::Lurker, None, None);
        assert_eq!(
            *log.borrow(),
            vec!["a:enemy_spawned".to_string(), "b:enemy_spawned".to_string()]
        );
    }

    #[test]
    fn full_engagement_emits_typed_events() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = new_state();
        state.add_listener(Box::new(Recorder { tag: "ev", log: Rc::clone(&log) }));

        let enemy_position = DVec3::new(6.0, 0.5, 0.0);
        state.spawn_enemy(EnemyKind::Brute, Some(enemy_position), Some(15.0));
        let direction = enemy_position - state.player.eye_position();
        assert!(state.fire_projectile(Some(direction)).is_some());
        advance(&mut state, 0.8, 1.0 / 120.0);

        let log = log.borrow();
        assert_eq!(log[0], "ev:enemy_spawned");
        assert_eq!(log[1], "ev:bullet_fired");
        assert!(log.contains(&"ev:enemy_defeated".to_string()));
    }

    #[test]
    fn game_over_when_health_depleted() {
        let mut state = new_state();
        assert!(!state.is_game_over());
        state.player.health = 0;
        assert!(state.is_game_over());
    }

    #[test]
    fn statistics_never_decrease() {
        let mut state = new_state();
        state.spawn_enemy(EnemyKind::Sprinter, Some(DVec3::new(0.0, 0.5, 6.0)), None);

        let mut previous = state.statistics;
        for tick in 0..240 {
            let input = TickInput {
                aim: Some(DVec3::new(0.0, 0.0, 1.0)),
                fire: tick % 3 == 0,
                reload: state.player.ammo == 0,
                ..TickInput::default()
            };
            state.update(1.0 / 120.0, input);
            let current = state.statistics;
            assert!(current.shots_fired >= previous.shots_fired);
            assert!(current.shots_landed >= previous.shots_landed);
            assert!(current.enemies_defeated >= previous.enemies_defeated);
            assert!(current.damage_taken >= previous.damage_taken);
            previous = current;
        }
    }
}
