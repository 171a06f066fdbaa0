//! Typed simulation events and the listener contract.
//!
//! Dispatch is synchronous and runs in listener-registration order, inside
//! the tick that produced the event. Payloads borrow the live entities, so a
//! listener that wants to inspect them later must copy what it needs during
//! the callback; the engine gives no identity guarantees once a dead entity
//! is removed.

use crate::enemy::Enemy;
use crate::projectile::Bullet;

/// Everything the simulation reports to observers.
#[derive(Debug)]
pub enum GameEvent<'a> {
    EnemySpawned { enemy: &'a Enemy },
    BulletFired { bullet: &'a Bullet },
    EnemyDefeated { enemy: &'a Enemy },
    /// Carries the player's health after the hit was applied.
    PlayerDamaged { enemy: &'a Enemy, health: i32 },
}

impl GameEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::EnemySpawned { .. } => "enemy_spawned",
            GameEvent::BulletFired { .. } => "bullet_fired",
            GameEvent::EnemyDefeated { .. } => "enemy_defeated",
            GameEvent::PlayerDamaged { .. } => "player_damaged",
        }
    }
}

/// Observer interface for renderers, audio, scoring UI.
///
/// A panic in a listener is not caught; it propagates to whoever called
/// `update`. Hosts are responsible for isolating faulty observers.
pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent<'_>);
}

/// Deliver one event to every listener, in registration order.
pub(crate) fn dispatch(listeners: &mut [Box<dyn EventListener>], event: GameEvent<'_>) {
    for listener in listeners.iter_mut() {
        listener.on_event(&event);
    }
}
