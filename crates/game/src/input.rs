//! Per-tick input snapshot handed from the host into the simulation.

use glam::DVec3;

/// Player intent for one tick. `None` means "no input this frame", which is
/// distinct from an explicit zero-length vector: absent movement skips the
/// move step entirely, and absent aim leaves the persisted view direction
/// untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Unnormalized movement intent on the world XZ plane.
    pub movement: Option<DVec3>,
    /// World-space aim direction; normalized before being stored.
    pub aim: Option<DVec3>,
    pub fire: bool,
    pub reload: bool,
}

impl TickInput {
    /// A frame with no player input at all.
    pub fn idle() -> Self {
        Self::default()
    }
}
