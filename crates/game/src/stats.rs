//! Match statistics, mutated only by the simulation engine.

/// Monotonically non-decreasing counters for the current run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameStatistics {
    pub enemies_defeated: u32,
    pub shots_fired: u32,
    pub shots_landed: u32,
    /// Total damage the player has absorbed.
    pub damage_taken: u32,
}

impl GameStatistics {
    /// Hit percentage for the end-of-run summary, 0.0 when nothing was fired.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            f64::from(self.shots_landed) / f64::from(self.shots_fired)
        }
    }
}
