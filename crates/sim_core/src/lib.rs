//! Core simulation types for Holdout.
//!
//! This crate provides the foundations the gameplay simulation is built on:
//! - House layout geometry (rooms, bounds, floor discretization)
//! - Frame timing for the host loop
//!
//! All positions and directions are `glam::DVec3`. Direction normalization
//! goes through `normalize_or_zero`, so a zero vector stays zero instead of
//! producing NaNs.

pub mod layout;
pub mod time;

pub use layout::*;
pub use time::*;

// Re-export commonly used math types
pub use glam::DVec3;
