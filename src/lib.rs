//! Cavern Arena - physics core for a 2D cavern fighting game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-timestep simulation (bodies, boundaries,
//!   collision resolution, time accumulation)
//!
//! Rendering, level loading, input capture, networking and opponent AI are
//! external collaborators: they read body positions/velocities after a tick
//! and write agent action vectors before the next one. Nothing in this crate
//! touches a platform API.

pub mod sim;

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TIME_STEP: f32 = 1.0 / 60.0;

    /// Fraction of velocity removed per second of simulated time
    pub const DEFAULT_DRAG: f32 = 0.7;

    /// Propulsive force magnitude for a unit-length agent action
    pub const DEFAULT_MOVE_POWER: f32 = 30.0;

    /// Mass is `PI * (MASS_RADIUS_FACTOR * radius)^2`, fixed at construction
    pub const MASS_RADIUS_FACTOR: f32 = 0.1;

    /// Wall impulse overcorrection factor. Tuned, not physical: values above
    /// 1.0 counter the penetration creep that discrete overlap tests leave
    /// behind on persistent contacts.
    pub const WALL_RESTITUTION: f32 = 1.2;
}

/// Counterclockwise perpendicular of a vector
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Direction from `from` to `to`, or zero when the points coincide
#[inline]
pub fn dir_from_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
