//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (bodies by arena index)
//! - No randomness, no rendering or platform dependencies
//!
//! Per-tick contact results accumulate into [`TickScratch`] buffers that are
//! zeroed at the start of every tick, written during the collision passes and
//! read exactly once during integration. They never carry state across ticks.

pub mod body;
pub mod boundary;
pub mod collision;
pub mod step;
pub mod world;

pub use body::{AgentState, Body, BodyId, TickScratch};
pub use boundary::Boundary;
pub use collision::{collide_body_body, collide_body_boundary, collide_body_point};
pub use step::step;
pub use world::World;
