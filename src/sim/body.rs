//! Bodies - the simulated circular masses
//!
//! A [`Body`] is a translation-only point mass with a circular collision
//! radius. There is no rotational state. Self-propelled bodies (the player,
//! AI opponents) carry an optional [`AgentState`] component; inert bodies
//! (rocks, corpses of nothing in particular) leave it as `None`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DRAG, MASS_RADIUS_FACTOR};

/// Index of a body in its world's arena. Allocated by the world, never
/// reused; bodies are not removed from the core (collaborators mark agents
/// dead instead of deleting them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-tick contact accumulators for one body.
///
/// Zeroed at the start of every tick, written by the collision passes, read
/// once during integration. Must never carry values across ticks, which is
/// why snapshots skip them entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickScratch {
    /// Sum of forces for this tick (agent propulsion)
    pub force: Vec2,
    /// Sum of instantaneous velocity-changing contributions from contacts
    pub impulse: Vec2,
    /// Direct positional correction resolving residual penetration
    pub shift: Vec2,
}

impl TickScratch {
    pub fn reset(&mut self) {
        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
        self.shift = Vec2::ZERO;
    }
}

/// Self-propulsion component for player- or AI-controlled bodies
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentState {
    /// Desired movement direction, written by the input/AI collaborator
    /// before each `advance` call. Unit-or-shorter by convention, but not
    /// enforced: the propulsive force scales with whatever magnitude the
    /// producer supplies.
    pub action: Vec2,
    /// Force magnitude applied for a unit-length action
    pub move_power: f32,
    /// Dead agents generate no propulsion but keep colliding and integrating
    pub dead: bool,
}

impl AgentState {
    pub fn new(move_power: f32) -> Self {
        Self {
            action: Vec2::ZERO,
            move_power,
            dead: false,
        }
    }
}

/// A simulated circular mass point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Collision radius, strictly positive
    pub radius: f32,
    /// `PI * (0.1 * radius)^2`, fixed at construction and never recomputed
    pub mass: f32,
    /// Fraction of velocity removed per second, in `[0, 1]`
    pub drag: f32,
    /// Propulsion component; `None` for inert bodies
    pub agent: Option<AgentState>,
}

impl Body {
    pub fn new(id: BodyId, position: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            radius,
            mass: std::f32::consts::PI * (MASS_RADIUS_FACTOR * radius).powi(2),
            drag: DEFAULT_DRAG,
            agent: None,
        }
    }

    /// Attach a propulsion component, making this body an agent
    pub fn with_agent(mut self, move_power: f32) -> Self {
        self.agent = Some(AgentState::new(move_power));
        self
    }

    /// True when this body has a living propulsion component
    #[inline]
    pub fn is_live_agent(&self) -> bool {
        self.agent.is_some_and(|a| !a.dead)
    }

    /// Write this tick's propulsive force into the scratch accumulators.
    ///
    /// Live agents contribute `move_power * action`; inert bodies and dead
    /// agents contribute nothing. The action is used as-is, without
    /// normalization.
    pub fn apply_tick_force(&self, scratch: &mut TickScratch) {
        if let Some(agent) = &self.agent {
            if !agent.dead {
                scratch.force = agent.move_power * agent.action;
            }
        }
    }

    /// Semi-implicit Euler step with drag pre-scaling.
    ///
    /// The assignment order is load-bearing: drag damps the previous tick's
    /// velocity before this tick's force and impulse are added, so drag acts
    /// on pre-impulse momentum. Position then moves by the new velocity and
    /// finally absorbs the accumulated penetration correction.
    pub fn integrate(&mut self, scratch: &TickScratch, dt: f32) {
        self.velocity *= 1.0 - self.drag * dt;
        self.velocity += (dt / self.mass) * scratch.force;
        self.velocity += scratch.impulse / self.mass;
        self.position += dt * self.velocity;
        self.position += scratch.shift;
    }
}
