//! World - owner of all simulation state
//!
//! The world holds the body arena (with its parallel scratch table), the
//! boundary loops and the simulation clock. [`World::advance`] converts
//! variable-length real time into a whole number of fixed ticks so the
//! physics stays frame-rate independent: leftover time is carried in an
//! accumulator between calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{AgentState, Body, BodyId, TickScratch};
use super::boundary::Boundary;
use super::step::step;
use crate::consts::{DEFAULT_MOVE_POWER, TIME_STEP};

/// Complete simulation state for one arena session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Body arena; ids are indices, bodies are never removed
    pub(crate) bodies: Vec<Body>,
    /// Per-tick accumulators, parallel to `bodies`. Zeroed every tick, so
    /// snapshots skip them; the tick re-syncs the length on demand.
    #[serde(skip)]
    pub(crate) scratch: Vec<TickScratch>,
    pub(crate) boundaries: Vec<Boundary>,
    /// Fixed simulation timestep in seconds
    pub(crate) time_step: f32,
    /// Accumulated simulation time
    pub(crate) time: f32,
    /// Real time received but not yet consumed by whole ticks
    pub(crate) accumulator: f32,
    /// Scale applied to incoming elapsed time before accumulation
    pub(crate) frame_weight: f32,
    pub(crate) paused: bool,
    /// Reentrancy guard: true while a stepping loop is in progress. Safe
    /// `&mut self` callers cannot trip it today; it keeps the contract
    /// explicit for a host that shares the world across threads.
    #[serde(skip)]
    pub(crate) busy: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_time_step(TIME_STEP)
    }

    pub fn with_time_step(time_step: f32) -> Self {
        debug_assert!(time_step > 0.0, "time step must be positive");
        Self {
            bodies: Vec::new(),
            scratch: Vec::new(),
            boundaries: Vec::new(),
            time_step,
            time: 0.0,
            accumulator: 0.0,
            frame_weight: 1.0,
            paused: false,
            busy: false,
        }
    }

    /// Feed elapsed real time and run however many whole ticks it covers.
    ///
    /// No-op while paused. A reentrant call (possible only when a host
    /// shares the world) is logged and skipped so it cannot corrupt the
    /// in-flight accumulators. Zero ticks is a normal outcome for short
    /// frames: the remainder waits in the accumulator.
    pub fn advance(&mut self, elapsed: f32) {
        if self.paused {
            return;
        }
        if self.busy {
            log::warn!("reentrant advance skipped: a stepping loop is already in progress");
            return;
        }
        self.accumulator += elapsed * self.frame_weight;
        self.busy = true;
        while self.accumulator >= self.time_step {
            self.accumulator -= self.time_step;
            step(self);
        }
        self.busy = false;
    }

    /// Spawn an inert body (a rock)
    pub fn add_body(&mut self, position: Vec2, radius: f32) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body::new(id, position, radius));
        self.scratch.push(TickScratch::default());
        id
    }

    /// Spawn a self-propelled body with the default move power
    pub fn add_agent(&mut self, position: Vec2, radius: f32) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies
            .push(Body::new(id, position, radius).with_agent(DEFAULT_MOVE_POWER));
        self.scratch.push(TickScratch::default());
        id
    }

    /// Install a wall loop; returns its index
    pub fn add_boundary(&mut self, points: Vec<Vec2>) -> usize {
        self.boundaries.push(Boundary::new(points));
        self.boundaries.len() - 1
    }

    #[inline]
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.index()]
    }

    #[inline]
    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.index()]
    }

    /// Agent component of a body, if it has one. This is where the input
    /// and AI collaborators write actions between `advance` calls.
    #[inline]
    pub fn agent_mut(&mut self, id: BodyId) -> Option<&mut AgentState> {
        self.bodies[id.index()].agent.as_mut()
    }

    /// Read-only snapshot of all bodies, in stable id order
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Scale incoming elapsed time (1.0 = real time). Lets a host feed
    /// frame counts instead of seconds, or run the arena in slow motion.
    pub fn set_frame_weight(&mut self, frame_weight: f32) {
        self.frame_weight = frame_weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_moving_body() -> (World, BodyId) {
        let mut world = World::new();
        world.add_boundary(vec![
            Vec2::new(-50.0, -50.0),
            Vec2::new(50.0, -50.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(-50.0, 50.0),
        ]);
        let id = world.add_agent(Vec2::new(-10.0, 5.0), 2.0);
        world.body_mut(id).velocity = Vec2::new(8.0, -3.0);
        world.agent_mut(id).unwrap().action = Vec2::new(0.6, 0.8);
        (world, id)
    }

    #[test]
    fn ids_are_dense_and_stable() {
        let mut world = World::new();
        let a = world.add_body(Vec2::ZERO, 1.0);
        let b = world.add_agent(Vec2::X, 1.0);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert!(world.body(a).agent.is_none());
        assert!(world.body(b).agent.is_some());
    }

    #[test]
    fn short_frames_run_zero_ticks_and_keep_the_remainder() {
        let (mut world, id) = world_with_moving_body();
        let before = world.body(id).position;
        world.advance(world.time_step() * 0.4);
        assert_eq!(world.time(), 0.0);
        assert_eq!(world.body(id).position, before);

        // The remainder tops up past one step on the next call
        world.advance(world.time_step() * 0.7);
        assert_eq!(world.time(), world.time_step());
        assert_ne!(world.body(id).position, before);
    }

    #[test]
    fn split_advance_equals_one_advance() {
        let (mut whole, id_w) = world_with_moving_body();
        let (mut halves, id_h) = world_with_moving_body();
        let t = whole.time_step() * 4.0;

        whole.advance(t);
        halves.advance(t / 2.0);
        halves.advance(t / 2.0);

        assert_eq!(whole.time(), halves.time());
        assert_eq!(whole.body(id_w).position, halves.body(id_h).position);
        assert_eq!(whole.body(id_w).velocity, halves.body(id_h).velocity);
    }

    #[test]
    fn paused_world_ignores_time() {
        let (mut world, id) = world_with_moving_body();
        let before = world.body(id).position;
        world.set_paused(true);
        world.advance(1.0);
        assert_eq!(world.time(), 0.0);
        assert_eq!(world.body(id).position, before);

        world.set_paused(false);
        world.advance(world.time_step());
        assert!(world.time() > 0.0);
    }

    #[test]
    fn busy_world_skips_the_call() {
        let (mut world, id) = world_with_moving_body();
        world.busy = true;
        let before = world.body(id).position;
        world.advance(1.0);
        assert_eq!(world.time(), 0.0);
        assert_eq!(world.accumulator, 0.0);
        assert_eq!(world.body(id).position, before);
    }

    #[test]
    fn frame_weight_scales_incoming_time() {
        let (mut world, _) = world_with_moving_body();
        world.set_frame_weight(0.5);
        world.advance(world.time_step());
        // Half weight: one step's worth of input only half-fills the bucket
        assert_eq!(world.time(), 0.0);
        world.advance(world.time_step());
        assert_eq!(world.time(), world.time_step());
    }

    #[test]
    fn snapshot_roundtrip_restores_kinematic_state() {
        let (mut world, id) = world_with_moving_body();
        world.advance(world.time_step() * 8.0);

        let json = serde_json::to_string(&world).unwrap();
        let mut restored: World = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.time(), world.time());
        assert_eq!(restored.body(id).position, world.body(id).position);

        // The skipped scratch table re-syncs on the next tick
        restored.advance(restored.time_step());
        world.advance(world.time_step());
        assert_eq!(restored.body(id).position, world.body(id).position);
    }
}
