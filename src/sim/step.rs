//! One fixed simulation tick
//!
//! A tick is a single linear sequence with no branching states:
//! 1. reset every body's scratch accumulators
//! 2. live agents write their propulsive force
//! 3. every body tests against every boundary
//! 4. every unordered body pair tests against each other
//! 5. semi-implicit Euler integration (drag pre-scaling first)
//! 6. advance world time by `dt`
//!
//! Phases never interleave: the collision passes only write scratch, the
//! integration pass only reads it. With equal-length bodies this would
//! commute anyway; keeping the order fixed makes runs reproducible.

use super::body::TickScratch;
use super::collision::{collide_body_body, collide_body_boundary};
use super::world::World;

/// Advance the world by exactly one `time_step`.
///
/// Callers normally go through [`World::advance`], which converts variable
/// real time into whole ticks; this is the per-tick workhorse.
pub fn step(world: &mut World) {
    let dt = world.time_step;

    // Phase 1: fresh scratch. Resize also re-syncs the component table
    // after a body was added or a snapshot was restored.
    world.scratch.resize(world.bodies.len(), TickScratch::default());
    for scratch in world.scratch.iter_mut() {
        scratch.reset();
    }

    // Phase 2: agent propulsion
    for (body, scratch) in world.bodies.iter().zip(world.scratch.iter_mut()) {
        body.apply_tick_force(scratch);
    }

    // Phase 3: body vs boundary
    for (body, scratch) in world.bodies.iter().zip(world.scratch.iter_mut()) {
        for boundary in &world.boundaries {
            collide_body_boundary(body, boundary, scratch);
        }
    }

    // Phase 4: body vs body, each unordered pair once, in index order
    let count = world.bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (left, right) = world.scratch.split_at_mut(j);
            collide_body_body(
                &world.bodies[i],
                &world.bodies[j],
                &mut left[i],
                &mut right[0],
            );
        }
    }

    // Phase 5: integrate
    for (body, scratch) in world.bodies.iter_mut().zip(world.scratch.iter()) {
        body.integrate(scratch, dt);
    }

    // Phase 6
    world.time += dt;
}
