//! Cavern Arena entry point
//!
//! Headless demo driver. It plays the role of every out-of-scope
//! collaborator: builds level geometry (a rectangular cavern with one
//! interior obstacle), writes agent actions before each frame (a scripted
//! player plus seeded-RNG rovers), feeds variable-length frames to the
//! world, and consumes the outputs (progress logs and a final JSON
//! snapshot on stdout).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use cavern_arena::consts::TIME_STEP;
use cavern_arena::sim::{BodyId, World};

const DEMO_SEED: u64 = 0xCAFE;
const DEMO_SECONDS: f32 = 10.0;

/// Rectangular cavern wall with a diamond-shaped obstacle in the middle
fn build_cavern(world: &mut World) {
    world.add_boundary(vec![
        Vec2::new(-60.0, -40.0),
        Vec2::new(60.0, -40.0),
        Vec2::new(60.0, 40.0),
        Vec2::new(-60.0, 40.0),
    ]);
    world.add_boundary(vec![
        Vec2::new(0.0, -10.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(-10.0, 0.0),
    ]);
}

fn random_heading(rng: &mut Pcg32) -> Vec2 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}

fn main() {
    env_logger::init();
    log::info!("Cavern Arena (headless) starting, seed {DEMO_SEED:#x}");

    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);
    let mut world = World::new();
    build_cavern(&mut world);

    let player = world.add_agent(Vec2::new(-40.0, 0.0), 2.0);
    let rovers: Vec<BodyId> = (0..4)
        .map(|_| {
            let pos = Vec2::new(rng.random_range(15.0..50.0), rng.random_range(-30.0..30.0));
            world.add_agent(pos, 2.0)
        })
        .collect();
    for _ in 0..6 {
        let pos = Vec2::new(rng.random_range(-50.0..-20.0), rng.random_range(-30.0..30.0));
        world.add_body(pos, rng.random_range(1.0..4.0));
    }
    log::info!(
        "cavern built: {} boundaries, {} bodies",
        world.boundaries().len(),
        world.bodies().len()
    );

    let mut elapsed_total = 0.0f32;
    let mut next_heading_change = 0.0f32;
    let mut next_report = 1.0f32;
    let mut rover_down = false;

    while elapsed_total < DEMO_SECONDS {
        // Action producers: the player pushes east, rovers wander on
        // headings re-rolled once a second
        if let Some(agent) = world.agent_mut(player) {
            agent.action = Vec2::X;
        }
        if elapsed_total >= next_heading_change {
            for &rover in &rovers {
                let heading = random_heading(&mut rng);
                if let Some(agent) = world.agent_mut(rover) {
                    agent.action = heading;
                }
            }
            next_heading_change += 1.0;
        }

        // Halfway through, one rover dies; its corpse keeps obeying physics
        if !rover_down && elapsed_total >= DEMO_SECONDS / 2.0 {
            if let Some(agent) = world.agent_mut(rovers[0]) {
                agent.dead = true;
            }
            log::info!("rover {:?} down at t={:.2}", rovers[0], world.time());
            rover_down = true;
        }

        // Frames arrive with jittered lengths; the accumulator keeps the
        // simulation stepping at a fixed dt regardless
        let frame = TIME_STEP * rng.random_range(0.5..2.0);
        world.advance(frame);
        elapsed_total += frame;

        if world.time() >= next_report {
            let p = world.body(player);
            log::info!(
                "t={:.2}s player at ({:.1}, {:.1}) speed {:.2}",
                world.time(),
                p.position.x,
                p.position.y,
                p.velocity.length()
            );
            next_report += 1.0;
        }
    }

    log::info!(
        "simulated {:.2}s of world time from {:.2}s of frames",
        world.time(),
        elapsed_total
    );
    let snapshot = serde_json::to_string_pretty(&world).expect("world snapshot is serializable");
    println!("{snapshot}");
}
