//! Collision detection and response
//!
//! Pure functions computing overlap between circular bodies and between a
//! body and a boundary polygon. Results are summed into the per-tick
//! [`TickScratch`] accumulators; the returned bool only reports that a
//! contact happened (the boundary test uses it to decide whether the vertex
//! fallback is needed). Nothing here ever panics: degenerate geometry is
//! guarded and skipped.

use glam::Vec2;

use super::body::{Body, TickScratch};
use super::boundary::Boundary;
use crate::consts::WALL_RESTITUTION;
use crate::{dir_from_to, perp};

/// Resolve overlap between two bodies.
///
/// Impulses are mass-weighted and equal-and-opposite. The positional shift
/// is split evenly between the pair regardless of mass; that asymmetry with
/// the impulse is deliberate and load-bearing for simulation feel.
///
/// Call once per unordered pair.
pub fn collide_body_body(
    body1: &Body,
    body2: &Body,
    scratch1: &mut TickScratch,
    scratch2: &mut TickScratch,
) -> bool {
    let distance = body1.position.distance(body2.position);
    let overlap = body1.radius + body2.radius - distance;
    if overlap <= 0.0 {
        return false;
    }
    // Coincident centers leave the separation direction undefined; push
    // along a fixed axis so the pair still comes apart deterministically.
    let normal = if distance > 0.0 {
        (body2.position - body1.position) / distance
    } else {
        Vec2::X
    };
    let relative_velocity = body1.velocity - body2.velocity;
    let impact_speed = relative_velocity.dot(normal);
    let mass_factor = 1.0 / (1.0 / body1.mass + 1.0 / body2.mass);
    let impulse = impact_speed * mass_factor * normal;
    let shift = 0.5 * overlap * normal;
    scratch1.impulse -= impulse;
    scratch2.impulse += impulse;
    scratch1.shift -= shift;
    scratch2.shift += shift;
    true
}

/// Resolve overlap between a body and one boundary loop.
///
/// Each edge gets a perpendicular normal flipped to point toward the body.
/// Two dot-product guards reject bodies whose projection falls outside the
/// segment span; if no edge claims the body, every vertex is tested as a
/// point contact instead. That fallback is what keeps convex corners solid:
/// a body straddling a corner projects outside both adjacent edges.
pub fn collide_body_boundary(body: &Body, boundary: &Boundary, scratch: &mut TickScratch) -> bool {
    let mut hit = false;
    for (a, b) in boundary.edges() {
        let ab = b - a;
        let ac = body.position - a;
        let bc = body.position - b;
        let dir = ab.normalize_or_zero();
        if dir == Vec2::ZERO {
            // Zero-length edge (duplicate vertices): skip
            continue;
        }
        let mut normal = perp(dir);
        if normal.dot(ac) < 0.0 {
            normal = -normal;
        }
        if ac.dot(ab) < 0.0 {
            continue; // before segment start
        }
        if bc.dot(ab) > 0.0 {
            continue; // past segment end
        }
        let overlap = body.radius - ac.dot(normal);
        if overlap < 0.0 {
            continue;
        }
        let impact_speed = -body.velocity.dot(normal);
        scratch.impulse += WALL_RESTITUTION * impact_speed * body.mass * normal;
        scratch.shift += overlap * normal;
        hit = true;
    }
    if hit {
        return true;
    }
    for &point in boundary.points() {
        if collide_body_point(body, point, scratch) {
            hit = true;
        }
    }
    hit
}

/// Resolve overlap between a body and a single boundary vertex, using the
/// direction from the vertex to the body's center as the contact normal.
pub fn collide_body_point(body: &Body, point: Vec2, scratch: &mut TickScratch) -> bool {
    let distance = body.position.distance(point);
    let overlap = body.radius - distance;
    if overlap <= 0.0 {
        return false;
    }
    let normal = dir_from_to(point, body.position);
    let impact_speed = -body.velocity.dot(normal);
    scratch.impulse += WALL_RESTITUTION * impact_speed * body.mass * normal;
    scratch.shift += overlap * normal;
    true
}
