//! Boundaries - impassable cavern wall loops
//!
//! A [`Boundary`] is an ordered, closed polygon of at least three vertices:
//! either the enclosing cavern wall or an interior obstacle. It is immutable
//! after construction; malformed level data is the loader's problem and must
//! be rejected before a boundary is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An immutable closed polygon the bodies collide against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundary {
    points: Vec<Vec2>,
}

impl Boundary {
    pub fn new(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 3, "boundary needs at least 3 vertices");
        Self { points }
    }

    /// The vertex loop in stored order
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Edges as `(a, b)` vertex pairs.
    ///
    /// Convention: edge `i` runs from `points[i]` back to `points[i-1 mod n]`,
    /// i.e. edges are walked in reverse of the stored winding. Collision
    /// normals are flipped toward the queried body, so input loops of either
    /// winding behave identically; the convention only fixes which vertex
    /// pair the segment-span guards use.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let j = if i > 0 { i - 1 } else { n - 1 };
            (self.points[i], self.points[j])
        })
    }
}
