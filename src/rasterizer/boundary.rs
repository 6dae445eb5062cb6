//! Half-plane inside test for a triangle projected onto the scan plane.
//!
//! Each edge line splits the plane in two; the side holding the opposite
//! vertex is "inside". A point belongs to the triangle when, for every edge,
//! it is on that side or exactly on the line. Edges are therefore inclusive,
//! and two triangles sharing an edge both claim the cells on it.

use crate::geometry::{LineEquation, Sign};
use crate::math::Vec2;

/// Edge `i` is the edge opposite vertex `i`.
const EDGES: [[usize; 2]; 3] = [[1, 2], [0, 2], [0, 1]];

/// The three edge lines of a projected triangle, each with the sign of the
/// opposite vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    edges: [(LineEquation, Sign); 3],
}

impl Boundary {
    pub fn from_vertices(vertices: [Vec2; 3]) -> Self {
        let edges = std::array::from_fn(|i| {
            let [from, to] = EDGES[i];
            let line = LineEquation::through(vertices[from], vertices[to]);
            (line, line.sign(&vertices[i]))
        });
        Self { edges }
    }

    pub fn edges(&self) -> &[(LineEquation, Sign); 3] {
        &self.edges
    }

    /// True when `point` is inside the triangle or on one of its edges.
    #[inline]
    pub fn contains(&self, point: &Vec2) -> bool {
        self.edges.iter().all(|(line, reference)| {
            let sign = line.sign(point);
            sign == Sign::Zero || sign == *reference
        })
    }
}
