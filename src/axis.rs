//! Axis permutation used to scan a triangle over its two widest axes.
//!
//! The rasterizer walks the first two axes of the permuted frame cell by cell
//! and solves the third one from the plane equation. Putting the thin axis
//! last keeps the number of scanned columns proportional to the triangle's
//! footprint instead of its bounding box volume.

use crate::math::Vec3;
use crate::triangle::Triangle;

/// A permutation of `[0, 1, 2]`.
///
/// `order[i]` is the original axis that becomes axis `i` in the permuted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOrder([usize; 3]);

impl AxisOrder {
    pub const IDENTITY: Self = Self([0, 1, 2]);

    /// Wrap an explicit permutation. Returns `None` unless `order` contains
    /// each of 0, 1 and 2 exactly once.
    pub fn new(order: [usize; 3]) -> Option<Self> {
        let mut seen = [false; 3];
        for &axis in &order {
            if axis > 2 || seen[axis] {
                return None;
            }
            seen[axis] = true;
        }
        Some(Self(order))
    }

    /// Axes sorted by decreasing extent. Ties keep the lower axis first.
    pub fn by_extent(extents: [f64; 3]) -> Self {
        let mut order = [0, 1, 2];
        order.sort_by(|&a, &b| extents[b].total_cmp(&extents[a]));
        Self(order)
    }

    pub fn axes(&self) -> [usize; 3] {
        self.0
    }

    /// Move a point into the permuted frame.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        let [a, b, c] = self.0;
        Vec3::new(point[a], point[b], point[c])
    }

    pub fn apply_triangle(&self, triangle: &Triangle) -> Triangle {
        let [p0, p1, p2] = triangle.points;
        Triangle::new(self.apply(p0), self.apply(p1), self.apply(p2))
    }

    /// Move a lattice point from the permuted frame back to the original one.
    pub fn restore(&self, voxel: [i64; 3]) -> [i64; 3] {
        let mut out = [0; 3];
        for (i, &axis) in self.0.iter().enumerate() {
            out[axis] = voxel[i];
        }
        out
    }
}
