//! Plane-distance surface rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Permute the axes so the two widest extents of the triangle come first
//!    (see [`AxisOrder`]).
//! 2. Derive the plane equation and the projected [`Boundary`] in that frame.
//! 3. For every integer column `(x, y)` of the bounding box that the boundary
//!    contains, scan the [`depth_range`] and keep each `(x, y, z)` whose
//!    distance to the plane is below `width * sqrt(3) / 2`, i.e. within half
//!    a scaled cube diagonal of the surface.
//! 4. Map kept cells back to the caller's axis order.
//!
//! # Example
//!
//! ```text
//! width = 1, triangle (0,0,0) (2,0,0) (0,2,0)
//!
//!   y
//!   2  #
//!   1  #  #
//!   0  #  #  #
//!      0  1  2  x      (all at z = 0)
//! ```

use log::{debug, trace};

use super::boundary::Boundary;
use super::depth::{depth_range, vertical_span};
use super::Rasterizer;
use crate::axis::AxisOrder;
use crate::config::{DegeneratePolicy, RasterConfig};
use crate::error::RasterError;
use crate::geometry::PlaneEquation;
use crate::math::{Vec2, Vec3};
use crate::triangle::Triangle;
use crate::voxel::VoxelSet;

/// Upper bound on the capacity reserved up front for a single triangle.
const MAX_RESERVE: usize = 1 << 20;

/// Rasterizes triangles into the lattice cells within `width` of their plane.
///
/// Holds only its [`RasterConfig`]; every call derives its own plane and
/// boundary, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceRasterizer {
    config: RasterConfig,
}

impl SurfaceRasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Number of cells to reserve for a triangle whose scan extents are
    /// `e0` and `e1`. It bounds the usual case, not every case: the set
    /// grows past it if needed.
    fn capacity_hint(&self, e0: f64, e1: f64) -> usize {
        let cells = (e0 + 1.0) * (e1 + 1.0) * 4.0 * self.config.width();
        if cells.is_finite() {
            (cells as usize).min(MAX_RESERVE)
        } else {
            0
        }
    }
}

impl Rasterizer for SurfaceRasterizer {
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        voxels: &mut VoxelSet,
    ) -> Result<(), RasterError> {
        let extents = triangle.extents();
        let order = AxisOrder::by_extent(extents);
        let local = order.apply_triangle(triangle);

        let plane = match PlaneEquation::try_from_triangle(&local) {
            Ok(plane) => plane,
            Err(err) => match self.config.degenerate_policy() {
                DegeneratePolicy::Error => return Err(err),
                DegeneratePolicy::Skip => {
                    debug!("Skipping degenerate triangle {:?}", triangle.points);
                    return Ok(());
                }
            },
        };
        let [p0, p1, p2] = local.points;
        let boundary = Boundary::from_vertices([
            Vec2::new(p0.x, p0.y),
            Vec2::new(p1.x, p1.y),
            Vec2::new(p2.x, p2.y),
        ]);

        let width = self.config.width();
        let max_distance = self.config.max_distance();
        let [a0, a1, _] = order.axes();
        voxels.reserve(self.capacity_hint(extents[a0], extents[a1]));
        let first = voxels.len();

        let (min, max) = local.bounds();
        let span = vertical_span(&local);
        for x in min.x.floor() as i64..=max.x.ceil() as i64 {
            for y in min.y.floor() as i64..=max.y.ceil() as i64 {
                let (fx, fy) = (x as f64, y as f64);
                if !boundary.contains(&Vec2::new(fx, fy)) {
                    continue;
                }
                for z in depth_range(fx, fy, &plane, &span, width) {
                    if plane.distance(&Vec3::new(fx, fy, z as f64)) < max_distance {
                        voxels.push(order.restore([x, y, z]));
                    }
                }
            }
        }

        trace!(
            "Rasterized triangle {:?} into {} voxels (scan axes {:?})",
            triangle.points,
            voxels.len() - first,
            order.axes()
        );
        Ok(())
    }
}
