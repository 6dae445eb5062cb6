//! Surface voxelization of stacked slices.
//!
//! Ordered point sequences ("slices") describing cross-sections of a surface
//! are stitched into triangle strips, and each triangle is rasterized into
//! the integer lattice points lying within a configurable width of it.
//!
//! # Quick Start
//!
//! ```ignore
//! use voxstrip::prelude::*;
//!
//! let slices = vec![
//!     vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)],
//!     vec![Vec3::new(0.0, 10.0, 2.0), Vec3::new(10.0, 10.0, 2.0)],
//! ];
//! let rasterizer = SurfaceRasterizer::new(RasterConfig::new(1.0)?);
//! let voxels = rasterize_slices(&rasterizer, &slices)?;
//! ```

// Public API - exposed to library consumers
pub mod batch;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod rasterizer;
pub mod strip;
pub mod triangle;
pub mod voxel;

// Internal modules - used within the crate only
pub(crate) mod axis;

// Re-export commonly needed types at crate root for convenience
pub use batch::{rasterize_all, rasterize_slices};
pub use config::{DegeneratePolicy, RasterConfig};
pub use error::RasterError;
pub use mesh::{Face, Mesh};
pub use rasterizer::{Rasterizer, SurfaceRasterizer};
pub use strip::build_triangles;
pub use triangle::Triangle;
pub use voxel::{Voxel, VoxelSet};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use voxstrip::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::geometry::{LineEquation, PlaneEquation, Sign};
    pub use crate::math::{Vec2, Vec3};
    pub use crate::triangle::Triangle;

    // Rasterization
    pub use crate::batch::{rasterize_all, rasterize_slices};
    pub use crate::config::{DegeneratePolicy, RasterConfig};
    pub use crate::rasterizer::{Rasterizer, SurfaceRasterizer};
    pub use crate::voxel::{Voxel, VoxelSet};

    // Inputs
    pub use crate::mesh::Mesh;
    pub use crate::strip::build_triangles;

    pub use crate::error::RasterError;
}

/// Module exposing internals for benchmarking and testing. Not part of the stable API.
pub mod bench {
    pub use crate::axis::AxisOrder;
    pub use crate::rasterizer::boundary::Boundary;
    pub use crate::rasterizer::depth::{depth_range, vertical_span};
}
