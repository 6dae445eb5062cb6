//! Error type shared by the rasterizer, the batch driver and the mesh loader.

use crate::math::Vec3;

/// Errors produced while building or rasterizing triangles.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// The triangle's vertices are collinear or coincident, so it has no
    /// supporting plane.
    #[error("the triangle {points:?} is degenerate: its vertices do not span a plane.")]
    DegenerateTriangle { points: [Vec3; 3] },
    /// The surface width must be a positive, finite number.
    #[error("invalid surface width {0}: expected a positive finite value.")]
    InvalidWidth(f64),
    /// A mesh face references a vertex that does not exist.
    #[error("the face {face:?} references a vertex outside of 0..{vertex_count}.")]
    InvalidFace { face: [u32; 3], vertex_count: usize },
    #[error("failed to load mesh: {0}")]
    Load(#[from] tobj::LoadError),
}
