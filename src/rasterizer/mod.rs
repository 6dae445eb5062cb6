//! Triangle-to-voxel rasterization.
//!
//! A rasterizer turns one [`Triangle`] into the lattice cells its surface
//! passes through. The building blocks live in submodules:
//! - `boundary`: half-plane inside test on the projected triangle
//! - `depth`: depth window to scan for a column
//! - [`SurfaceRasterizer`]: the plane-distance rasterizer built from both

pub(crate) mod boundary;
pub(crate) mod depth;
mod surface;

pub use surface::SurfaceRasterizer;

use crate::error::RasterError;
use crate::triangle::Triangle;
use crate::voxel::VoxelSet;

/// Trait for triangle rasterization algorithms.
///
/// Implementors must be free of shared mutable state: the batch driver calls
/// them from several threads at once.
pub trait Rasterizer: Sync {
    /// Append the voxels covered by `triangle` to `voxels`.
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        voxels: &mut VoxelSet,
    ) -> Result<(), RasterError>;

    /// Rasterize `triangle` into a fresh [`VoxelSet`].
    fn rasterize(&self, triangle: &Triangle) -> Result<VoxelSet, RasterError> {
        let mut voxels = VoxelSet::new();
        self.fill_triangle(triangle, &mut voxels)?;
        Ok(voxels)
    }
}
