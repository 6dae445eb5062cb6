//! Rasterization of many triangles at once.
//!
//! Triangles are independent, so with the `parallel` feature the batch is a
//! plain rayon map over the input. Per-triangle outputs are concatenated in
//! input order either way.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::RasterError;
use crate::math::Vec3;
use crate::rasterizer::Rasterizer;
use crate::strip::build_triangles;
use crate::triangle::Triangle;
use crate::voxel::VoxelSet;

/// Rasterize every triangle and concatenate the results.
///
/// Fails with one of the triangles' errors if any triangle fails.
pub fn rasterize_all<R: Rasterizer>(
    rasterizer: &R,
    triangles: &[Triangle],
) -> Result<VoxelSet, RasterError> {
    #[cfg(feature = "parallel")]
    let parts: Vec<VoxelSet> = triangles
        .par_iter()
        .map(|triangle| rasterizer.rasterize(triangle))
        .collect::<Result<_, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let parts: Vec<VoxelSet> = triangles
        .iter()
        .map(|triangle| rasterizer.rasterize(triangle))
        .collect::<Result<_, _>>()?;

    let mut voxels = VoxelSet::with_capacity(parts.iter().map(VoxelSet::len).sum());
    for mut part in parts {
        voxels.append(&mut part);
    }
    debug!(
        "Rasterized {} triangles into {} voxels",
        triangles.len(),
        voxels.len()
    );
    Ok(voxels)
}

/// Stitch `slices` into a strip and rasterize it.
pub fn rasterize_slices<R: Rasterizer, S: AsRef<[Vec3]>>(
    rasterizer: &R,
    slices: &[S],
) -> Result<VoxelSet, RasterError> {
    let triangles = build_triangles(slices);
    rasterize_all(rasterizer, &triangles)
}
