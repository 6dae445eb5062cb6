//! Rasterization settings.
//!
//! [`RasterConfig`] carries the surface width and the policy applied to
//! degenerate triangles. Setters follow a fluent style:
//!
//! ```ignore
//! let config = RasterConfig::default()
//!     .with_width(2.0)?
//!     .with_degenerate_policy(DegeneratePolicy::Skip);
//! ```

use crate::error::RasterError;

/// What to do with a triangle whose vertices do not span a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Fail with [`RasterError::DegenerateTriangle`].
    #[default]
    Error,
    /// Emit no voxels for the triangle and carry on.
    Skip,
}

impl std::fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegeneratePolicy::Error => write!(f, "Error"),
            DegeneratePolicy::Skip => write!(f, "Skip"),
        }
    }
}

/// Settings for a [`SurfaceRasterizer`](crate::rasterizer::SurfaceRasterizer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    /// Surface thickness. A lattice point is kept when its distance to the
    /// triangle's plane is below `width * sqrt(3) / 2`.
    width: f64,
    degenerate: DegeneratePolicy,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl RasterConfig {
    /// Create a config with the given width and the default degenerate policy.
    pub fn new(width: f64) -> Result<Self, RasterError> {
        Self::default().with_width(width)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate
    }

    /// Set the surface width.
    ///
    /// Returns [`RasterError::InvalidWidth`] unless `width` is positive and finite.
    pub fn with_width(mut self, width: f64) -> Result<Self, RasterError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RasterError::InvalidWidth(width));
        }
        self.width = width;
        Ok(self)
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Largest distance to the plane a voxel may have, exclusive.
    pub fn max_distance(&self) -> f64 {
        self.width * 3f64.sqrt() / 2.0
    }
}
