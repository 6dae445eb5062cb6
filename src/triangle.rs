use crate::math::Vec3;

// A triangle in lattice space. Winding only matters for the sign
// conventions of the half-plane test, never for which voxels are kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
}

impl Triangle {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Component-wise minimum and maximum over the three vertices.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let [p0, p1, p2] = self.points;
        (p0.min(p1).min(p2), p0.max(p1).max(p2))
    }

    /// Size of the bounding box along each axis.
    pub fn extents(&self) -> [f64; 3] {
        let (min, max) = self.bounds();
        (max - min).to_array()
    }
}

impl From<[Vec3; 3]> for Triangle {
    fn from(points: [Vec3; 3]) -> Self {
        Self { points }
    }
}
