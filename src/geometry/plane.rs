use super::Sign;
use crate::error::RasterError;
use crate::math::Vec3;
use crate::triangle::Triangle;

/// Normals with a magnitude at or below this are treated as degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Plane `a*x + b*y + c*z + d = 0`.
///
/// `(a, b, c)` is the unnormalized normal `(p1 - p0) x (p2 - p0)` of the
/// triangle the plane was built from, so its length is twice the triangle's
/// area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl PlaneEquation {
    /// Plane through the three vertices of `triangle`.
    ///
    /// No degeneracy check is made: collinear vertices produce a zero normal.
    /// Use [`PlaneEquation::try_from_triangle`] when that matters.
    pub fn from_triangle(triangle: &Triangle) -> Self {
        let [p0, p1, p2] = triangle.points;
        let normal = (p1 - p0).cross(p2 - p0);
        Self {
            a: normal.x,
            b: normal.y,
            c: normal.z,
            d: -normal.dot(p0),
        }
    }

    /// Plane through `triangle`, or [`RasterError::DegenerateTriangle`] when
    /// the vertices do not span one.
    pub fn try_from_triangle(triangle: &Triangle) -> Result<Self, RasterError> {
        let plane = Self::from_triangle(triangle);
        let magnitude = plane.normal().magnitude();
        if !magnitude.is_finite() || magnitude <= DEGENERATE_EPSILON {
            return Err(RasterError::DegenerateTriangle {
                points: triangle.points,
            });
        }
        Ok(plane)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Value of the affine expression at `point`.
    #[inline]
    pub fn evaluate(&self, point: &Vec3) -> f64 {
        self.a * point.x + self.b * point.y + self.c * point.z + self.d
    }

    /// Side of the plane `point` lies on.
    pub fn sign(&self, point: &Vec3) -> Sign {
        Sign::of(self.evaluate(point))
    }

    /// Unsigned euclidean distance from `point` to the plane.
    ///
    /// Infinite or NaN for a plane with a zero normal.
    #[inline]
    pub fn distance(&self, point: &Vec3) -> f64 {
        self.evaluate(point).abs() / self.normal().magnitude()
    }

    /// Depth of the plane above `(x, y)`.
    ///
    /// Returns `None` when the plane is parallel to the z axis (`c == 0`),
    /// since no single z solves it there.
    #[inline]
    pub fn z_at(&self, x: f64, y: f64) -> Option<f64> {
        if self.c == 0.0 {
            return None;
        }
        Some(-(self.a * x + self.b * y + self.d) / self.c)
    }
}
