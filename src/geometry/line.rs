use super::Sign;
use crate::math::Vec2;

/// 2D line `a*x + b*y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEquation {
    /// Line through `p0` and `p1`, as `(dy, -dx, -(dy*x0 - dx*y0))`.
    ///
    /// All coefficients are zero when the points coincide; every point then
    /// classifies as [`Sign::Zero`].
    pub fn through(p0: Vec2, p1: Vec2) -> Self {
        let delta = p1 - p0;
        Self {
            a: delta.y,
            b: -delta.x,
            c: -(delta.y * p0.x - delta.x * p0.y),
        }
    }

    #[inline]
    pub fn evaluate(&self, point: &Vec2) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Side of the line `point` lies on.
    #[inline]
    pub fn sign(&self, point: &Vec2) -> Sign {
        Sign::of(self.evaluate(point))
    }
}
