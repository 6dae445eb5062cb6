//! Plane and line equations over lattice points.
//!
//! Everything here is pure math over small fixed-size values. A
//! [`PlaneEquation`] is derived once per triangle and answers distance and
//! depth queries; a [`LineEquation`] describes one projected edge and is used
//! for half-plane classification.

mod line;
mod plane;

pub use line::LineEquation;
pub use plane::{PlaneEquation, DEGENERATE_EPSILON};

/// Which side of a line or plane a point falls on.
///
/// `f64::signum` reports `1.0` for `+0.0`, so classification goes through
/// this type instead to keep "on the boundary" distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classify a value. NaN maps to [`Sign::Zero`].
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// The sign as `-1`, `0` or `1`.
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}
