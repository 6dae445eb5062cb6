//! Triangle strips between consecutive slices.
//!
//! Two slices are zipped into one alternating sequence
//! `a0 b0 a1 b1 ...` and every window of three consecutive points becomes a
//! triangle. When one slice is longer, its leftover points are fanned out
//! from the last point of the shorter slice:
//!
//! ```text
//! a0 ----- a1
//! |      / |  \
//! |    /   |    \
//! b0 ----- b1 ----- b2
//! ```

use log::debug;

use crate::math::Vec3;
use crate::triangle::Triangle;

/// Triangles connecting every pair of consecutive slices, in pair order.
///
/// Pairs that involve an empty slice produce no triangles.
pub fn build_triangles<S: AsRef<[Vec3]>>(slices: &[S]) -> Vec<Triangle> {
    let triangles: Vec<Triangle> = slices
        .windows(2)
        .flat_map(|pair| strip_pair(pair[0].as_ref(), pair[1].as_ref()))
        .collect();
    debug!(
        "Built {} triangles from {} slices",
        triangles.len(),
        slices.len()
    );
    triangles
}

/// Triangles connecting two slices.
///
/// The shorter slice always plays the role of `s1`, so passing the slices in
/// either order yields the same triangles when their lengths differ.
pub fn strip_pair<'a>(mut s1: &'a [Vec3], mut s2: &'a [Vec3]) -> Vec<Triangle> {
    if s1.len() > s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }
    if s1.is_empty() {
        debug!("Skipping slice pair with an empty slice");
        return Vec::new();
    }

    let n = s1.len();
    let interleaved: Vec<Vec3> = s1.iter().zip(&s2[..n]).flat_map(|(&a, &b)| [a, b]).collect();

    let mut triangles: Vec<Triangle> = interleaved
        .windows(3)
        .map(|w| Triangle::new(w[0], w[1], w[2]))
        .collect();

    let anchor = s1[n - 1];
    triangles.extend(s2[n - 1..].windows(2).map(|w| Triangle::new(anchor, w[0], w[1])));
    triangles
}
