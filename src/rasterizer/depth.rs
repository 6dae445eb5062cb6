//! Depth window to scan for one `(x, y)` column.

use std::ops::Range;

use crate::geometry::PlaneEquation;
use crate::triangle::Triangle;

/// Full depth extent of `triangle`, scanned where the plane has no unique
/// depth at a column.
pub fn vertical_span(triangle: &Triangle) -> Range<i64> {
    let (min, max) = triangle.bounds();
    min.z.floor() as i64..max.z.ceil() as i64 + 1
}

/// Integer depths to test at column `(x, y)`, in the scan frame.
///
/// When the plane has a unique depth at the column, the window is
/// `4 * width` cells around it (rounded up to whole cells), far wider than
/// the accepted band, so rounding near the triangle border never drops a
/// cell. A plane parallel to the depth axis has no unique depth, so the
/// triangle's precomputed `vertical_span` is returned instead.
pub fn depth_range(
    x: f64,
    y: f64,
    plane: &PlaneEquation,
    vertical_span: &Range<i64>,
    width: f64,
) -> Range<i64> {
    match plane.z_at(x, y) {
        Some(center) => {
            let center = center.trunc() as i64;
            let half = (2.0 * width).ceil() as i64;
            center - half..center + half
        }
        None => vertical_span.clone(),
    }
}
