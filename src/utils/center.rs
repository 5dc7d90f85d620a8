use crate::math::{Point, Real};
use na;

/// Computes the center of the axis-aligned bounding box of a set of points.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use spherefit3d::utils::box_center;
/// use spherefit3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(1.0, 2.0, -2.0),
/// ];
///
/// assert_eq!(box_center(&points), Point::new(2.0, 1.0, -1.0));
/// ```
#[inline]
pub fn box_center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the box center of less than 1 point."
    );

    let mut mins = pts[0];
    let mut maxs = pts[0];

    for pt in &pts[1..] {
        mins = mins.inf(pt);
        maxs = maxs.sup(pt);
    }

    na::center(&mins, &maxs)
}
