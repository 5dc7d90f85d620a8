use crate::math::{Point, Real};
use na;

/// Computes the index of the point of `points` farthest from `from`.
///
/// Only points whose squared distance to `from` is strictly greater than `min_sqdist` are
/// considered, so `None` is returned if every point lies within that distance. Ties are
/// resolved in favor of the earliest point.
///
/// `min_sqdist` should itself be a squared distance computed the same way (for example a
/// squared radius), not the square of a measured distance, so both sides of the comparison
/// carry the same rounding.
#[inline]
pub fn point_cloud_farthest_point_id(
    from: &Point<Real>,
    min_sqdist: Real,
    points: &[Point<Real>],
) -> Option<usize> {
    let mut best_pt = None;
    let mut best_sqdist = min_sqdist;

    for (i, pt) in points.iter().enumerate() {
        let sqdist = na::distance_squared(from, pt);

        if sqdist > best_sqdist {
            best_sqdist = sqdist;
            best_pt = Some(i);
        }
    }

    best_pt
}

/// Computes the point of `points` farthest from `from`, if it is farther than
/// `min_sqdist.sqrt()`.
///
/// See [`point_cloud_farthest_point_id`].
#[inline]
pub fn point_cloud_farthest_point(
    from: &Point<Real>,
    min_sqdist: Real,
    points: &[Point<Real>],
) -> Option<Point<Real>> {
    point_cloud_farthest_point_id(from, min_sqdist, points).map(|i| points[i])
}
