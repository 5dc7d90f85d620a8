use std::time::Instant;

use crate::bounding_volume::details::point_cloud_bounding_sphere;
use crate::bounding_volume::{BoundingSphere, FitQuality};
use crate::fitting::{BoundingSphereSolver, FitError};
use crate::math::{Point, Real};

/// The cheapest bounding sphere: centered on the AABB of the points, reaching the farthest one.
///
/// Two passes over the input, one for the box and one for the radius. The result always
/// encloses every point but is rarely minimal, so it is classified
/// [`FitQuality::NonMinimal`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct BoxCenterSolver;

impl BoundingSphereSolver for BoxCenterSolver {
    fn solve(&self, points: &[Point<Real>]) -> Result<BoundingSphere, FitError> {
        if points.is_empty() {
            return Err(FitError::InvalidInput);
        }

        let t0 = Instant::now();
        let (center, radius) = point_cloud_bounding_sphere(points);

        let mut sphere = BoundingSphere::with_fit(center, radius, FitQuality::NonMinimal);
        sphere.passes = 2;
        sphere.solver_time = t0.elapsed();
        sphere.note = "created by BoxCenterSolver".to_string();

        Ok(sphere)
    }
}
