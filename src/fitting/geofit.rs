use std::time::Instant;

use crate::bounding_volume::{BoundingSphere, FitQuality, SupportPoints, MAX_SUPPORT_POINTS};
use crate::fitting::support_group::{self, SupportSphere};
use crate::fitting::{BoundingSphereSolver, FitError};
use crate::math::{Point, Real};
use crate::utils;
use na;

/// Incremental solver of the minimal bounding sphere of a point set.
///
/// The sphere is initialized from two far apart points, then every point left outside is
/// added to a set of at most four support points. Each time, the smallest sphere enclosing
/// the supports with one of them removed is preferred over keeping all of them. The search
/// ends once no point lies outside of the sphere.
///
/// On success, the sphere is classified as [`FitQuality::Exact`]. A single-point input
/// yields a zero-radius sphere with an [`FitQuality::Unknown`] fit since no refinement took
/// place. The fit is [`FitQuality::Approximate`] if the support set had to grow to five
/// points, if the iteration limit was reached, or if the result is not finite; all of those
/// only happen on numerically degenerate inputs.
///
/// # Example
///
/// ```
/// use spherefit3d::bounding_volume::FitQuality;
/// use spherefit3d::fitting::{BoundingSphereSolver, GeoFit};
/// use spherefit3d::math::Point;
///
/// let points = [Point::new(0.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)];
/// let sphere = GeoFit::new().solve(&points).unwrap();
///
/// assert_eq!(sphere.center, Point::new(1.0, 0.0, 0.0));
/// assert_eq!(sphere.radius, 1.0);
/// assert_eq!(sphere.fit, FitQuality::Exact);
/// assert_eq!(sphere.support_points.as_slice(), &points);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct GeoFit {
    max_iterations: usize,
}

impl Default for GeoFit {
    fn default() -> Self {
        GeoFit::new()
    }
}

impl GeoFit {
    /// The default bound on the number of points added to the support set.
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    /// Creates the solver.
    pub fn new() -> GeoFit {
        GeoFit {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Creates a solver giving up after `max_iterations` support refinements.
    ///
    /// The limit only matters if rounding makes the refinement cycle; the result is then
    /// classified as [`FitQuality::Approximate`].
    pub fn with_max_iterations(max_iterations: usize) -> GeoFit {
        GeoFit { max_iterations }
    }

    /// The bound on the number of support refinements.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl BoundingSphereSolver for GeoFit {
    fn solve(&self, points: &[Point<Real>]) -> Result<BoundingSphere, FitError> {
        if points.is_empty() {
            return Err(FitError::InvalidInput);
        }

        let t0 = Instant::now();
        let mut sphere = if points.len() == 1 {
            BoundingSphere::new(points[0], 0.0)
        } else {
            self.refine(points)
        };
        sphere.solver_time = t0.elapsed();
        sphere.note = "created by GeoFit".to_string();

        Ok(sphere)
    }
}

impl GeoFit {
    fn refine(&self, points: &[Point<Real>]) -> BoundingSphere {
        let mut passes = 1;
        let box_center = utils::box_center(points);

        let v1 = utils::point_cloud_farthest_point(&box_center, 0.0, points);
        passes += 1;
        let Some(v1) = v1 else {
            return coincident_sphere(points[0], passes);
        };

        let limit = na::distance_squared(&box_center, &v1);
        let mut v2 = utils::point_cloud_farthest_point(&v1, limit, points);
        passes += 1;
        if v2.is_none() {
            // Only reachable through rounding: settle for any distinct point.
            v2 = utils::point_cloud_farthest_point(&v1, 0.0, points);
            passes += 1;
        }
        let Some(v2) = v2 else {
            return coincident_sphere(v1, passes);
        };

        let mut supports = SupportPoints::new();
        supports.push(v1);
        supports.push(v2);

        let center = na::center(&v1, &v2);
        let mut current = SupportSphere {
            center,
            sqradius: na::distance_squared(&center, &v1).max(na::distance_squared(&center, &v2)),
        };
        let mut exo = utils::point_cloud_farthest_point(&current.center, current.sqradius, points);
        passes += 1;

        let mut iterations = 0;
        let mut fit = loop {
            let Some(pt) = exo else {
                break FitQuality::Exact;
            };

            if iterations == self.max_iterations {
                log::debug!(
                    "GeoFit: no convergence after {} iterations, the input is likely degenerate.",
                    iterations
                );
                break FitQuality::Approximate;
            }
            iterations += 1;

            supports.push(pt);
            current = support_group::reduce_support_group(&mut supports);
            exo = utils::point_cloud_farthest_point(&current.center, current.sqradius, points);
            passes += 1;

            if supports.len() == MAX_SUPPORT_POINTS {
                log::debug!(
                    "GeoFit: support set grew to {} points, the input is likely degenerate.",
                    MAX_SUPPORT_POINTS
                );
                break FitQuality::Approximate;
            }
        };

        if !current.sqradius.is_finite() || current.center.iter().any(|x| !x.is_finite()) {
            log::debug!("GeoFit: non-finite sphere from a degenerate support set.");
            fit = FitQuality::Approximate;
        }

        let mut sphere = BoundingSphere::with_fit(current.center, current.sqradius.sqrt(), fit);
        sphere.error = residual_error(&current, &supports);
        sphere.support_points = supports;
        sphere.passes = passes;
        sphere
    }
}

/// The zero-radius sphere of a point set whose points all coincide.
fn coincident_sphere(pt: Point<Real>, passes: u32) -> BoundingSphere {
    let mut sphere = BoundingSphere::with_fit(pt, 0.0, FitQuality::Exact);
    sphere.support_points.push(pt);
    sphere.passes = passes;
    sphere
}

/// Difference between the largest and the smallest center-to-support distance.
fn residual_error(sphere: &SupportSphere, supports: &[Point<Real>]) -> Real {
    let min_sqdist = supports
        .iter()
        .map(|s| na::distance_squared(&sphere.center, s))
        .fold(sphere.sqradius, Real::min);
    sphere.sqradius.sqrt() - min_sqdist.sqrt()
}
