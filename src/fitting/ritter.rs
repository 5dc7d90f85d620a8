use std::time::Instant;

use crate::bounding_volume::{BoundingSphere, FitQuality};
use crate::fitting::{BoundingSphereSolver, FitError};
use crate::math::{Point, Real};
use na;

/// Which of several points sharing an extreme coordinate is retained by the first pass of
/// [`Ritter`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum TieBreak {
    /// The earliest point of the input wins.
    #[default]
    First,
    /// The latest point of the input wins.
    Last,
}

/// Jack Ritter's two-pass bounding sphere heuristic.
///
/// The first pass seeds the sphere with the farthest apart pair among the extreme points
/// along each axis. The second pass grows the sphere just enough to enclose each point found
/// outside, in input order, so the result depends on the order of the points.
///
/// The sphere is classified [`FitQuality::Exact`] if the second pass did not have to grow the
/// seed sphere, and [`FitQuality::NonMinimal`] otherwise. No support points are recorded.
///
/// # Example
///
/// ```
/// use spherefit3d::bounding_volume::FitQuality;
/// use spherefit3d::fitting::{BoundingSphereSolver, Ritter, TieBreak};
/// use spherefit3d::math::Point;
///
/// let points = [
///     Point::new(-1.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 0.5, 0.0),
/// ];
/// let sphere = Ritter::with_tie_break(TieBreak::Last).solve(&points).unwrap();
///
/// assert_eq!(sphere.center, Point::origin());
/// assert_eq!(sphere.radius, 1.0);
/// assert_eq!(sphere.fit, FitQuality::Exact);
/// assert_eq!(sphere.passes, 2);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Ritter {
    tie_break: TieBreak,
}

impl Ritter {
    /// Creates the solver, retaining the first extreme points found.
    pub fn new() -> Ritter {
        Ritter::default()
    }

    /// Creates the solver with the given tie-breaking rule.
    pub fn with_tie_break(tie_break: TieBreak) -> Ritter {
        Ritter { tie_break }
    }

    /// The tie-breaking rule used by the first pass.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Runs the first pass only, returning the seed center and radius.
    pub fn seed_sphere(&self, points: &[Point<Real>]) -> Result<(Point<Real>, Real), FitError> {
        let extremes = self.axis_extremes(points).ok_or(FitError::InvalidInput)?;
        Ok(seed_from_extremes(&extremes))
    }

    /// The minimum and maximum points along each axis.
    fn axis_extremes(&self, points: &[Point<Real>]) -> Option<[(Point<Real>, Point<Real>); 3]> {
        let first = *points.first()?;
        let mut extremes = [(first, first); 3];

        for pt in points {
            for (axis, (min, max)) in extremes.iter_mut().enumerate() {
                let (replaces_min, replaces_max) = match self.tie_break {
                    TieBreak::First => (pt[axis] < min[axis], pt[axis] > max[axis]),
                    TieBreak::Last => (pt[axis] <= min[axis], pt[axis] >= max[axis]),
                };

                if replaces_min {
                    *min = *pt;
                }
                if replaces_max {
                    *max = *pt;
                }
            }
        }

        Some(extremes)
    }
}

/// Seeds the sphere with the farthest apart pair of axis extremes.
///
/// Pairs are checked in the `x`, `y`, `z` order and a later pair only replaces an earlier one
/// if strictly farther apart.
fn seed_from_extremes(extremes: &[(Point<Real>, Point<Real>); 3]) -> (Point<Real>, Real) {
    let mut pair = extremes[0];

    for candidate in &extremes[1..] {
        if na::distance_squared(&pair.0, &pair.1) < na::distance_squared(&candidate.0, &candidate.1)
        {
            pair = *candidate;
        }
    }

    let (a, b) = pair;
    let center = na::center(&a, &b);
    let radius = na::distance(&center, &a).max(na::distance(&center, &b));

    (center, radius)
}

impl BoundingSphereSolver for Ritter {
    fn solve(&self, points: &[Point<Real>]) -> Result<BoundingSphere, FitError> {
        let t0 = Instant::now();

        let (mut center, seed_radius) = self.seed_sphere(points)?;
        let mut radius = seed_radius;
        let mut sqradius = radius * radius;

        for pt in points {
            let center_to_pt = pt - center;
            let sqdist = center_to_pt.norm_squared();

            if sqdist > sqradius {
                let dist = sqdist.sqrt();
                radius = (radius + dist) * 0.5;
                sqradius = radius * radius;
                let shift = dist - radius;
                center = Point::from((center.coords * radius + pt.coords * shift) / dist);
            }
        }

        let fit = if radius == seed_radius {
            FitQuality::Exact
        } else {
            FitQuality::NonMinimal
        };

        let mut sphere = BoundingSphere::with_fit(center, radius, fit);
        sphere.passes = 2;
        sphere.solver_time = t0.elapsed();
        sphere.note = "created by Ritter".to_string();

        Ok(sphere)
    }
}
