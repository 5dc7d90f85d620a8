//! Bounding sphere solvers.
//!
//! All the solvers implement [`BoundingSphereSolver`]. They are stateless between calls:
//! a solver may be shared between threads and reused on any number of point sets. The
//! returned sphere owns copies of its support points, so the input may be modified or
//! dropped afterwards.

pub use self::box_center::BoxCenterSolver;
pub use self::error::FitError;
pub use self::geofit::GeoFit;
pub use self::ritter::{Ritter, TieBreak};
pub use self::support_group::{
    circumcenter, circumcenter3, circumcenter4, reduce_support_group, sub_group_candidate,
    SubGroupCandidate, SupportSphere,
};

use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};

mod box_center;
mod error;
mod geofit;
mod ritter;
mod support_group;

/// A strategy computing a bounding sphere of a point set.
pub trait BoundingSphereSolver {
    /// Computes a sphere enclosing every point of `points`.
    ///
    /// Returns [`FitError::InvalidInput`] if `points` is empty.
    fn solve(&self, points: &[Point<Real>]) -> Result<BoundingSphere, FitError>;
}

/// Computes the minimal bounding sphere of `points` with the default [`GeoFit`] solver.
pub fn minimal_bounding_sphere(points: &[Point<Real>]) -> Result<BoundingSphere, FitError> {
    GeoFit::new().solve(points)
}

/// Computes a bounding sphere of `points` with Ritter's heuristic, keeping the first
/// extreme points found.
pub fn ritter_bounding_sphere(points: &[Point<Real>]) -> Result<BoundingSphere, FitError> {
    Ritter::new().solve(points)
}
