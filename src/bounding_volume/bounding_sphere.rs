//! Bounding sphere.

use core::fmt;
use core::time::Duration;

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, Vector};
use arrayvec::ArrayVec;
use na;
use num::Zero;

/// The maximum number of support points a [`BoundingSphere`] can record.
///
/// Four points are enough to determine any sphere in 3D. The fifth slot is only
/// ever filled when the minimal solver gives up on a numerically degenerate
/// input, in which case the sphere is flagged [`FitQuality::Approximate`].
pub const MAX_SUPPORT_POINTS: usize = 5;

/// The input points that determine the center and radius of a fitted sphere.
pub type SupportPoints = ArrayVec<Point<Real>, MAX_SUPPORT_POINTS>;

/// How confidently a bounding sphere is known to be minimal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum FitQuality {
    /// No classification was made.
    ///
    /// This is the state of a hand-built sphere, and of the minimal solver's
    /// result for a single-point input.
    #[default]
    Unknown,
    /// No input point requires the sphere to grow any further under the
    /// solver's optimality criterion.
    Exact,
    /// Every input point is enclosed, but the sphere may be larger than the
    /// minimal one.
    NonMinimal,
    /// The solver stopped without proving its result. The radius may be
    /// slightly too large or, on pathological inputs, still miss a point.
    Approximate,
}

impl fmt::Display for FitQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FitQuality::Unknown => "UNKNOWN",
            FitQuality::Exact => "EXACT",
            FitQuality::NonMinimal => "NON_MINIMAL",
            FitQuality::Approximate => "APPROXIMATE",
        };
        f.write_str(name)
    }
}

/// A Bounding Sphere.
///
/// Besides its geometry, a sphere produced by one of the solvers of
/// [`crate::fitting`] records how it was obtained:
///
/// - `fit`: the quality classification of the result.
/// - `support_points`: copies of the input points lying on the surface and
///   determining the sphere (minimal solver only).
/// - `passes`: the number of full scans over the input.
/// - `error`: the difference between the largest and smallest
///   center-to-support distance. Ideally zero.
/// - `solver_time`, `origin_id` and `note`: bookkeeping with no geometric
///   meaning.
///
/// # Example
///
/// ```
/// use spherefit3d::bounding_volume::{BoundingSphere, FitQuality};
/// use spherefit3d::math::Point;
///
/// let a = BoundingSphere::new(Point::origin(), 1.0);
/// let b = BoundingSphere::new(Point::new(3.0, 0.0, 0.0), 1.0);
///
/// assert!(!a.collides(&b));
/// assert_eq!(a.distance(&b), 1.0);
/// assert_eq!(a.fit, FitQuality::Unknown);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The sphere radius.
    pub radius: Real,
    /// The quality of the fit.
    pub fit: FitQuality,
    /// The input points determining `center` and `radius`.
    pub support_points: SupportPoints,
    /// The number of full scans over the input performed by the solver.
    pub passes: u32,
    /// The residual spread of the center-to-support distances.
    pub error: Real,
    /// The wall-clock time spent by the solver.
    pub solver_time: Duration,
    /// The identifier of the object this sphere was computed for, if any.
    pub origin_id: Option<u64>,
    /// Free-form text, usually naming the solver that produced this sphere.
    pub note: String,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        BoundingSphere::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere with an unknown fit and no diagnostics.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere::with_fit(center, radius, FitQuality::Unknown)
    }

    /// Creates a new bounding sphere with the given fit quality.
    pub fn with_fit(center: Point<Real>, radius: Real, fit: FitQuality) -> BoundingSphere {
        BoundingSphere {
            center,
            radius,
            fit,
            support_points: SupportPoints::new(),
            passes: 0,
            error: 0.0,
            solver_time: Duration::ZERO,
            origin_id: None,
            note: String::new(),
        }
    }

    /// Tags this sphere with the identifier of the object it was computed for.
    #[must_use]
    pub fn with_origin_id(mut self, id: u64) -> BoundingSphere {
        self.origin_id = Some(id);
        self
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere and its support points by `m`.
    ///
    /// The radius and all diagnostics are preserved.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        let mut res = self.clone();
        res.center = m * self.center;
        res.support_points = self.support_points.iter().map(|pt| m * pt).collect();
        res
    }

    /// Does `other` overlap this sphere?
    ///
    /// Surfaces that merely touch are not a collision.
    #[inline]
    pub fn collides(&self, other: &BoundingSphere) -> bool {
        na::distance(&self.center, &other.center) < self.radius + other.radius
    }

    /// Is the surface of `other` within `tolerance` of the surface of this sphere?
    #[inline]
    pub fn contacts(&self, other: &BoundingSphere, tolerance: Real) -> bool {
        let center_to_center = na::distance(&self.center, &other.center);
        let sum_of_radii = self.radius + other.radius;

        center_to_center > sum_of_radii - tolerance && center_to_center < sum_of_radii + tolerance
    }

    /// Distance between the surfaces of the two spheres.
    ///
    /// Negative if the spheres overlap.
    #[inline]
    pub fn distance(&self, other: &BoundingSphere) -> Real {
        na::distance(&self.center, &other.center) - (self.radius + other.radius)
    }

    /// The unit vector pointing from this sphere's center toward `other`'s.
    ///
    /// The result is not finite if both centers coincide.
    #[inline]
    pub fn direction(&self, other: &BoundingSphere) -> Vector<Real> {
        (other.center - self.center).normalize()
    }

    /// Is `pt` inside of this sphere, or on its surface, up to `tolerance`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        na::distance(&self.center, pt) <= self.radius + tolerance
    }

    /// Resets the diagnostics of a sphere whose geometry no longer comes
    /// from a solver.
    fn clear_provenance(&mut self, fit: FitQuality) {
        self.fit = fit;
        self.support_points.clear();
        self.passes = 0;
        self.error = 0.0;
        self.solver_time = Duration::ZERO;
        self.origin_id = None;
        self.note.clear();
    }
}

impl fmt::Display for BoundingSphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BoundingSphere[center: {} {} {}, radius: {}, ",
            self.center.x, self.center.y, self.center.z, self.radius
        )?;
        if let Some(id) = self.origin_id {
            write!(f, "origin: {}, ", id)?;
        }
        write!(f, "fit: {}]", self.fit)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    fn merge(&mut self, other: &BoundingSphere) {
        if self.contains(other) {
            return;
        }

        if other.contains(self) {
            *self = other.clone();
            return;
        }

        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }

        self.clear_provenance(FitQuality::NonMinimal);
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = self.clone();
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount;
        self.clear_provenance(FitQuality::NonMinimal);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        let mut res = self.clone();
        res.loosen(amount);
        res
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is too large.");
        self.radius -= amount;
        self.clear_provenance(FitQuality::Unknown);
    }

    #[inline]
    fn tightened(&self, amount: Real) -> BoundingSphere {
        let mut res = self.clone();
        res.tighten(amount);
        res
    }
}
