//! Circumspheres of small groups of support points.
//!
//! None of the formulas below guard against nearly degenerate groups (collinear or
//! coplanar points): their denominators may vanish, yielding non-finite centers. Callers
//! detect that on the final result rather than here.

use crate::bounding_volume::SupportPoints;
use crate::math::{Point, Real};
use arrayvec::ArrayVec;
use na;

/// A candidate sphere, with its radius kept squared.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SupportSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The squared sphere radius.
    pub sqradius: Real,
}

/// The sphere of a support group with one of its members left out.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SubGroupCandidate {
    /// The circumsphere of the remaining members.
    pub sphere: SupportSphere,
    /// Whether the left-out member lies inside (or on) that sphere.
    pub fits: bool,
}

/// Circumcenter of a triangle.
///
/// Uses barycentric weights built from the squared lengths of the edges opposite to each
/// vertex. The weights sum to zero when the points are collinear.
pub fn circumcenter3(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Point<Real> {
    let a2 = na::distance_squared(b, c);
    let b2 = na::distance_squared(c, a);
    let c2 = na::distance_squared(a, b);

    let wa = a2 * (b2 + c2 - a2);
    let wb = b2 * (c2 + a2 - b2);
    let wc = c2 * (a2 + b2 - c2);
    let wsum = wa + wb + wc;

    Point::from((a.coords * wa + b.coords * wb + c.coords * wc) * (1.0 / wsum))
}

/// Circumcenter of a tetrahedron.
///
/// The center lies on the line through the circumcenter of `abc` along the normal of that
/// face; it is the point of this line equidistant from the face vertices and `d`. The
/// division degenerates when `d` is (nearly) coplanar with `abc`.
pub fn circumcenter4(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Point<Real> {
    let face_center = circumcenter3(a, b, c);
    let face_center_to_d = d - face_center;
    let normal = (b - a).cross(&(c - a)).normalize();

    let face_sqradius = (na::distance_squared(&face_center, a)
        + na::distance_squared(&face_center, b)
        + na::distance_squared(&face_center, c))
        / 3.0;
    let delta = (face_center_to_d.norm_squared() - face_sqradius)
        / (2.0 * face_center_to_d.dot(&normal));

    face_center + normal * delta
}

/// Circumcenter of a group of 2 to 4 points.
///
/// Only the first four points of larger groups are used.
///
/// # Panics
///
/// Panics if `group` has less than two points.
pub fn circumcenter(group: &[Point<Real>]) -> Point<Real> {
    match group {
        [a, b] => na::center(a, b),
        [a, b, c] => circumcenter3(a, b, c),
        [a, b, c, d, ..] => circumcenter4(a, b, c, d),
        _ => panic!("A circumcenter requires at least two points."),
    }
}

/// The largest squared distance from `center` to the points of `group`.
pub fn max_sqdist(center: &Point<Real>, group: &[Point<Real>]) -> Real {
    group
        .iter()
        .map(|pt| na::distance_squared(center, pt))
        .fold(0.0, Real::max)
}

/// The circumsphere of `group` whose radius reaches its farthest member.
pub fn group_sphere(group: &[Point<Real>]) -> SupportSphere {
    let center = circumcenter(group);
    SupportSphere {
        center,
        sqradius: max_sqdist(&center, group),
    }
}

/// Fits a sphere to `supports` without the member at index `dropped`, and checks whether
/// that member is still enclosed.
///
/// # Panics
///
/// Panics if `supports` has less than three points, or more than five.
pub fn sub_group_candidate(supports: &[Point<Real>], dropped: usize) -> SubGroupCandidate {
    let group: ArrayVec<Point<Real>, 4> = supports
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != dropped)
        .map(|(_, pt)| *pt)
        .collect();
    let sphere = group_sphere(&group);
    let fits = na::distance_squared(&sphere.center, &supports[dropped]) <= sphere.sqradius;

    SubGroupCandidate { sphere, fits }
}

/// Shrinks the support set after a new point was pushed at its end.
///
/// Every group obtained by dropping one of the older members is tried; the newest member is
/// never dropped since it is known to lie outside of the sphere of the others. Among the
/// groups still enclosing their dropped member, the one with the smallest radius replaces the
/// support set. If there is none, all the supports are kept and their circumsphere is
/// returned instead.
pub fn reduce_support_group(supports: &mut SupportPoints) -> SupportSphere {
    let mut best: Option<(usize, SupportSphere)> = None;

    for i in 0..supports.len() - 1 {
        let candidate = sub_group_candidate(supports, i);

        if candidate.fits
            && best.map_or(true, |(_, sphere)| candidate.sphere.sqradius < sphere.sqradius)
        {
            best = Some((i, candidate.sphere));
        }
    }

    if let Some((dropped, sphere)) = best {
        log::trace!(
            "Support point {} dropped, {} supports left.",
            dropped,
            supports.len() - 1
        );
        let _ = supports.remove(dropped);
        sphere
    } else {
        log::trace!("Support set grown to {} points.", supports.len());
        group_sphere(supports)
    }
}
