/*!
spherefit3d
===========

**spherefit3d** computes bounding spheres of 3-dimensional point sets.

Two interchangeable solvers are provided:

- [`GeoFit`](fitting::GeoFit), an incremental solver refining a set of at most
  four support points until no input point is left outside. It produces the
  minimal enclosing sphere within numerical accuracy.
- [`Ritter`](fitting::Ritter), the classic two-pass heuristic. It is cheaper but
  only guarantees that the result encloses every point.

Both return a [`BoundingSphere`](bounding_volume::BoundingSphere) carrying the
fit quality along with a few diagnostics (support points, number of passes over
the input, residual error and solver time).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod fitting;
pub mod utils;

/// Aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
