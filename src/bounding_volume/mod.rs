//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::{
    BoundingSphere, FitQuality, SupportPoints, MAX_SUPPORT_POINTS,
};
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_utils;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::bounding_sphere_utils::{
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    };
    pub use crate::utils::{box_center, point_cloud_farthest_point, point_cloud_farthest_point_id};
}
