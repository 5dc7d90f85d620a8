//! Various unsorted geometrical operators.

pub use self::center::box_center;
pub use self::point_cloud_farthest_point::{
    point_cloud_farthest_point, point_cloud_farthest_point_id,
};

mod center;
mod point_cloud_farthest_point;
