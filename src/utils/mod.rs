//! Various unsorted geometrical operators.

pub use self::point_transform::PointTransform;

mod point_transform;
