//! Parametric shapes and their triangle-mesh discretization.

pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::geometry_buffer::{GeometryBuffer, GeometryBufferError, WireGeometry};
pub use self::plane::Plane;
#[doc(inline)]
pub use self::shape::{
    InvalidParameterError, ShapeGenerator, ShapeParams, ShapeType, MIN_RINGS, MIN_SEGMENTS,
};
pub use self::sphere::Sphere;

pub(crate) use self::shape::{check_positive, check_rings, check_segments, check_vertex_count};

mod capsule;
mod cone;
mod cuboid;
mod cylinder;
mod geometry_buffer;
mod plane;
#[doc(hidden)]
pub mod shape;
mod sphere;
