/*!
solidgen3d
==========

**solidgen3d** turns a handful of shape parameters (box, sphere, cylinder,
cone, capsule, plane) into renderable triangle meshes, and turns arbitrary
collections of transformed meshes into axis-aligned box volumes usable as
collision proxies by a rigid-body engine.

Everything in this crate is a pure function of its inputs: no caches, no
shared state, no I/O.

```
# #[cfg(all(feature = "dim3", feature = "f32"))] {
use solidgen3d::math::Point;
use solidgen3d::shape::{ShapeGenerator, Sphere};

let sphere = Sphere::new(Point::origin(), 1.0);
let buffer = sphere.generate().unwrap();
assert_eq!(buffer.positions().len(), buffer.normals().len());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod decomposition;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{
        Affine3, Isometry3, Matrix4, Point2, Point3, Transform3, Translation3, UnitVector3,
        Vector3,
    };

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The homogeneous matrix type used for general affine transforms.
    pub use Matrix4 as HomogeneousMatrix;

    /// The texture coordinate type.
    pub use Point2 as TexCoord;
}
