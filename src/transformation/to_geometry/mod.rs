//! Discretization of the parametric shapes into geometry buffers.
//!
//! Every shape of [`crate::shape`] implements [`ShapeGenerator`](crate::shape::ShapeGenerator)
//! through the submodules of this module.
//!
//! # Winding
//!
//! The triangles of the box, of the plane and of the side of the cone are
//! counter-clockwise when seen from outside. The triangles of the sphere, of the
//! cylinder, of the capsule and of the base of the cone are clockwise when seen
//! from outside. The vertex normals always point outward, so renderers should rely
//! on them rather than on the winding, or disable back-face culling for curved shapes.

mod capsule_to_geometry;
mod cone_to_geometry;
mod cuboid_to_geometry;
mod cylinder_to_geometry;
mod plane_to_geometry;
mod sphere_to_geometry;
