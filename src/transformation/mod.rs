//! Discretization of parametric shapes into triangle meshes.

mod to_geometry;
pub mod utils;
