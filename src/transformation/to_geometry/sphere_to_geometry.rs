use crate::math::Real;
use crate::shape::{
    check_positive, check_rings, check_segments, check_vertex_count, GeometryBuffer, InvalidParameterError,
    ShapeGenerator, Sphere,
};
use crate::transformation::utils;
use alloc::vec::Vec;
use na::RealField;

impl ShapeGenerator for Sphere {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("radius", self.radius)?;
        check_segments(self.segments)?;
        check_rings(self.rings)?;
        check_vertex_count(self.num_vertices())
    }

    /// Discretize the boundary of this sphere as a latitude/longitude grid.
    ///
    /// The grid has `rings + 1` seam-duplicated circles of `segments + 1` vertices,
    /// from the north pole (`+y`) to the south pole. Both poles are collapsed
    /// circles, so the triangles touching them are degenerate.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.validate()?;

        let nverts = self.num_vertices() as usize;
        let mut positions = Vec::with_capacity(nverts);
        let mut normals = Vec::with_capacity(nverts);
        let mut faces = Vec::with_capacity(self.rings as usize * self.segments as usize * 2);

        let pi = Real::pi();
        let rings = self.rings;
        let phis = (0..=rings).map(|r| pi * (r as Real) / (rings as Real));

        utils::push_latitude_bands(
            &self.center,
            self.radius,
            0.0,
            phis,
            self.segments,
            &mut positions,
            &mut normals,
        );
        utils::push_band_indices(0, self.rings, self.segments, &mut faces);

        Ok(GeometryBuffer::from_parts_unchecked(
            positions, normals, None, faces,
        ))
    }
}

impl Sphere {
    fn num_vertices(&self) -> u64 {
        (u64::from(self.rings) + 1).saturating_mul(u64::from(self.segments) + 1)
    }
}
