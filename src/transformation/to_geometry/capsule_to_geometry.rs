use crate::math::Real;
use crate::shape::{
    check_positive, check_rings, check_segments, check_vertex_count, Capsule, GeometryBuffer, InvalidParameterError,
    ShapeGenerator,
};
use crate::transformation::utils;
use alloc::vec::Vec;
use na::RealField;

impl ShapeGenerator for Capsule {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("radius", self.radius)?;
        check_positive("height", self.height)?;
        check_segments(self.segments)?;
        check_rings(self.rings)?;
        check_vertex_count(self.num_vertices())
    }

    /// Discretize the boundary of this capsule.
    ///
    /// Each hemisphere gets `rings / 2` latitude bands, so an odd number of rings
    /// is rounded down. The vertices are laid out as:
    /// 1. the top hemisphere, from the pole to the equator;
    /// 2. the top then the bottom circle of the cylindrical part, with radial normals;
    /// 3. the bottom hemisphere, from the equator to the pole.
    ///
    /// When the cylindrical part vanishes, its two circles coincide and its
    /// triangles are degenerate.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.validate()?;

        let nsubdiv = self.segments;
        let half_rings = self.rings / 2;
        let half_cylinder = self.cylinder_height() / 2.0;
        let nverts = self.num_vertices() as usize;

        let mut positions = Vec::with_capacity(nverts);
        let mut normals = Vec::with_capacity(nverts);
        let mut faces = Vec::with_capacity((half_rings as usize * 2 + 1) * nsubdiv as usize * 2);

        let frac_pi_2 = Real::frac_pi_2();
        let band_angle = move |k: u32| frac_pi_2 * (k as Real) / (half_rings as Real);

        // Top hemisphere.
        utils::push_latitude_bands(
            &self.center,
            self.radius,
            half_cylinder,
            (0..=half_rings).map(band_angle),
            nsubdiv,
            &mut positions,
            &mut normals,
        );

        // Cylindrical part.
        let cylinder_start = positions.len() as u32;
        utils::push_circle(&self.center, self.radius, half_cylinder, nsubdiv, &mut positions);
        utils::push_circle(&self.center, self.radius, -half_cylinder, nsubdiv, &mut positions);
        utils::push_radial_normals(nsubdiv, &mut normals);
        utils::push_radial_normals(nsubdiv, &mut normals);

        // Bottom hemisphere.
        let bottom_start = positions.len() as u32;
        utils::push_latitude_bands(
            &self.center,
            self.radius,
            -half_cylinder,
            (0..=half_rings).map(|k| frac_pi_2 + band_angle(k)),
            nsubdiv,
            &mut positions,
            &mut normals,
        );

        utils::push_band_indices(0, half_rings, nsubdiv, &mut faces);
        utils::push_band_indices(cylinder_start, 1, nsubdiv, &mut faces);
        utils::push_band_indices(bottom_start, half_rings, nsubdiv, &mut faces);

        Ok(GeometryBuffer::from_parts_unchecked(
            positions, normals, None, faces,
        ))
    }
}

impl Capsule {
    /// Two hemispheres of `rings / 2 + 1` circles, plus the two circles of the cylindrical part.
    fn num_vertices(&self) -> u64 {
        let ncircles = (u64::from(self.rings / 2) + 1) * 2 + 2;
        ncircles.saturating_mul(u64::from(self.segments) + 1)
    }
}
