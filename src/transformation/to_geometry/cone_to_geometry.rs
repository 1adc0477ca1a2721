use crate::math::{Real, Vector};
use crate::shape::{
    check_positive, check_segments, check_vertex_count, Cone, GeometryBuffer, InvalidParameterError, ShapeGenerator,
};
use crate::transformation::utils;
use alloc::vec::Vec;
use na::ComplexField;

impl ShapeGenerator for Cone {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("radius", self.radius)?;
        check_positive("height", self.height)?;
        check_segments(self.segments)?;
        check_vertex_count((u64::from(self.segments) + 1) * 2 + 2)
    }

    /// Discretize the boundary of this cone.
    ///
    /// The apex comes first, followed by the seam-duplicated circle of the side,
    /// the center of the base cap and the circle of the base cap. The side normals
    /// are tilted upward according to the slope of the cone. The apex normal
    /// points straight up.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.validate()?;

        let nsubdiv = self.segments;
        let ncircle = nsubdiv + 1;
        let nverts = (ncircle * 2 + 2) as usize;

        let mut positions = Vec::with_capacity(nverts);
        let mut normals = Vec::with_capacity(nverts);
        let mut faces = Vec::with_capacity(nsubdiv as usize * 2);

        let slope = self.radius / self.height;
        let inv_len = 1.0 / ComplexField::sqrt(1.0 + slope * slope);
        let normal_y: Real = slope * inv_len;

        // Apex and side.
        positions.push(self.apex());
        normals.push(Vector::new(0.0, normal_y, 0.0));
        utils::push_circle(&self.base, self.radius, 0.0, nsubdiv, &mut positions);
        normals.extend(
            utils::seam_ring_directions(nsubdiv)
                .map(|(cos, sin)| Vector::new(cos * inv_len, normal_y, sin * inv_len)),
        );

        // Base cap.
        let cap_center = positions.len() as u32;
        positions.push(self.base);
        utils::push_circle(&self.base, self.radius, 0.0, nsubdiv, &mut positions);
        utils::push_constant_normals(-Vector::y(), ncircle as usize + 1, &mut normals);

        utils::push_fan_indices(0, 1, nsubdiv, &mut faces);
        utils::push_fan_indices(cap_center, cap_center + 1, nsubdiv, &mut faces);
        utils::reverse_clockwising(&mut faces);

        Ok(GeometryBuffer::from_parts_unchecked(
            positions, normals, None, faces,
        ))
    }
}
