use crate::shape::{check_positive, GeometryBuffer, InvalidParameterError, Plane, ShapeGenerator};
use crate::transformation::utils;
use alloc::{vec, vec::Vec};

impl ShapeGenerator for Plane {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("size", self.size)?;
        let _ = self.unit_normal()?;
        Ok(())
    }

    /// Discretize this plane as a single quad made of two triangles, facing its normal.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.validate()?;

        let normal = self.unit_normal()?;
        let (tangent, bitangent) = self.tangent_frame()?;
        let half_size = self.size / 2.0;
        let t = tangent * half_size;
        let b = bitangent * half_size;

        let positions = vec![
            self.point - t - b,
            self.point + t - b,
            self.point + t + b,
            self.point - t + b,
        ];
        let mut normals = Vec::with_capacity(4);
        utils::push_constant_normals(normal, 4, &mut normals);
        let mut faces = Vec::with_capacity(2);
        utils::push_quad_indices(0, &mut faces);

        Ok(GeometryBuffer::from_parts_unchecked(
            positions, normals, None, faces,
        ))
    }
}
