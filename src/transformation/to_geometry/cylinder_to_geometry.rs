use crate::math::Vector;
use crate::shape::{
    check_positive, check_segments, check_vertex_count, Cylinder, GeometryBuffer, InvalidParameterError,
    ShapeGenerator,
};
use crate::transformation::utils;
use alloc::vec::Vec;

impl ShapeGenerator for Cylinder {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("radius", self.radius)?;
        check_positive("height", self.height)?;
        check_segments(self.segments)?;
        check_vertex_count((u64::from(self.segments) + 1) * 4 + 2)
    }

    /// Discretize the boundary of this cylinder.
    ///
    /// The vertices are laid out as follows, each circle being seam-duplicated:
    /// 1. the bottom circle of the side, with radial normals;
    /// 2. the top circle of the side, with radial normals;
    /// 3. the center of the top cap, then its circle, all with a `+y` normal;
    /// 4. the center of the bottom cap, then its circle, all with a `-y` normal.
    ///
    /// The caps do not share their rim vertices with the side, so the shading
    /// stays sharp along the rims.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.validate()?;

        let nsubdiv = self.segments;
        let ncircle = nsubdiv + 1;
        let nverts = (ncircle * 4 + 2) as usize;
        let half_height = self.half_height();

        let mut positions = Vec::with_capacity(nverts);
        let mut normals = Vec::with_capacity(nverts);
        let mut faces = Vec::with_capacity(nsubdiv as usize * 4);

        // Side.
        utils::push_circle(&self.center, self.radius, -half_height, nsubdiv, &mut positions);
        utils::push_circle(&self.center, self.radius, half_height, nsubdiv, &mut positions);
        utils::push_radial_normals(nsubdiv, &mut normals);
        utils::push_radial_normals(nsubdiv, &mut normals);

        // Top cap.
        positions.push(self.center + Vector::y() * half_height);
        utils::push_circle(&self.center, self.radius, half_height, nsubdiv, &mut positions);
        utils::push_constant_normals(Vector::y(), ncircle as usize + 1, &mut normals);

        // Bottom cap.
        positions.push(self.center - Vector::y() * half_height);
        utils::push_circle(&self.center, self.radius, -half_height, nsubdiv, &mut positions);
        utils::push_constant_normals(-Vector::y(), ncircle as usize + 1, &mut normals);

        let top_center = ncircle * 2;
        let bottom_center = top_center + 1 + ncircle;

        utils::push_tube_indices(0, ncircle, nsubdiv, &mut faces);
        utils::push_fan_indices(top_center, top_center + 1, nsubdiv, &mut faces);

        let bottom_start = faces.len();
        utils::push_fan_indices(bottom_center, bottom_center + 1, nsubdiv, &mut faces);
        utils::reverse_clockwising(&mut faces[bottom_start..]);

        Ok(GeometryBuffer::from_parts_unchecked(
            positions, normals, None, faces,
        ))
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
    use crate::shape::{Cylinder, InvalidParameterError, ShapeGenerator};

    #[test]
    fn cylinder_layout() {
        let center = Point::new(0.0, 1.0, 0.0);
        let buffer = Cylinder::with_segments(center, 0.5, 2.0, 4)
            .generate()
            .unwrap();

        assert_eq!(buffer.num_vertices(), 4 * 5 + 2);
        assert_eq!(buffer.num_triangles(), 4 * 4);

        // Side circles.
        assert_relative_eq!(buffer.positions()[0], Point::new(0.5, 0.0, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(buffer.positions()[5], Point::new(0.5, 2.0, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(buffer.normals()[1], Vector::z(), epsilon = 1.0e-6);

        // Cap centers.
        assert_eq!(buffer.positions()[10], Point::new(0.0, 2.0, 0.0));
        assert_eq!(buffer.normals()[10], Vector::y());
        assert_eq!(buffer.positions()[16], Point::new(0.0, 0.0, 0.0));
        assert_eq!(buffer.normals()[16], -Vector::y());

        assert_eq!(buffer.faces()[0], [0, 1, 6]);
        assert_eq!(buffer.faces()[1], [0, 6, 5]);
        assert_eq!(buffer.faces()[8], [10, 11, 12]);
        assert_eq!(buffer.faces()[12], [16, 18, 17]);
    }

    #[test]
    fn cylinder_vertex_limit() {
        let segments = (u32::MAX - 6) / 4;
        assert_eq!(
            Cylinder::with_segments(Point::origin(), 1.0, 1.0, segments).validate(),
            Ok(())
        );
        assert_eq!(
            Cylinder::with_segments(Point::origin(), 1.0, 1.0, segments + 1).validate(),
            Err(InvalidParameterError::TooManyVertices(
                (u64::from(segments) + 2) * 4 + 2
            ))
        );
    }

    #[test]
    fn cylinder_rejects_flat_shapes() {
        assert_eq!(
            Cylinder::new(Point::origin(), 1.0, 0.0).generate(),
            Err(InvalidParameterError::NonPositive {
                parameter: "height",
                value: 0.0
            })
        );
    }
}
