use crate::math::{Real, Vector};
use crate::shape::{check_positive, Cuboid, GeometryBuffer, InvalidParameterError, ShapeGenerator};
use crate::transformation::utils;
use alloc::vec::Vec;

/// The outward normal of each face of a box, followed by the sign of the
/// coordinates of its four corners, in counter-clockwise order seen from outside.
const FACES: [([Real; 3], [[Real; 3]; 4]); 6] = [
    // Front
    (
        [0.0, 0.0, 1.0],
        [
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
        ],
    ),
    // Back
    (
        [0.0, 0.0, -1.0],
        [
            [1.0, -1.0, -1.0],
            [-1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
        ],
    ),
    // Top
    (
        [0.0, 1.0, 0.0],
        [
            [-1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
        ],
    ),
    // Bottom
    (
        [0.0, -1.0, 0.0],
        [
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
            [-1.0, -1.0, 1.0],
        ],
    ),
    // Right
    (
        [1.0, 0.0, 0.0],
        [
            [1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
        ],
    ),
    // Left
    (
        [-1.0, 0.0, 0.0],
        [
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
        ],
    ),
];

impl ShapeGenerator for Cuboid {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("depth", self.depth)
    }

    /// Discretize the boundary of this box as 24 vertices (four per face, so every
    /// face has its own flat normal) and 12 triangles.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.validate()?;

        let half_extents = self.half_extents();
        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut faces = Vec::with_capacity(12);

        for (normal, corners) in FACES.iter() {
            utils::push_quad_indices(positions.len() as u32, &mut faces);

            for corner in corners {
                positions.push(self.center + Vector::from(*corner).component_mul(&half_extents));
            }

            utils::push_constant_normals(Vector::from(*normal), corners.len(), &mut normals);
        }

        Ok(GeometryBuffer::from_parts_unchecked(
            positions, normals, None, faces,
        ))
    }
}
