use crate::bounding_volume::{details, Aabb};
use crate::math::{Point, Real, TexCoord, Vector};
use alloc::vec::Vec;

/// Indicated an inconsistency while assembling a geometry buffer.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryBufferError {
    /// There must be exactly one normal per position.
    #[error("expected one normal per position ({positions}), got {normals}.")]
    NormalCountMismatch {
        /// The number of positions.
        positions: usize,
        /// The number of normals.
        normals: usize,
    },
    /// There must be exactly one texture coordinate per position, if any.
    #[error("expected one texture coordinate per position ({positions}), got {tex_coords}.")]
    TexCoordCountMismatch {
        /// The number of positions.
        positions: usize,
        /// The number of texture coordinates.
        tex_coords: usize,
    },
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {index} but there are only {positions} positions.")]
    IndexOutOfBounds {
        /// The index of the offending face.
        face: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of positions.
        positions: usize,
    },
}

/// The triangle-mesh discretization of a shape's boundary.
///
/// - `positions` and `normals` have the same length, and the i-th normal is the
///   normal at the i-th position;
/// - `tex_coords`, if present, also have one entry per position;
/// - every index of `faces` is smaller than the number of positions.
///
/// A buffer is a read-only snapshot: none of its fields can be modified once it
/// is built. Regenerating a shape with different parameters yields a brand-new
/// buffer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GeometryBuffer {
    positions: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    tex_coords: Option<Vec<TexCoord<Real>>>,
    faces: Vec<[u32; 3]>,
}

impl GeometryBuffer {
    /// Assembles a geometry buffer, checking its invariants.
    pub fn new(
        positions: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        tex_coords: Option<Vec<TexCoord<Real>>>,
        faces: Vec<[u32; 3]>,
    ) -> Result<Self, GeometryBufferError> {
        if normals.len() != positions.len() {
            return Err(GeometryBufferError::NormalCountMismatch {
                positions: positions.len(),
                normals: normals.len(),
            });
        }

        if let Some(tex_coords) = &tex_coords {
            if tex_coords.len() != positions.len() {
                return Err(GeometryBufferError::TexCoordCountMismatch {
                    positions: positions.len(),
                    tex_coords: tex_coords.len(),
                });
            }
        }

        for (face_id, face) in faces.iter().enumerate() {
            if let Some(index) = face.iter().find(|i| **i as usize >= positions.len()) {
                return Err(GeometryBufferError::IndexOutOfBounds {
                    face: face_id,
                    index: *index,
                    positions: positions.len(),
                });
            }
        }

        Ok(Self::from_parts_unchecked(
            positions, normals, tex_coords, faces,
        ))
    }

    /// Assembles a geometry buffer the generators already know to be consistent.
    pub(crate) fn from_parts_unchecked(
        positions: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        tex_coords: Option<Vec<TexCoord<Real>>>,
        faces: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert!(faces
            .iter()
            .flatten()
            .all(|i| (*i as usize) < positions.len()));

        Self {
            positions,
            normals,
            tex_coords,
            faces,
        }
    }

    /// The vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point<Real>] {
        &self.positions
    }

    /// The vertex normals, one per position.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The texture coordinates, one per position, if this buffer has any.
    #[inline]
    pub fn tex_coords(&self) -> Option<&[TexCoord<Real>]> {
        self.tex_coords.as_deref()
    }

    /// The triangles, as triplets of indices into [`Self::positions`].
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// The number of vertices of this buffer.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// The number of triangles of this buffer.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// The AABB of the positions of this buffer, or `None` if it has no vertex.
    pub fn local_aabb(&self) -> Option<Aabb> {
        details::local_point_cloud_aabb(&self.positions)
    }

    /// Consumes this buffer and returns its parts.
    pub fn into_parts(
        self,
    ) -> (
        Vec<Point<Real>>,
        Vec<Vector<Real>>,
        Option<Vec<TexCoord<Real>>>,
        Vec<[u32; 3]>,
    ) {
        (self.positions, self.normals, self.tex_coords, self.faces)
    }

    /// Flattens this buffer into the layout expected by rendering backends.
    pub fn to_wire(&self) -> WireGeometry {
        WireGeometry {
            positions: self
                .positions
                .iter()
                .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
                .collect(),
            normals: self
                .normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            tex_coords: self.tex_coords.as_ref().map(|uvs| {
                uvs.iter()
                    .flat_map(|uv| [uv.x as f32, uv.y as f32])
                    .collect()
            }),
            indices: self.faces.iter().flatten().copied().collect(),
        }
    }
}

/// The flat representation of a [`GeometryBuffer`] uploaded to a rendering backend.
///
/// - `positions`: N×3 single-precision floats;
/// - `normals`: N×3 single-precision floats;
/// - `tex_coords`: N×2 single-precision floats, absent if the shape is not textured;
/// - `indices`: M×3 zero-based vertex indices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WireGeometry {
    /// Interleaved `x, y, z` positions.
    pub positions: Vec<f32>,
    /// Interleaved `x, y, z` normals.
    pub normals: Vec<f32>,
    /// Interleaved `u, v` texture coordinates.
    pub tex_coords: Option<Vec<f32>>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

#[cfg(feature = "bytemuck")]
impl WireGeometry {
    /// The positions as raw bytes.
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// The normals as raw bytes.
    pub fn normals_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// The texture coordinates as raw bytes, if any.
    pub fn tex_coords_bytes(&self) -> Option<&[u8]> {
        self.tex_coords.as_deref().map(bytemuck::cast_slice)
    }

    /// The indices as raw bytes.
    pub fn indices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
