use crate::bounding_volume::{details, Aabb, BoundingVolume, MalformedBufferError};
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Cuboid;
use crate::utils::PointTransform;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Error returned when a mesh collection cannot be decomposed.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum DecompositionError {
    /// The flat point buffer of a mesh is not made of whole points.
    #[error("malformed point buffer for the mesh `{mesh}`")]
    MalformedBuffer {
        /// The name of the offending mesh.
        mesh: String,
        /// The underlying extraction error.
        #[source]
        source: MalformedBufferError,
    },
}

/// A named mesh whose points are expressed in its local frame, along with the
/// transform bringing them to the frame of the decomposition.
#[derive(Copy, Clone, Debug)]
pub struct MeshDescriptor<'a, T> {
    /// The name of the mesh.
    pub name: &'a str,
    /// The vertices of the mesh, in its local frame.
    pub points: &'a [Point<Real>],
    /// The local-to-model transform of the mesh.
    pub transform: T,
}

impl<'a, T: PointTransform> MeshDescriptor<'a, T> {
    /// Describes a mesh.
    #[inline]
    pub fn new(name: &'a str, points: &'a [Point<Real>], transform: T) -> Self {
        Self {
            name,
            points,
            transform,
        }
    }
}

/// A named mesh whose vertices are stored as an interleaved `[x0, y0, z0, x1, ...]`
/// buffer, as handed out by most asset loaders.
#[derive(Copy, Clone, Debug)]
pub struct FlatMeshDescriptor<'a, T> {
    /// The name of the mesh.
    pub name: &'a str,
    /// The interleaved vertex coordinates of the mesh, in its local frame.
    pub coords: &'a [Real],
    /// The local-to-model transform of the mesh.
    pub transform: T,
}

impl<'a, T: PointTransform> FlatMeshDescriptor<'a, T> {
    /// Describes a mesh with an interleaved vertex buffer.
    #[inline]
    pub fn new(name: &'a str, coords: &'a [Real], transform: T) -> Self {
        Self {
            name,
            coords,
            transform,
        }
    }
}

/// The axis-aligned box approximating one mesh.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BoxVolume {
    /// The name of the mesh this box was computed from.
    pub name: String,
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box.
    pub half_extents: Vector<Real>,
    /// The position of this box among the kept boxes, used to pick its debug color.
    pub color_index: usize,
}

impl BoxVolume {
    /// The AABB covered by this box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, self.half_extents)
    }

    /// The debug color of this box.
    #[inline]
    pub fn color(&self) -> [f32; 3] {
        super::debug_color(self.color_index)
    }

    /// The box shape matching this volume, for visualization.
    #[inline]
    pub fn to_cuboid(&self) -> Cuboid {
        Cuboid::from_half_extents(self.center, self.half_extents)
    }
}

/// The axis-aligned box enclosing every kept [`BoxVolume`] of a decomposition.
///
/// The envelope keeps the exact corners of the merged boxes, so it contains
/// every one of their [`BoxVolume::aabb`] even after rounding.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AggregateEnvelope {
    aabb: Aabb,
}

impl AggregateEnvelope {
    /// Creates an envelope from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self {
            aabb: Aabb::from_half_extents(center, half_extents),
        }
    }

    /// The center of this envelope.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.aabb.center()
    }

    /// The half-extents of this envelope.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.aabb.half_extents()
    }

    /// The AABB covered by this envelope.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }
}

impl From<Aabb> for AggregateEnvelope {
    #[inline]
    fn from(aabb: Aabb) -> Self {
        Self { aabb }
    }
}

/// The result of a decomposition: one box per kept mesh, in input order, and
/// the envelope of all of them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Decomposition {
    /// The kept boxes, in the order their meshes were provided.
    pub volumes: Vec<BoxVolume>,
    /// The union of all the kept boxes, or `None` if no box was kept.
    pub envelope: Option<AggregateEnvelope>,
}

impl Decomposition {
    /// Builds a decomposition from a list of boxes, computing their envelope.
    pub fn from_volumes(volumes: Vec<BoxVolume>) -> Self {
        let envelope = volumes
            .iter()
            .map(BoxVolume::aabb)
            .reduce(|acc, aabb| acc.merged(&aabb))
            .map(AggregateEnvelope::from);

        Self { volumes, envelope }
    }

    /// Is this decomposition free of any box?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// The `(position, half_extents)` of each box, in order.
    ///
    /// This is the input expected by compound shape builders of physics engines:
    /// each box becomes a cuboid sub-shape translated to the box center.
    pub fn compound_parts(&self) -> Vec<(Isometry<Real>, Vector<Real>)> {
        self.volumes
            .iter()
            .map(|v| {
                (
                    Isometry::translation(v.center.x, v.center.y, v.center.z),
                    v.half_extents,
                )
            })
            .collect()
    }
}

/// Parameters of the [`CollisionDecomposer`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DecompositionSettings {
    /// Meshes whose name starts with this prefix are never decomposed.
    ///
    /// Debug visualization meshes carry this prefix so they are not mistaken for
    /// solid geometry.
    pub reserved_prefix: String,
    /// Boxes with a half-extent smaller than this, along any axis, are dropped.
    pub min_half_extent: Real,
}

impl DecompositionSettings {
    /// The default value of [`DecompositionSettings::reserved_prefix`].
    pub const DEFAULT_RESERVED_PREFIX: &'static str = "debug_";
    /// The default value of [`DecompositionSettings::min_half_extent`].
    pub const DEFAULT_MIN_HALF_EXTENT: Real = 1.0e-3;
}

impl Default for DecompositionSettings {
    fn default() -> Self {
        Self {
            reserved_prefix: Self::DEFAULT_RESERVED_PREFIX.to_string(),
            min_half_extent: Self::DEFAULT_MIN_HALF_EXTENT,
        }
    }
}

/// Approximates a collection of meshes with one axis-aligned box per mesh.
///
/// For each mesh, in order:
/// 1. meshes whose name starts with the reserved prefix are skipped;
/// 2. meshes without any point are skipped;
/// 3. the points are transformed and their AABB computed;
/// 4. the AABB is dropped if it is too thin along any axis;
/// 5. otherwise it becomes the next [`BoxVolume`].
///
/// None of these filters is an error: a collection where every mesh is filtered
/// out simply yields an empty [`Decomposition`].
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use solidgen3d::decomposition::{CollisionDecomposer, MeshDescriptor};
/// use solidgen3d::math::{Isometry, Point};
///
/// let hull = [Point::new(-1.0, -0.5, -2.0), Point::new(1.0, 0.5, 2.0)];
/// let marker = [Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)];
/// let meshes = [
///     MeshDescriptor::new("hull", &hull[..], Isometry::translation(0.0, 1.0, 0.0)),
///     MeshDescriptor::new("debug_marker", &marker[..], Isometry::identity()),
/// ];
///
/// let decomposition = CollisionDecomposer::default().decompose(meshes);
/// assert_eq!(decomposition.volumes.len(), 1);
/// assert_eq!(decomposition.volumes[0].center, Point::new(0.0, 1.0, 0.0));
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CollisionDecomposer {
    /// The parameters of this decomposer.
    pub settings: DecompositionSettings,
}

impl CollisionDecomposer {
    /// Creates a decomposer with custom settings.
    pub fn new(settings: DecompositionSettings) -> Self {
        Self { settings }
    }

    /// Decomposes a collection of meshes into boxes.
    pub fn decompose<'a, T, I>(&self, meshes: I) -> Decomposition
    where
        T: PointTransform,
        I: IntoIterator<Item = MeshDescriptor<'a, T>>,
    {
        let mut volumes = Vec::new();

        for mesh in meshes {
            if self.is_reserved(mesh.name) {
                continue;
            }

            let aabb = details::point_cloud_aabb(&mesh.transform, mesh.points);
            self.push_volume(mesh.name, aabb, &mut volumes);
        }

        Decomposition::from_volumes(volumes)
    }

    /// Decomposes a collection of meshes with interleaved vertex buffers into boxes.
    ///
    /// Fails on the first non-reserved mesh whose buffer length is not a multiple
    /// of 3.
    pub fn decompose_flat<'a, T, I>(&self, meshes: I) -> Result<Decomposition, DecompositionError>
    where
        T: PointTransform,
        I: IntoIterator<Item = FlatMeshDescriptor<'a, T>>,
    {
        let mut volumes = Vec::new();

        for mesh in meshes {
            if self.is_reserved(mesh.name) {
                continue;
            }

            let aabb = details::flat_point_cloud_aabb(&mesh.transform, mesh.coords).map_err(
                |source| DecompositionError::MalformedBuffer {
                    mesh: mesh.name.to_string(),
                    source,
                },
            )?;
            self.push_volume(mesh.name, aabb, &mut volumes);
        }

        Ok(Decomposition::from_volumes(volumes))
    }

    fn is_reserved(&self, name: &str) -> bool {
        let reserved = name.starts_with(self.settings.reserved_prefix.as_str());

        if reserved {
            log::trace!("Skipping reserved mesh `{}`.", name);
        }

        reserved
    }

    fn push_volume(&self, name: &str, aabb: Option<Aabb>, volumes: &mut Vec<BoxVolume>) {
        // No point.
        let Some(aabb) = aabb else {
            return;
        };

        let center = aabb.center();
        let half_extents = aabb.half_extents();

        if half_extents.iter().any(|e| *e < self.settings.min_half_extent) {
            log::debug!(
                "Dropping degenerate collision box `{}` (half-extents: {:?}).",
                name,
                half_extents
            );
            return;
        }

        log::debug!(
            "Collision box `{}`: center {:?}, half-extents {:?}.",
            name,
            center,
            half_extents
        );

        volumes.push(BoxVolume {
            name: name.to_string(),
            center,
            half_extents,
            color_index: volumes.len(),
        });
    }
}
