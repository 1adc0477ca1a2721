use super::{Decomposition, FALLBACK_DEBUG_COLOR};
use crate::shape::{Cuboid, GeometryBuffer, ShapeGenerator};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// The prefix of the names of every [`DebugMesh`].
///
/// It starts with the default reserved prefix of the decomposer, so debug meshes
/// fed back to a default [`CollisionDecomposer`](super::CollisionDecomposer) are ignored.
pub const DEBUG_MESH_PREFIX: &str = "debug_collision_";

/// A colored mesh displaying a collision box.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugMesh {
    /// The name of the mesh: [`DEBUG_MESH_PREFIX`] followed by the name of the box.
    pub name: String,
    /// The RGB color of the mesh.
    pub color: [f32; 3],
    /// The box geometry.
    pub geometry: GeometryBuffer,
}

impl Decomposition {
    /// Builds the meshes displaying this decomposition.
    ///
    /// There is one mesh per box, colored after its position. If there is no box
    /// but an envelope was set manually, the envelope alone is displayed, named
    /// `debug_collision_aabb`. Boxes too thin to be generated are left out.
    pub fn debug_geometry(&self) -> Vec<DebugMesh> {
        if self.volumes.is_empty() {
            return self
                .envelope
                .iter()
                .filter_map(|envelope| {
                    debug_mesh(
                        String::from("aabb"),
                        FALLBACK_DEBUG_COLOR,
                        Cuboid::from_half_extents(envelope.center(), envelope.half_extents()),
                    )
                })
                .collect();
        }

        self.volumes
            .iter()
            .filter_map(|volume| debug_mesh(volume.name.clone(), volume.color(), volume.to_cuboid()))
            .collect()
    }
}

fn debug_mesh(name: String, color: [f32; 3], cuboid: Cuboid) -> Option<DebugMesh> {
    match cuboid.generate() {
        Ok(geometry) => Some(DebugMesh {
            name: format!("{}{}", DEBUG_MESH_PREFIX, name),
            color,
            geometry,
        }),
        Err(err) => {
            log::debug!("Cannot display the collision box `{}`: {}", name, err);
            None
        }
    }
}
