//! Approximation of mesh collections with axis-aligned collision boxes.

pub use self::box_decomposition::{
    AggregateEnvelope, BoxVolume, CollisionDecomposer, Decomposition, DecompositionError,
    DecompositionSettings, FlatMeshDescriptor, MeshDescriptor,
};
pub use self::debug_colors::{debug_color, DEBUG_PALETTE, FALLBACK_DEBUG_COLOR};
pub use self::debug_geometry::{DebugMesh, DEBUG_MESH_PREFIX};

mod box_decomposition;
mod debug_colors;
mod debug_geometry;
