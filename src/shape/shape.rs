use crate::math::Real;
use crate::shape::{Capsule, Cone, Cuboid, Cylinder, GeometryBuffer, Plane, Sphere};

/// Error returned when a shape is asked to generate its geometry from invalid parameters.
///
/// No geometry is ever returned alongside this error: generation either fully
/// succeeds or does not start.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidParameterError {
    /// A dimension, radius or size is zero, negative, infinite or NaN.
    #[error("the {parameter} must be a positive finite number, got {value}")]
    NonPositive {
        /// The name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// Fewer than three angular segments were requested.
    #[error("at least 3 segments are required, got {0}")]
    TooFewSegments(u32),
    /// Fewer than two latitude rings were requested.
    #[error("at least 2 rings are required, got {0}")]
    TooFewRings(u32),
    /// The tessellation would have more vertices than `u32` indices can address.
    #[error("the tessellation would produce {0} vertices, more than u32 indices can address")]
    TooManyVertices(u64),
    /// The normal of a plane is zero or not finite, so no tangent frame exists.
    #[error("the plane normal must be a non-zero finite vector")]
    DegenerateNormal,
}

/// The minimum number of angular segments of a curved shape.
pub const MIN_SEGMENTS: u32 = 3;
/// The minimum number of latitude rings of a shape with rings.
pub const MIN_RINGS: u32 = 2;

pub(crate) fn check_positive(
    parameter: &'static str,
    value: Real,
) -> Result<(), InvalidParameterError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameterError::NonPositive { parameter, value })
    }
}

pub(crate) fn check_segments(segments: u32) -> Result<(), InvalidParameterError> {
    if segments < MIN_SEGMENTS {
        Err(InvalidParameterError::TooFewSegments(segments))
    } else {
        Ok(())
    }
}

pub(crate) fn check_rings(rings: u32) -> Result<(), InvalidParameterError> {
    if rings < MIN_RINGS {
        Err(InvalidParameterError::TooFewRings(rings))
    } else {
        Ok(())
    }
}

/// Checks that a tessellation with `count` vertices can be indexed with `u32`.
///
/// `count` is expected to be computed with saturating arithmetic.
pub(crate) fn check_vertex_count(count: u64) -> Result<(), InvalidParameterError> {
    if count > u64::from(u32::MAX) {
        Err(InvalidParameterError::TooManyVertices(count))
    } else {
        Ok(())
    }
}

/// A parametric shape able to discretize its boundary as a [`GeometryBuffer`].
///
/// Generation is pure: the same parameters always produce a buffer that compares
/// equal, field for field. Changing a parameter means generating a new buffer; a
/// buffer is never updated in place.
pub trait ShapeGenerator {
    /// Checks the parameters of this shape without generating anything.
    fn validate(&self) -> Result<(), InvalidParameterError>;

    /// Discretizes the boundary of this shape.
    ///
    /// Fails if [`ShapeGenerator::validate`] fails.
    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError>;
}

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A box.
    Cuboid,
    /// A sphere.
    Sphere,
    /// A capped cylinder.
    Cylinder,
    /// A capped cone.
    Cone,
    /// A capsule.
    Capsule,
    /// A finite square plane.
    Plane,
}

/// The parameters of any of the supported shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeParams {
    /// A box.
    Cuboid(Cuboid),
    /// A sphere.
    Sphere(Sphere),
    /// A capped cylinder.
    Cylinder(Cylinder),
    /// A capped cone.
    Cone(Cone),
    /// A capsule.
    Capsule(Capsule),
    /// A finite square plane.
    Plane(Plane),
}

impl ShapeParams {
    /// The type of the shape described by these parameters.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeParams::Cuboid(_) => ShapeType::Cuboid,
            ShapeParams::Sphere(_) => ShapeType::Sphere,
            ShapeParams::Cylinder(_) => ShapeType::Cylinder,
            ShapeParams::Cone(_) => ShapeType::Cone,
            ShapeParams::Capsule(_) => ShapeType::Capsule,
            ShapeParams::Plane(_) => ShapeType::Plane,
        }
    }

    fn as_generator(&self) -> &dyn ShapeGenerator {
        match self {
            ShapeParams::Cuboid(s) => s,
            ShapeParams::Sphere(s) => s,
            ShapeParams::Cylinder(s) => s,
            ShapeParams::Cone(s) => s,
            ShapeParams::Capsule(s) => s,
            ShapeParams::Plane(s) => s,
        }
    }
}

impl ShapeGenerator for ShapeParams {
    fn validate(&self) -> Result<(), InvalidParameterError> {
        self.as_generator().validate()
    }

    fn generate(&self) -> Result<GeometryBuffer, InvalidParameterError> {
        self.as_generator().generate()
    }
}

macro_rules! impl_from_params(
    ($($variant: ident),*) => {$(
        impl From<$variant> for ShapeParams {
            #[inline]
            fn from(shape: $variant) -> Self {
                ShapeParams::$variant(shape)
            }
        }
    )*}
);

impl_from_params!(Cuboid, Sphere, Cylinder, Cone, Capsule, Plane);
