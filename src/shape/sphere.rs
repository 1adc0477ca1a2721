//! Sphere shape.

use crate::math::{Point, Real};

/// Parameters of a UV-sphere.
///
/// The sphere is tessellated as a latitude/longitude grid: `rings` bands from the
/// north pole to the south pole, and `segments` slices around the `y` axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
    /// The number of slices around the `y` axis. Must be at least 3.
    pub segments: u32,
    /// The number of bands from pole to pole. Must be at least 2.
    pub rings: u32,
}

impl Sphere {
    /// The number of segments used by [`Sphere::new`].
    pub const DEFAULT_SEGMENTS: u32 = 32;
    /// The number of rings used by [`Sphere::new`].
    pub const DEFAULT_RINGS: u32 = 16;

    /// Creates a new sphere with the default tessellation.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Self::with_subdivisions(center, radius, Self::DEFAULT_SEGMENTS, Self::DEFAULT_RINGS)
    }

    /// Creates a new sphere with a custom tessellation.
    #[inline]
    pub fn with_subdivisions(
        center: Point<Real>,
        radius: Real,
        segments: u32,
        rings: u32,
    ) -> Sphere {
        Sphere {
            center,
            radius,
            segments,
            rings,
        }
    }
}
