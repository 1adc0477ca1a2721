//! Capsule shape.

use crate::math::{Point, Real};

/// Parameters of a capsule: a cylinder capped by two hemispheres, with its
/// principal axis aligned with the `y` axis.
///
/// `height` is the total height, caps included. If it is smaller than the
/// diameter, the cylindrical part vanishes and the two hemispheres touch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The center of the capsule.
    pub center: Point<Real>,
    /// The radius of the caps and of the cylindrical part.
    pub radius: Real,
    /// The total height of the capsule, caps included.
    pub height: Real,
    /// The number of slices around the `y` axis. Must be at least 3.
    pub segments: u32,
    /// The number of latitude bands of the two caps together. Must be at least 2;
    /// each hemisphere gets `rings / 2` bands.
    pub rings: u32,
}

impl Capsule {
    /// The number of segments used by [`Capsule::new`].
    pub const DEFAULT_SEGMENTS: u32 = 16;
    /// The number of rings used by [`Capsule::new`].
    pub const DEFAULT_RINGS: u32 = 8;

    /// Creates a new capsule with the default tessellation.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real, height: Real) -> Capsule {
        Self::with_subdivisions(
            center,
            radius,
            height,
            Self::DEFAULT_SEGMENTS,
            Self::DEFAULT_RINGS,
        )
    }

    /// Creates a new capsule with a custom tessellation.
    #[inline]
    pub fn with_subdivisions(
        center: Point<Real>,
        radius: Real,
        height: Real,
        segments: u32,
        rings: u32,
    ) -> Capsule {
        Capsule {
            center,
            radius,
            height,
            segments,
            rings,
        }
    }

    /// The height of the cylindrical part alone, excluding the caps.
    #[inline]
    pub fn cylinder_height(&self) -> Real {
        (self.height - 2.0 * self.radius).max(0.0)
    }
}
