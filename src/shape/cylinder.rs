//! Cylinder shape.

use crate::math::{Point, Real};

/// Parameters of a capped cylinder with its principal axis aligned with the `y` axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The center of the cylinder, halfway between its caps.
    pub center: Point<Real>,
    /// The radius of the cylinder.
    pub radius: Real,
    /// The full height of the cylinder.
    pub height: Real,
    /// The number of slices around the `y` axis. Must be at least 3.
    pub segments: u32,
}

impl Cylinder {
    /// The number of segments used by [`Cylinder::new`].
    pub const DEFAULT_SEGMENTS: u32 = 32;

    /// Creates a new cylinder with the default tessellation.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real, height: Real) -> Cylinder {
        Self::with_segments(center, radius, height, Self::DEFAULT_SEGMENTS)
    }

    /// Creates a new cylinder with a custom number of segments.
    #[inline]
    pub fn with_segments(center: Point<Real>, radius: Real, height: Real, segments: u32) -> Cylinder {
        Cylinder {
            center,
            radius,
            height,
            segments,
        }
    }

    /// Half the height of this cylinder.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }
}
