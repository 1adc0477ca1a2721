//! Cone shape.

use crate::math::{Point, Real, Vector};

/// Parameters of a capped cone with its principal axis aligned with the `y` axis.
///
/// Unlike the other shapes, a cone is positioned by the center of its base: the
/// apex lies `height` units above it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The center of the base disk.
    pub base: Point<Real>,
    /// The radius of the base disk.
    pub radius: Real,
    /// The distance between the base and the apex.
    pub height: Real,
    /// The number of slices around the `y` axis. Must be at least 3.
    pub segments: u32,
}

impl Cone {
    /// The number of segments used by [`Cone::new`].
    pub const DEFAULT_SEGMENTS: u32 = 32;

    /// Creates a new cone with the default tessellation.
    #[inline]
    pub fn new(base: Point<Real>, radius: Real, height: Real) -> Cone {
        Self::with_segments(base, radius, height, Self::DEFAULT_SEGMENTS)
    }

    /// Creates a new cone with a custom number of segments.
    #[inline]
    pub fn with_segments(base: Point<Real>, radius: Real, height: Real, segments: u32) -> Cone {
        Cone {
            base,
            radius,
            height,
            segments,
        }
    }

    /// The tip of the cone.
    #[inline]
    pub fn apex(&self) -> Point<Real> {
        self.base + Vector::y() * self.height
    }
}
