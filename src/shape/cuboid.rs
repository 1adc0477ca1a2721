//! Box shape.

use crate::math::{Point, Real, Vector};
use na;

/// Parameters of an axis-aligned box.
///
/// `width`, `height` and `depth` are the full dimensions of the box along the
/// `x`, `y` and `z` axes respectively.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The center of the box.
    pub center: Point<Real>,
    /// The dimension of the box along `x`.
    pub width: Real,
    /// The dimension of the box along `y`.
    pub height: Real,
    /// The dimension of the box along `z`.
    pub depth: Real,
}

impl Cuboid {
    /// Creates a new box from its center and full dimensions.
    #[inline]
    pub fn new(center: Point<Real>, width: Real, height: Real, depth: Real) -> Cuboid {
        Cuboid {
            center,
            width,
            height,
            depth,
        }
    }

    /// Creates a new box from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Cuboid {
        let extents = half_extents * na::convert::<f64, Real>(2.0);
        Self::new(center, extents.x, extents.y, extents.z)
    }

    /// The half-extents of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        Vector::new(self.width, self.height, self.depth) * na::convert::<f64, Real>(0.5)
    }
}
