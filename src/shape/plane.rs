//! Finite plane shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::InvalidParameterError;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Parameters of a finite, square, single-sided plane.
///
/// The square is centered on `point`, orthogonal to `normal`, and `size` units
/// wide along both of its tangent directions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The center of the square.
    pub point: Point<Real>,
    /// The unit normal of the plane.
    ///
    /// [`Plane::new`] normalizes it. If it is modified directly, it is normalized
    /// again whenever the geometry is generated.
    pub normal: Vector<Real>,
    /// The side length of the square.
    pub size: Real,
}

impl Plane {
    /// The side length used by [`Plane::horizontal`].
    pub const DEFAULT_SIZE: Real = 10.0;

    /// Creates a new plane, normalizing `normal`.
    ///
    /// A zero `normal` is kept as-is and reported as an error by
    /// [`Plane::tangent_frame`] and by geometry generation.
    #[inline]
    pub fn new(point: Point<Real>, normal: Vector<Real>, size: Real) -> Plane {
        Plane {
            point,
            normal: normal.try_normalize(DEFAULT_EPSILON).unwrap_or(normal),
            size,
        }
    }

    /// A horizontal plane facing `+y`, at the given height, with the default size.
    #[inline]
    pub fn horizontal(height: Real) -> Plane {
        Self::new(Point::new(0.0, height, 0.0), Vector::y(), Self::DEFAULT_SIZE)
    }

    /// The signed distance from `pt` to this plane.
    ///
    /// Positive on the side the normal points to, negative on the other side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&(pt - self.point))
    }

    /// The unit normal of this plane, or an error if it is zero or not finite.
    pub fn unit_normal(&self) -> Result<Vector<Real>, InvalidParameterError> {
        if !self.normal.iter().all(|e| e.is_finite()) {
            return Err(InvalidParameterError::DegenerateNormal);
        }

        self.normal
            .try_normalize(DEFAULT_EPSILON)
            .ok_or(InvalidParameterError::DegenerateNormal)
    }

    /// Two unit vectors spanning this plane: `(tangent, bitangent)`.
    ///
    /// The tangent is derived from the world `y` axis, unless the normal is within
    /// about 25 degrees of it, in which case the world `x` axis is used instead so
    /// the cross product never collapses. `(tangent, bitangent, normal)` is a
    /// right-handed orthonormal basis.
    pub fn tangent_frame(&self) -> Result<(Vector<Real>, Vector<Real>), InvalidParameterError> {
        let normal = self.unit_normal()?;
        let reference = if normal.y.abs() < 0.9 {
            Vector::y()
        } else {
            Vector::x()
        };
        let tangent = reference.cross(&normal).normalize();
        let bitangent = normal.cross(&tangent).normalize();
        Ok((tangent, bitangent))
    }
}
