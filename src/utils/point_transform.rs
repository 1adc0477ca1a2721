use crate::math::{HomogeneousMatrix, Isometry, Point, Real};
use na::{TCategory, Transform};

/// A transformation that can be applied to the points of a mesh.
///
/// Mesh loaders usually hand out node-to-model transforms as plain 4×4
/// homogeneous matrices (which may contain scaling and shearing), while
/// rigid placements are more naturally expressed with an [`Isometry`].
/// Both, as well as nalgebra's typed [`Transform`]s, implement this trait.
pub trait PointTransform {
    /// Applies this transformation to `pt`.
    fn apply_to_point(&self, pt: &Point<Real>) -> Point<Real>;
}

impl PointTransform for Isometry<Real> {
    #[inline]
    fn apply_to_point(&self, pt: &Point<Real>) -> Point<Real> {
        self * pt
    }
}

/// The last row of the matrix is ignored: it is assumed to be `[0, 0, 0, 1]`.
impl PointTransform for HomogeneousMatrix<Real> {
    #[inline]
    fn apply_to_point(&self, pt: &Point<Real>) -> Point<Real> {
        let linear = self.fixed_view::<3, 3>(0, 0);
        let translation = self.fixed_view::<3, 1>(0, 3);
        Point::from(linear * pt.coords + translation)
    }
}

impl<C: TCategory> PointTransform for Transform<Real, C, 3> {
    #[inline]
    fn apply_to_point(&self, pt: &Point<Real>) -> Point<Real> {
        self * pt
    }
}

impl<T: PointTransform + ?Sized> PointTransform for &T {
    #[inline]
    fn apply_to_point(&self, pt: &Point<Real>) -> Point<Real> {
        (**self).apply_to_point(pt)
    }
}
