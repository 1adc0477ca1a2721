use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::utils::PointTransform;

/// Error returned when an interleaved `x, y, z` point buffer is not made of
/// whole points.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("a flat point buffer must hold a multiple of 3 scalars, got {len}")]
pub struct MalformedBufferError {
    /// The length of the rejected buffer.
    pub len: usize,
}

/// Computes the AABB of a set of points transformed by `m`.
///
/// This is a single pass over `pts`: the fold starts from [`Aabb::new_invalid`] and
/// grows it with each transformed point. Returns `None` if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(m: &impl PointTransform, pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter().peekable();
    let _ = it.peek()?;

    let mut aabb = Aabb::new_invalid();

    for pt in it {
        aabb.take_point(m.apply_to_point(pt));
    }

    Some(aabb)
}

/// Computes the AABB of a set of points.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let p0 = it.next()?;
    let mut min: Point<Real> = *p0;
    let mut max: Point<Real> = *p0;

    for pt in it {
        min = min.inf(pt);
        max = max.sup(pt);
    }

    Some(Aabb::new(min, max))
}

/// Computes the AABB of an interleaved `[x0, y0, z0, x1, y1, z1, ...]` point buffer
/// transformed by `m`.
///
/// Fails if the buffer length is not a multiple of 3. Returns `Ok(None)` if the
/// buffer is empty.
pub fn flat_point_cloud_aabb(
    m: &impl PointTransform,
    coords: &[Real],
) -> Result<Option<Aabb>, MalformedBufferError> {
    if coords.len() % 3 != 0 {
        return Err(MalformedBufferError { len: coords.len() });
    }

    if coords.is_empty() {
        return Ok(None);
    }

    let mut aabb = Aabb::new_invalid();

    for xyz in coords.chunks_exact(3) {
        aabb.take_point(m.apply_to_point(&Point::new(xyz[0], xyz[1], xyz[2])));
    }

    Ok(Some(aabb))
}
