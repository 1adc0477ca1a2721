//! Low-level utilities for triangle-mesh generation.
//!
//! These are the building blocks of the shape generators of this crate. They are
//! exposed for users who need to assemble custom meshes with the same vertex and
//! index conventions.
//!
//! # Conventions
//!
//! - Circles lie in a plane orthogonal to the `y` axis. The angle `θ` runs from
//!   `+x` towards `+z`: a circle point is `(cos θ · r, y, sin θ · r)`.
//! - Every circle is **seam-duplicated**: a circle with `nsubdiv` segments has
//!   `nsubdiv + 1` vertices, the last one at `θ = 2π` coinciding with the first.
//! - Latitude bands are parametrized by the polar angle `φ` measured from `+y`.

use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;
use na::{ComplexField, RealField};

/// Iterates through `(cos θ, sin θ)` for `θ = 2π·i / nsubdiv` with `i` in `0..=nsubdiv`.
///
/// The first and last items describe the same direction (the seam).
pub fn seam_ring_directions(nsubdiv: u32) -> impl Iterator<Item = (Real, Real)> {
    let two_pi = Real::two_pi();

    (0..=nsubdiv).map(move |i| {
        let theta = two_pi * (i as Real) / (nsubdiv as Real);
        (ComplexField::cos(theta), ComplexField::sin(theta))
    })
}

/// Pushes a seam-duplicated circle of `nsubdiv + 1` points to `out`.
///
/// The circle is centered at `center + (0, y, 0)`.
pub fn push_circle(
    center: &Point<Real>,
    radius: Real,
    y: Real,
    nsubdiv: u32,
    out: &mut Vec<Point<Real>>,
) {
    out.extend(seam_ring_directions(nsubdiv).map(|(cos, sin)| {
        Point::new(
            cos * radius + center.x,
            center.y + y,
            sin * radius + center.z,
        )
    }));
}

/// Pushes the `nsubdiv + 1` outward normals of a seam-duplicated circle to `out`.
pub fn push_radial_normals(nsubdiv: u32, out: &mut Vec<Vector<Real>>) {
    out.extend(seam_ring_directions(nsubdiv).map(|(cos, sin)| Vector::new(cos, 0.0, sin)));
}

/// Pushes `count` copies of `normal` to `out`.
pub fn push_constant_normals(normal: Vector<Real>, count: usize, out: &mut Vec<Vector<Real>>) {
    out.extend(core::iter::repeat(normal).take(count));
}

/// Pushes one seam-duplicated circle per polar angle of `phis`, lying on a sphere
/// of the given radius centered at `center + (0, y_offset, 0)`.
///
/// The normals pushed to `normals` are the unit vectors from the sphere center to
/// each point.
pub fn push_latitude_bands(
    center: &Point<Real>,
    radius: Real,
    y_offset: Real,
    phis: impl IntoIterator<Item = Real>,
    nsubdiv: u32,
    positions: &mut Vec<Point<Real>>,
    normals: &mut Vec<Vector<Real>>,
) {
    for phi in phis {
        let sin_phi = ComplexField::sin(phi);
        let cos_phi = ComplexField::cos(phi);
        let y = cos_phi * radius + center.y + y_offset;
        let ring_radius = sin_phi * radius;

        for (cos, sin) in seam_ring_directions(nsubdiv) {
            positions.push(Point::new(
                cos * ring_radius + center.x,
                y,
                sin * ring_radius + center.z,
            ));
            normals.push(Vector::new(cos * sin_phi, cos_phi, sin * sin_phi));
        }
    }
}

/// Pushes the two triangles of the grid cell whose upper-left vertex is `current`
/// and whose lower-left vertex is `next`.
///
/// The triangles are `(current, next, current + 1)` and `(current + 1, next, next + 1)`.
#[inline]
pub fn push_grid_cell_indices(current: u32, next: u32, out: &mut Vec<[u32; 3]>) {
    out.push([current, next, current + 1]);
    out.push([current + 1, next, next + 1]);
}

/// Pushes the triangles connecting `nbands + 1` consecutive seam-duplicated circles
/// of `nsubdiv + 1` vertices each, the first one starting at index `base`.
pub fn push_band_indices(base: u32, nbands: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    let stride = nsubdiv + 1;

    for band in 0..nbands {
        for i in 0..nsubdiv {
            let current = base + band * stride + i;
            push_grid_cell_indices(current, current + stride, out);
        }
    }
}

/// Pushes the triangles of the side of a tube whose lower seam-duplicated circle
/// starts at `base_lower_circle` and whose upper one starts at `base_upper_circle`.
///
/// Each segment `i` is split into `(l_i, l_i+1, u_i+1)` and `(l_i, u_i+1, u_i)`.
pub fn push_tube_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    for i in 0..nsubdiv {
        let bl = base_lower_circle + i;
        let br = bl + 1;
        let tl = base_upper_circle + i;
        let tr = tl + 1;

        out.push([bl, br, tr]);
        out.push([bl, tr, tl]);
    }
}

/// Pushes the fan of triangles `(center, i, i + 1)` joining `center` to the
/// seam-duplicated circle starting at `base_circle`.
pub fn push_fan_indices(center: u32, base_circle: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in base_circle..base_circle + nsubdiv {
        out.push([center, i, i + 1]);
    }
}

/// Pushes the two triangles `(base, base+1, base+2)` and `(base+2, base+3, base)` of
/// the quad made of the four consecutive vertices starting at `base`.
#[inline]
pub fn push_quad_indices(base: u32, out: &mut Vec<[u32; 3]>) {
    out.push([base, base + 1, base + 2]);
    out.push([base + 2, base + 3, base]);
}

/// Reverses the winding of the given triangles, keeping their first vertex in place.
pub fn reverse_clockwising(indices: &mut [[u32; 3]]) {
    indices.iter_mut().for_each(|idx| idx.swap(1, 2));
}
