//! Ring construction, stitching, and caps.
//!
//! Shared by the hull lofter and the component cylinders. A ring is a
//! closed loop of `segments + 1` vertices; the first and last coincide
//! in position but are distinct indices (seam, kept for UV handling).

use hull_types::Face;
use nalgebra::{Point3, Vector3};

/// Radii below this collapse a ring to its center point.
pub(crate) const COLLAPSE_EPSILON: f64 = 1e-9;

/// Generate one closed ring of `segments + 1` vertices.
///
/// The ring lies in the plane spanned by `u` and `v` around `center`:
/// `center + u * ru * cos(theta) + v * rv * sin(theta)` for
/// `theta` over `[-pi, pi]`. With `w = u x v` as the advance direction
/// of successive rings, stitching and caps below produce outward
/// normals.
///
/// Degenerate radii (both below [`COLLAPSE_EPSILON`]) collapse every
/// vertex onto `center`, avoiding NaN and zero-area faces downstream.
pub(crate) fn ring_points(
    center: Point3<f64>,
    u: Vector3<f64>,
    v: Vector3<f64>,
    ru: f64,
    rv: f64,
    segments: usize,
) -> Vec<Point3<f64>> {
    if is_collapsed(ru, rv) {
        return vec![center; segments + 1];
    }

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        #[allow(clippy::cast_precision_loss)]
        let theta = -std::f64::consts::PI
            + 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
        let offset = u * (ru * theta.cos()) + v * (rv * theta.sin());
        points.push(center + offset);
    }
    points
}

/// Whether a ring with these radii collapses to a point.
pub(crate) fn is_collapsed(ru: f64, rv: f64) -> bool {
    ru.abs() < COLLAPSE_EPSILON && rv.abs() < COLLAPSE_EPSILON
}

/// Stitch two adjacent rings with quads, emitted as two triangles.
///
/// Ring `a` starts at index `a_start`, ring `b` (one step along the
/// advance direction) at `b_start`. A collapsed ring degrades each
/// quad to the single non-degenerate triangle; two collapsed rings
/// emit nothing.
pub(crate) fn stitch_rings(
    faces: &mut Vec<Face>,
    a_start: u32,
    b_start: u32,
    segments: usize,
    a_collapsed: bool,
    b_collapsed: bool,
) {
    if a_collapsed && b_collapsed {
        return;
    }

    for i in 0..segments as u32 {
        let a0 = a_start + i;
        let a1 = a_start + i + 1;
        let b0 = b_start + i;
        let b1 = b_start + i + 1;

        if !a_collapsed {
            faces.push(Face::Tri([a0, a1, b0]));
        }
        if !b_collapsed {
            faces.push(Face::Tri([a1, b1, b0]));
        }
    }
}

/// Close a ring with a triangle fan over its own vertices.
///
/// The fan apex is the ring's first vertex; no extra apex vertex is
/// added. `invert` winds the cap to face against the advance direction
/// (the start cap of a tube).
pub(crate) fn fan_cap(faces: &mut Vec<Face>, ring_start: u32, segments: usize, invert: bool) {
    for i in 1..(segments as u32).saturating_sub(1) {
        if invert {
            faces.push(Face::Tri([ring_start, ring_start + i + 1, ring_start + i]));
        } else {
            faces.push(Face::Tri([ring_start, ring_start + i, ring_start + i + 1]));
        }
    }
}

/// A closed, capped circular cylinder between two ring centers.
///
/// `base` and `top` are the two end centers; the advance direction is
/// `top - base`. `u` and `v` must span the ring plane with
/// `u x v` pointing from base to top.
pub(crate) fn closed_cylinder(
    base: Point3<f64>,
    top: Point3<f64>,
    u: Vector3<f64>,
    v: Vector3<f64>,
    radius: f64,
    segments: usize,
) -> (Vec<Point3<f64>>, Vec<Face>) {
    let mut vertices = ring_points(base, u, v, radius, radius, segments);
    vertices.extend(ring_points(top, u, v, radius, radius, segments));

    let ring_len = (segments + 1) as u32;
    let mut faces = Vec::with_capacity(2 * segments + 2 * (segments - 2));
    stitch_rings(&mut faces, 0, ring_len, segments, false, false);
    fan_cap(&mut faces, 0, segments, true);
    fan_cap(&mut faces, ring_len, segments, false);

    (vertices, faces)
}
