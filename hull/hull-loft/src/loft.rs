//! Hull lofting from a pair of profile curves.

use hull_types::{GroupGeometry, ProfileData, ShipDimensions};
use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{LoftError, LoftResult};
use crate::params::LoftParams;
use crate::ring::{fan_cap, is_collapsed, ring_points, stitch_rings};

/// Loft a hull mesh from a plan-view and a side-view profile.
///
/// For `length_segments + 1` evenly spaced stations `t` along the
/// ship's length, both profiles are sampled at `t`; the local
/// half-beam is `top(t) * beam / 2` and the local half-draft is
/// `side(t) * draft / 2`. Each station becomes an elliptical
/// cross-section ring of `radial_segments + 1` vertices (seam vertex
/// duplicated), adjacent rings stitch into quads emitted as two
/// triangles, and the bow and stern rings close with triangle fans
/// over their own vertices.
///
/// The result is watertight: every interior edge is shared by exactly
/// two faces; only fan edges at the caps are shared by more. Stations
/// where both radii vanish collapse to a point instead of emitting
/// degenerate faces.
///
/// # Errors
///
/// Returns an error if:
/// - Either profile is empty
/// - `radial_segments < 3` or `length_segments < 1`
/// - Any dimension is not positive and finite
///
/// # Example
///
/// ```
/// use hull_loft::{loft_hull, LoftParams};
/// use hull_types::{ProfileData, ShipDimensions};
///
/// let dims = ShipDimensions::new(200.0, 30.0, 10.0).unwrap();
/// let hull = loft_hull(
///     &ProfileData::flat(32),
///     &ProfileData::flat(32),
///     dims,
///     &LoftParams::default(),
/// )
/// .unwrap();
///
/// let size = hull.bounds().size();
/// assert!((size.x - 30.0).abs() < 0.3);
/// assert!((size.y - 10.0).abs() < 0.1);
/// assert!((size.z - 200.0).abs() < 1e-9);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
// Segment counts are small; index arithmetic stays far below u32::MAX
pub fn loft_hull(
    top: &ProfileData,
    side: &ProfileData,
    dims: ShipDimensions,
    params: &LoftParams,
) -> LoftResult<GroupGeometry> {
    if top.resolution() == 0 || side.resolution() == 0 {
        return Err(LoftError::EmptyProfile);
    }
    if params.radial_segments < 3 {
        return Err(LoftError::TooFewRadialSegments {
            min: 3,
            actual: params.radial_segments,
        });
    }
    if params.length_segments < 1 {
        return Err(LoftError::TooFewLengthSegments {
            min: 1,
            actual: params.length_segments,
        });
    }
    validate_dims(dims)?;

    let n_rings = params.length_segments + 1;
    let ring_len = (params.radial_segments + 1) as u32;

    let mut hull = GroupGeometry::with_capacity(
        "hull",
        n_rings * (params.radial_segments + 1),
        params.length_segments * params.radial_segments * 2 + 2 * (params.radial_segments - 2),
    );

    let mut collapsed = Vec::with_capacity(n_rings);
    let mut collapsed_rings = 0usize;

    for station in 0..n_rings {
        let t = station as f64 / params.length_segments as f64;
        let half_beam = top.sample(t) * dims.beam / 2.0;
        let half_draft = side.sample(t) * dims.draft / 2.0;
        let center = Point3::new(0.0, 0.0, t * dims.length);

        // CrossSection::Ellipse is the only shape; the match is the
        // extension point for future sections.
        let ring = match params.shape {
            crate::params::CrossSection::Ellipse => ring_points(
                center,
                Vector3::x(),
                Vector3::y(),
                half_beam,
                half_draft,
                params.radial_segments,
            ),
        };
        hull.vertices.extend(ring);

        let degenerate = is_collapsed(half_beam, half_draft);
        if degenerate {
            collapsed_rings += 1;
        }
        collapsed.push(degenerate);
    }

    for station in 0..params.length_segments {
        stitch_rings(
            &mut hull.faces,
            station as u32 * ring_len,
            (station as u32 + 1) * ring_len,
            params.radial_segments,
            collapsed[station],
            collapsed[station + 1],
        );
    }

    // Bow and stern caps; a fully collapsed end ring is already a point
    // and needs none.
    if !collapsed[0] {
        fan_cap(&mut hull.faces, 0, params.radial_segments, true);
    }
    if !collapsed[n_rings - 1] {
        fan_cap(
            &mut hull.faces,
            (n_rings as u32 - 1) * ring_len,
            params.radial_segments,
            false,
        );
    }

    if collapsed_rings > 0 {
        debug!(
            collapsed_rings,
            total_rings = n_rings,
            "collapsed degenerate cross-sections to points"
        );
    }

    Ok(hull)
}

fn validate_dims(dims: ShipDimensions) -> LoftResult<()> {
    for (name, value) in [
        ("length", dims.length),
        ("beam", dims.beam),
        ("draft", dims.draft),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(LoftError::InvalidDimension { name, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hull_types::Face;
    use std::collections::HashMap;

    fn dims() -> ShipDimensions {
        ShipDimensions::new(200.0, 30.0, 10.0).unwrap()
    }

    /// Quantize a vertex so seam-duplicate indices collapse to one
    /// positional key.
    fn position_key(p: &Point3<f64>) -> (i64, i64, i64) {
        let q = 1e7;
        #[allow(clippy::cast_possible_truncation)]
        (
            (p.x * q).round() as i64,
            (p.y * q).round() as i64,
            (p.z * q).round() as i64,
        )
    }

    /// Count undirected positional edges across all faces.
    fn edge_counts(hull: &GroupGeometry) -> HashMap<((i64, i64, i64), (i64, i64, i64)), usize> {
        let mut counts = HashMap::new();
        for face in &hull.faces {
            let idx = face.indices();
            for i in 0..idx.len() {
                let a = position_key(&hull.vertices[idx[i] as usize]);
                let b = position_key(&hull.vertices[idx[(i + 1) % idx.len()] as usize]);
                if a == b {
                    continue; // seam-degenerate edge of a cap fan
                }
                let key = if a < b { (a, b) } else { (b, a) };
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn flat_profile_vertex_count() {
        // 25 rings x 9 vertices, no extra cap apex vertices
        let hull = loft_hull(
            &ProfileData::flat(64),
            &ProfileData::flat(64),
            dims(),
            &LoftParams::default(),
        )
        .unwrap();
        assert_eq!(hull.vertex_count(), 225);
        // 24 x 8 quads as two triangles, plus two 6-triangle fans
        assert_eq!(hull.face_count(), 24 * 8 * 2 + 2 * 6);
    }

    #[test]
    fn flat_profile_bounds_match_dimensions() {
        let hull = loft_hull(
            &ProfileData::flat(64),
            &ProfileData::flat(64),
            dims(),
            &LoftParams::default(),
        )
        .unwrap();

        let size = hull.bounds().size();
        assert!((size.x - 30.0).abs() / 30.0 < 0.01, "beam {}", size.x);
        assert!((size.y - 10.0).abs() / 10.0 < 0.01, "draft {}", size.y);
        assert!((size.z - 200.0).abs() / 200.0 < 0.01, "length {}", size.z);
    }

    #[test]
    fn doubling_dimensions_doubles_bounds() {
        let top = ProfileData::from_normalized(
            &(0..64)
                .map(|i| (std::f64::consts::PI * f64::from(i) / 63.0).sin())
                .collect::<Vec<_>>(),
        );
        let side = ProfileData::flat(64);

        let small = loft_hull(&top, &side, dims(), &LoftParams::default()).unwrap();
        let big = loft_hull(
            &top,
            &side,
            ShipDimensions::new(400.0, 60.0, 20.0).unwrap(),
            &LoftParams::default(),
        )
        .unwrap();

        let s = small.bounds().size();
        let b = big.bounds().size();
        assert_relative_eq!(b.x, 2.0 * s.x, epsilon = 1e-9);
        assert_relative_eq!(b.y, 2.0 * s.y, epsilon = 1e-9);
        assert_relative_eq!(b.z, 2.0 * s.z, epsilon = 1e-9);
    }

    #[test]
    fn hull_is_watertight() {
        let top = ProfileData::from_normalized(
            &(0..64)
                .map(|i| 0.2 + 0.8 * (std::f64::consts::PI * f64::from(i) / 63.0).sin())
                .collect::<Vec<_>>(),
        );
        let hull = loft_hull(&top, &ProfileData::flat(64), dims(), &LoftParams::default())
            .unwrap();

        for (edge, count) in edge_counts(&hull) {
            assert_eq!(count, 2, "edge {edge:?} shared by {count} faces");
        }
    }

    #[test]
    fn no_vertex_is_nan() {
        let hull = loft_hull(
            &ProfileData::from_raw_heights(&[0.0, 0.0, 0.0]),
            &ProfileData::flat(3),
            dims(),
            &LoftParams::default(),
        )
        .unwrap();
        assert!(hull
            .vertices
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
    }

    #[test]
    fn zero_profiles_collapse_to_faceless_spine() {
        // All-background images produce all-zero curves; the hull
        // degrades to a well-formed minimal result, not an error.
        let zero = ProfileData::from_raw_heights(&[0.0; 16]);
        let hull = loft_hull(&zero, &zero, dims(), &LoftParams::default()).unwrap();
        assert_eq!(hull.vertex_count(), 225);
        assert_eq!(hull.face_count(), 0);
    }

    #[test]
    fn pointed_bow_still_watertight() {
        // Bow station at zero width: the first ring collapses and the
        // stitch degrades to a triangle fan around the point.
        let mut samples = vec![1.0; 25];
        samples[0] = 0.0;
        let top = ProfileData::from_normalized(&samples);
        let side = ProfileData::from_normalized(&samples);

        let hull = loft_hull(&top, &side, dims(), &LoftParams::default()).unwrap();
        for (edge, count) in edge_counts(&hull) {
            assert_eq!(count, 2, "edge {edge:?} shared by {count} faces");
        }

        // No zero-area faces from the collapsed ring
        for face in &hull.faces {
            if let Face::Tri([a, b, c]) = face {
                let pa = hull.vertices[*a as usize];
                let pb = hull.vertices[*b as usize];
                let pc = hull.vertices[*c as usize];
                let area = (pb - pa).cross(&(pc - pa)).norm() * 0.5;
                assert!(area > 1e-9, "zero-area face in output");
            }
        }
    }

    #[test]
    fn rejects_bad_segment_counts() {
        let flat = ProfileData::flat(8);
        assert!(matches!(
            loft_hull(
                &flat,
                &flat,
                dims(),
                &LoftParams::default().with_radial_segments(2)
            ),
            Err(LoftError::TooFewRadialSegments { .. })
        ));
        assert!(matches!(
            loft_hull(
                &flat,
                &flat,
                dims(),
                &LoftParams::default().with_length_segments(0)
            ),
            Err(LoftError::TooFewLengthSegments { .. })
        ));
    }

    #[test]
    fn rejects_empty_profile() {
        let flat = ProfileData::flat(8);
        let empty = ProfileData::from_raw_heights(&[]);
        assert!(matches!(
            loft_hull(&empty, &flat, dims(), &LoftParams::default()),
            Err(LoftError::EmptyProfile)
        ));
    }

    #[test]
    fn lofting_is_deterministic() {
        let top = ProfileData::from_normalized(
            &(0..48)
                .map(|i| 0.3 + 0.7 * (std::f64::consts::PI * f64::from(i) / 47.0).sin())
                .collect::<Vec<_>>(),
        );
        let a = loft_hull(&top, &top, dims(), &LoftParams::default()).unwrap();
        let b = loft_hull(&top, &top, dims(), &LoftParams::default()).unwrap();
        assert_eq!(a, b);
    }
}
