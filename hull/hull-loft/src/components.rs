//! Procedural component placement.
//!
//! Turrets, superstructure, and funnels are generated as independent
//! geometry groups, positioned from normalized feature hints and sized
//! relative to the local hull width. Group names are deterministic
//! (`turret_0`, `superstructure`, `funnel_0`, ...) so downstream
//! consumers can select or hide them.

use hull_types::{Face, GroupGeometry, ProfileData, ShipDimensions};
use nalgebra::{Point3, Vector3};
use tracing::{debug, warn};

use crate::error::{LoftError, LoftResult};
use crate::params::ComponentParams;
use crate::ring::closed_cylinder;

/// Which kind of feature hint was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// A turret position hint.
    Turret,
    /// A funnel position hint.
    Funnel,
}

/// A feature hint that was skipped instead of aborting generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedHint {
    /// Hint kind.
    pub kind: HintKind,
    /// Index within the hint list.
    pub index: usize,
    /// The offending normalized position.
    pub position: f64,
    /// Human-readable reason.
    pub reason: String,
}

/// Output of component placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedComponents {
    /// One group per valid turret hint, named `turret_<i>`.
    pub turrets: Vec<GroupGeometry>,
    /// The superstructure block, named `superstructure`.
    pub superstructure: GroupGeometry,
    /// One group per valid funnel hint, named `funnel_<i>`.
    pub funnels: Vec<GroupGeometry>,
    /// Hints that were skipped, with reasons. Never fatal.
    pub skipped: Vec<SkippedHint>,
}

impl PlacedComponents {
    /// All groups in deterministic export order: turrets, then
    /// superstructure, then funnels.
    #[must_use]
    pub fn into_groups(self) -> Vec<GroupGeometry> {
        let mut groups = self.turrets;
        groups.push(self.superstructure);
        groups.extend(self.funnels);
        groups
    }
}

/// Place turret, superstructure, and funnel geometry on a hull.
///
/// Components rest on the deck plane at `y = draft`. A turret whose
/// station falls inside the superstructure span is raised to the
/// superstructure roof instead (superfiring placement).
///
/// Malformed per-feature hints (positions outside `[0, 1]`, NaN, or a
/// station with no hull under it) are skipped and recorded in
/// [`PlacedComponents::skipped`]; they never abort generation. Empty
/// hint lists are legitimate and produce a hull-only result.
///
/// # Errors
///
/// Returns [`LoftError::InvalidSpan`] if the superstructure span is
/// reversed, empty, or outside `[0, 1]` (caller-correctable
/// configuration, failed fast rather than silently corrected).
///
/// # Example
///
/// ```
/// use hull_loft::{place_components, ComponentParams};
/// use hull_types::{GeometryHints, ProfileData, ShipDimensions};
///
/// let dims = ShipDimensions::new(200.0, 30.0, 10.0).unwrap();
/// let hints = GeometryHints {
///     turret_positions: vec![0.25, 0.75],
///     ..GeometryHints::default()
/// };
///
/// let placed = place_components(
///     dims,
///     &ProfileData::flat(64),
///     &hints,
///     &ComponentParams::default(),
/// )
/// .unwrap();
///
/// assert_eq!(placed.turrets.len(), 2);
/// assert_eq!(placed.turrets[0].name, "turret_0");
/// assert!(placed.skipped.is_empty());
/// ```
pub fn place_components(
    dims: ShipDimensions,
    top_profile: &ProfileData,
    hints: &hull_types::GeometryHints,
    params: &ComponentParams,
) -> LoftResult<PlacedComponents> {
    let span = hints.superstructure;
    if !(span.start.is_finite()
        && span.end.is_finite()
        && 0.0 <= span.start
        && span.start < span.end
        && span.end <= 1.0)
    {
        return Err(LoftError::InvalidSpan {
            start: span.start,
            end: span.end,
        });
    }

    let deck = dims.draft;
    let roof = deck + dims.draft * params.superstructure.height_fraction;
    let mut skipped = Vec::new();

    let superstructure = superstructure_box(dims, span.start, span.end, params);

    let mut turrets = Vec::with_capacity(hints.turret_positions.len());
    for (index, &t) in hints.turret_positions.iter().enumerate() {
        if let Some(reason) = invalid_position(t) {
            warn!(index, position = t, reason, "skipping turret hint");
            skipped.push(SkippedHint {
                kind: HintKind::Turret,
                index,
                position: t,
                reason: reason.to_string(),
            });
            continue;
        }

        let local_half_width = top_profile.sample(t) * dims.beam / 2.0;
        let radius = local_half_width * params.turret.turret_radius;
        if radius < 1e-9 {
            warn!(index, position = t, "skipping turret hint: no hull width at station");
            skipped.push(SkippedHint {
                kind: HintKind::Turret,
                index,
                position: t,
                reason: "no hull width at station".to_string(),
            });
            continue;
        }

        // Superfiring: a turret inside the superstructure span sits on
        // the roof rather than the main deck.
        let base_y = if span.contains(t) { roof } else { deck };
        if base_y > deck {
            debug!(index, position = t, "superfiring turret raised to roof");
        }

        turrets.push(turret_group(index, t, radius, base_y, dims, params));
    }

    let mut funnels = Vec::with_capacity(hints.funnel_positions.len());
    for (index, &t) in hints.funnel_positions.iter().enumerate() {
        if let Some(reason) = invalid_position(t) {
            warn!(index, position = t, reason, "skipping funnel hint");
            skipped.push(SkippedHint {
                kind: HintKind::Funnel,
                index,
                position: t,
                reason: reason.to_string(),
            });
            continue;
        }

        let radius = dims.beam * params.funnel.radius;
        let height = dims.draft * params.funnel.height;
        let base = Point3::new(0.0, deck, t * dims.length);
        let top = Point3::new(0.0, deck + height, t * dims.length);
        let (vertices, faces) =
            closed_cylinder(base, top, Vector3::z(), Vector3::x(), radius, params.radial_segments);

        let mut group = GroupGeometry::new(format!("funnel_{index}"));
        group.vertices = vertices;
        group.faces = faces;
        funnels.push(group);
    }

    Ok(PlacedComponents {
        turrets,
        superstructure,
        funnels,
        skipped,
    })
}

fn invalid_position(t: f64) -> Option<&'static str> {
    if !t.is_finite() {
        Some("position is not finite")
    } else if !(0.0..=1.0).contains(&t) {
        Some("position outside [0, 1]")
    } else {
        None
    }
}

/// Axis-aligned superstructure block with quad faces, base at deck
/// level.
fn superstructure_box(
    dims: ShipDimensions,
    start: f64,
    end: f64,
    params: &ComponentParams,
) -> GroupGeometry {
    let half_w = dims.beam * params.superstructure.width_fraction / 2.0;
    let y0 = dims.draft;
    let y1 = y0 + dims.draft * params.superstructure.height_fraction;
    let z0 = start * dims.length;
    let z1 = end * dims.length;

    let mut group = GroupGeometry::with_capacity("superstructure", 8, 6);
    group.vertices.extend([
        Point3::new(-half_w, y0, z0), // 0
        Point3::new(half_w, y0, z0),  // 1
        Point3::new(half_w, y1, z0),  // 2
        Point3::new(-half_w, y1, z0), // 3
        Point3::new(-half_w, y0, z1), // 4
        Point3::new(half_w, y0, z1),  // 5
        Point3::new(half_w, y1, z1),  // 6
        Point3::new(-half_w, y1, z1), // 7
    ]);

    // CCW viewed from outside
    group.faces.extend([
        Face::Quad([0, 3, 2, 1]), // bow end (-Z)
        Face::Quad([4, 5, 6, 7]), // stern end (+Z)
        Face::Quad([0, 1, 5, 4]), // base (-Y)
        Face::Quad([3, 7, 6, 2]), // roof (+Y)
        Face::Quad([0, 4, 7, 3]), // port (-X)
        Face::Quad([1, 2, 6, 5]), // starboard (+X)
    ]);

    group
}

/// One turret: a vertical cylinder plus evenly spread barrels pointing
/// toward the bow.
fn turret_group(
    index: usize,
    t: f64,
    radius: f64,
    base_y: f64,
    dims: ShipDimensions,
    params: &ComponentParams,
) -> GroupGeometry {
    let height = dims.draft * params.turret.turret_height;
    let cz = t * dims.length;

    let base = Point3::new(0.0, base_y, cz);
    let top = Point3::new(0.0, base_y + height, cz);
    let (vertices, faces) =
        closed_cylinder(base, top, Vector3::z(), Vector3::x(), radius, params.radial_segments);

    let mut group = GroupGeometry::new(format!("turret_{index}"));
    group.vertices = vertices;
    group.faces = faces;

    let n_barrels = params.turret.barrels_per_turret;
    if n_barrels == 0 {
        return group;
    }

    let barrel_radius = radius * 0.15;
    let barrel_length = dims.length * params.turret.barrel_length;
    let barrel_y = base_y + height * 0.5;
    let spread = radius;

    for k in 0..n_barrels {
        #[allow(clippy::cast_precision_loss)]
        let offset_x = if n_barrels == 1 {
            0.0
        } else {
            -spread / 2.0 + spread * (k as f64) / (n_barrels as f64 - 1.0)
        };

        // Barrels advance toward the bow (-Z); y cross x gives -z.
        let muzzle = Point3::new(offset_x, barrel_y, cz - radius - barrel_length);
        let breech = Point3::new(offset_x, barrel_y, cz);
        let (vertices, faces) = closed_cylinder(
            breech,
            muzzle,
            Vector3::y(),
            Vector3::x(),
            barrel_radius,
            params.barrel_segments,
        );

        let mut barrel = GroupGeometry::new("barrel");
        barrel.vertices = vertices;
        barrel.faces = faces;
        group.merge(&barrel);
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_types::GeometryHints;

    fn dims() -> ShipDimensions {
        ShipDimensions::new(200.0, 30.0, 10.0).unwrap()
    }

    fn flat() -> ProfileData {
        ProfileData::flat(64)
    }

    #[test]
    fn turret_groups_center_near_their_stations() {
        let hints = GeometryHints {
            turret_positions: vec![0.25, 0.75],
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &flat(), &hints, &ComponentParams::default()).unwrap();

        assert_eq!(placed.turrets.len(), 2);
        let c0 = placed.turrets[0].bounds().center();
        let c1 = placed.turrets[1].bounds().center();
        // Barrels pull the bounds toward the bow; stay within half the
        // barrel assembly of the station
        assert!((c0.z - 50.0).abs() < 10.0, "turret_0 at z {}", c0.z);
        assert!((c1.z - 150.0).abs() < 10.0, "turret_1 at z {}", c1.z);
    }

    #[test]
    fn group_names_are_deterministic() {
        let hints = GeometryHints {
            turret_positions: vec![0.2, 0.8],
            funnel_positions: vec![0.5],
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &flat(), &hints, &ComponentParams::default()).unwrap();

        assert_eq!(placed.turrets[0].name, "turret_0");
        assert_eq!(placed.turrets[1].name, "turret_1");
        assert_eq!(placed.superstructure.name, "superstructure");
        assert_eq!(placed.funnels[0].name, "funnel_0");
    }

    #[test]
    fn deck_turret_rests_at_deck_level() {
        let hints = GeometryHints {
            turret_positions: vec![0.1], // outside the default [0.3, 0.6] span
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &flat(), &hints, &ComponentParams::default()).unwrap();

        let min_y = placed.turrets[0].bounds().min.y;
        assert!((min_y - 10.0).abs() < 1e-9, "base at y {min_y}");
    }

    #[test]
    fn superfiring_turret_sits_on_the_roof() {
        let hints = GeometryHints {
            turret_positions: vec![0.45], // inside the default [0.3, 0.6] span
            ..GeometryHints::default()
        };
        let params = ComponentParams::default();
        let placed = place_components(dims(), &flat(), &hints, &params).unwrap();

        // Roof = deck + draft * height_fraction = 10 + 8
        let min_y = placed.turrets[0].bounds().min.y;
        assert!((min_y - 18.0).abs() < 1e-9, "base at y {min_y}");
    }

    #[test]
    fn superstructure_spans_its_hint() {
        let placed = place_components(
            dims(),
            &flat(),
            &GeometryHints::default(),
            &ComponentParams::default(),
        )
        .unwrap();

        let bounds = placed.superstructure.bounds();
        assert!((bounds.min.z - 60.0).abs() < 1e-9);
        assert!((bounds.max.z - 120.0).abs() < 1e-9);
        assert!((bounds.min.y - 10.0).abs() < 1e-9);
        assert!((bounds.max.y - 18.0).abs() < 1e-9);
        // Width = beam * 0.3
        assert!((bounds.size().x - 9.0).abs() < 1e-9);
        assert_eq!(placed.superstructure.face_count(), 6);
    }

    #[test]
    fn malformed_hints_are_skipped_not_fatal() {
        let hints = GeometryHints {
            turret_positions: vec![0.25, 1.5, f64::NAN],
            funnel_positions: vec![-0.2, 0.5],
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &flat(), &hints, &ComponentParams::default()).unwrap();

        assert_eq!(placed.turrets.len(), 1);
        assert_eq!(placed.funnels.len(), 1);
        assert_eq!(placed.skipped.len(), 3);
        assert_eq!(placed.skipped[0].kind, HintKind::Turret);
        assert_eq!(placed.skipped[0].index, 1);
        assert_eq!(placed.skipped[2].kind, HintKind::Funnel);
    }

    #[test]
    fn turret_over_empty_hull_is_skipped() {
        // Plan profile with no width in the forward half
        let mut samples = vec![0.0; 32];
        samples[16..].fill(1.0);
        let top = ProfileData::from_normalized(&samples);

        let hints = GeometryHints {
            turret_positions: vec![0.1, 0.9],
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &top, &hints, &ComponentParams::default()).unwrap();

        assert_eq!(placed.turrets.len(), 1);
        assert_eq!(placed.skipped.len(), 1);
        assert_eq!(placed.skipped[0].position, 0.1);
    }

    #[test]
    fn empty_hint_lists_are_legitimate() {
        let placed = place_components(
            dims(),
            &flat(),
            &GeometryHints::default(),
            &ComponentParams::default(),
        )
        .unwrap();

        assert!(placed.turrets.is_empty());
        assert!(placed.funnels.is_empty());
        assert!(placed.skipped.is_empty());
        assert!(!placed.superstructure.is_empty());
    }

    #[test]
    fn reversed_span_fails_fast() {
        let hints = GeometryHints {
            superstructure: hull_types::SuperstructureSpan { start: 0.7, end: 0.2 },
            ..GeometryHints::default()
        };
        assert!(matches!(
            place_components(dims(), &flat(), &hints, &ComponentParams::default()),
            Err(LoftError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn barrels_point_toward_the_bow() {
        let hints = GeometryHints {
            turret_positions: vec![0.75],
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &flat(), &hints, &ComponentParams::default()).unwrap();

        // Barrel muzzles extend past the turret cylinder toward -Z
        let bounds = placed.turrets[0].bounds();
        let station_z = 150.0;
        let radius = 15.0 * 0.6;
        assert!(bounds.min.z < station_z - radius - 1.0);
        assert!(bounds.max.z <= station_z + radius + 1e-9);
    }

    #[test]
    fn into_groups_orders_deterministically() {
        let hints = GeometryHints {
            turret_positions: vec![0.2, 0.8],
            funnel_positions: vec![0.45],
            ..GeometryHints::default()
        };
        let placed =
            place_components(dims(), &flat(), &hints, &ComponentParams::default()).unwrap();
        let names: Vec<String> = placed.into_groups().into_iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec!["turret_0", "turret_1", "superstructure", "funnel_0"]
        );
    }
}
