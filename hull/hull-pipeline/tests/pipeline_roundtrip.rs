//! Full pipeline integration: images in, OBJ file out, re-parsed back.

use hull_obj::load_obj;
use hull_pipeline::{build_ship, PipelineConfig};
use hull_types::{GeometryHints, PixelBuffer, Rgb, ShipDimensions};

/// A warship-ish plan silhouette: pointed bow, full midbody, tapered
/// stern.
fn plan_view() -> PixelBuffer {
    let mut image = PixelBuffer::solid(200, 60, Rgb::WHITE).unwrap();
    // Midbody
    image.fill_rect(40, 15, 120, 30, Rgb::BLACK);
    // Bow taper
    image.fill_rect(10, 22, 30, 16, Rgb::BLACK);
    // Stern taper
    image.fill_rect(160, 20, 30, 20, Rgb::BLACK);
    image
}

fn side_view() -> PixelBuffer {
    let mut image = PixelBuffer::solid(200, 40, Rgb::WHITE).unwrap();
    image.fill_rect(10, 12, 180, 18, Rgb::BLACK);
    image
}

fn hints() -> GeometryHints {
    GeometryHints {
        turret_positions: vec![0.2, 0.45, 0.85],
        funnel_positions: vec![0.55],
        ..GeometryHints::default()
    }
}

#[test]
fn images_to_obj_file_and_back() {
    let dims = ShipDimensions::new(180.0, 25.0, 9.0).unwrap();
    let model = build_ship(
        &plan_view(),
        &side_view(),
        dims,
        Some(&hints()),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert!(model.issues.is_empty(), "issues: {:?}", model.issues);
    assert_eq!(model.stats.group_names[0], "hull");
    assert!(model
        .stats
        .group_names
        .contains(&"superstructure".to_string()));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warship.obj");
    model.save(&path).unwrap();

    // Re-parsing the file recovers the same groups and counts
    let reparsed = load_obj(&path).unwrap();
    assert_eq!(reparsed.len(), model.groups.len());

    let vertex_total: usize = reparsed.iter().map(hull_types::GroupGeometry::vertex_count).sum();
    let face_total: usize = reparsed.iter().map(hull_types::GroupGeometry::face_count).sum();
    assert_eq!(vertex_total, model.stats.vertex_count);
    assert_eq!(face_total, model.stats.face_count);

    for (original, parsed) in model.groups.iter().zip(&reparsed) {
        assert_eq!(original.name, parsed.name);
        assert_eq!(original.faces, parsed.faces);
    }
}

#[test]
fn whole_model_stays_inside_declared_footprint() {
    let dims = ShipDimensions::new(180.0, 25.0, 9.0).unwrap();
    let model = build_ship(
        &plan_view(),
        &side_view(),
        dims,
        Some(&hints()),
        &PipelineConfig::default(),
    )
    .unwrap();

    let bounds = &model.stats.bounds;
    // Hull spans the full length; barrels on the forward turret may
    // poke past the bow
    assert!(bounds.min.z >= -dims.length * 0.1);
    assert!(bounds.max.z <= dims.length * 1.01);
    // Nothing wider than the beam
    assert!(bounds.size().x <= dims.beam * 1.01);
    // Components sit above the hull, below roof + funnel height
    assert!(bounds.max.y <= dims.draft * 3.0);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dims = ShipDimensions::new(180.0, 25.0, 9.0).unwrap();
    let config = PipelineConfig::default();

    let a = build_ship(&plan_view(), &side_view(), dims, Some(&hints()), &config).unwrap();
    let b = build_ship(&plan_view(), &side_view(), dims, Some(&hints()), &config).unwrap();

    assert_eq!(a.obj_text, b.obj_text);
}
