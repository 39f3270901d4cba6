//! The end-to-end generation pipeline.

use hull_loft::{loft_hull, place_components, HintKind};
use hull_obj::{export_obj, ObjError, ObjMetadata};
use hull_profile::{detect_background, extract_profile, smooth_curve};
use hull_types::{
    GeometryHints, GroupGeometry, MeshStats, PixelBuffer, ProfileData, ShipDimensions,
};
use std::path::Path;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;

/// Background confidence below which a view is flagged.
const LOW_CONFIDENCE: f64 = 0.5;

/// Which input view an [`Issue`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Top-down plan view (beam distribution).
    Plan,
    /// Side elevation view (draft distribution).
    Side,
}

/// A non-fatal problem observed during generation.
///
/// Issues never abort the run; the caller decides whether a flagged
/// model is still usable.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// The background estimate for a view had low confidence; the
    /// extracted silhouette may be unreliable.
    LowBackgroundConfidence {
        /// Affected view.
        view: ViewKind,
        /// The estimate's confidence in `[0, 1]`.
        confidence: f64,
    },
    /// A view contained no content above the threshold; its profile is
    /// all zeros and the hull collapses along that axis.
    DegenerateProfile {
        /// Affected view.
        view: ViewKind,
    },
    /// A turret or funnel hint was skipped.
    SkippedHint {
        /// Hint kind.
        kind: HintKind,
        /// Index within the hint list.
        index: usize,
        /// The offending normalized position.
        position: f64,
        /// Why the hint was skipped.
        reason: String,
    },
}

/// A generated ship model.
#[derive(Debug, Clone)]
pub struct ShipModel {
    /// All geometry groups in export order: hull first, then turrets,
    /// superstructure, funnels.
    pub groups: Vec<GroupGeometry>,
    /// The assembled OBJ document.
    pub obj_text: String,
    /// Mesh summary.
    pub stats: MeshStats,
    /// Non-fatal problems observed during generation.
    pub issues: Vec<Issue>,
}

impl ShipModel {
    /// Write the OBJ document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PipelineResult<()> {
        std::fs::write(path, &self.obj_text).map_err(ObjError::from)?;
        Ok(())
    }
}

/// Generate a ship model from a pair of orthographic images.
///
/// Stages run in a fixed order: background detection and profile
/// extraction per view, optional smoothing, hull lofting, component
/// placement (when `hints` is given), OBJ assembly. The whole run is
/// deterministic; identical inputs produce byte-identical OBJ text.
///
/// `plan_view` is read as the beam distribution and `side_view` as the
/// draft distribution. Passing `None` for `hints` produces a bare hull.
///
/// # Errors
///
/// Returns an error for invalid configuration, bad ship dimensions, a
/// reversed superstructure span, or degenerate loft resolution.
/// Content-free views and malformed per-feature hints are reported via
/// [`ShipModel::issues`] instead.
///
/// # Example
///
/// ```
/// use hull_pipeline::{build_ship, PipelineConfig};
/// use hull_types::{PixelBuffer, Rgb, ShipDimensions};
///
/// let mut plan = PixelBuffer::solid(100, 40, Rgb::WHITE).unwrap();
/// plan.fill_rect(5, 10, 90, 20, Rgb::BLACK);
/// let mut side = PixelBuffer::solid(100, 30, Rgb::WHITE).unwrap();
/// side.fill_rect(5, 8, 90, 14, Rgb::BLACK);
///
/// let dims = ShipDimensions::new(200.0, 30.0, 10.0).unwrap();
/// let model = build_ship(&plan, &side, dims, None, &PipelineConfig::default()).unwrap();
///
/// assert_eq!(model.groups[0].name, "hull");
/// assert!(model.obj_text.contains("o ship"));
/// ```
pub fn build_ship(
    plan_view: &PixelBuffer,
    side_view: &PixelBuffer,
    dims: ShipDimensions,
    hints: Option<&GeometryHints>,
    config: &PipelineConfig,
) -> PipelineResult<ShipModel> {
    config.validate()?;
    let mut issues = Vec::new();

    let top = view_profile(plan_view, ViewKind::Plan, config, &mut issues)?;
    let side = view_profile(side_view, ViewKind::Side, config, &mut issues)?;

    let hull = loft_hull(&top, &side, dims, &config.loft)?;
    info!(
        vertices = hull.vertex_count(),
        faces = hull.face_count(),
        "hull lofted"
    );

    let mut groups = vec![hull];
    if let Some(hints) = hints {
        let placed = place_components(dims, &top, hints, &config.components)?;
        for skipped in &placed.skipped {
            issues.push(Issue::SkippedHint {
                kind: skipped.kind,
                index: skipped.index,
                position: skipped.position,
                reason: skipped.reason.clone(),
            });
        }
        groups.extend(placed.into_groups());
    }

    let metadata = ObjMetadata {
        object_name: config.object_name.clone(),
        comments: vec![format!(
            "length {:.1} beam {:.1} draft {:.1}",
            dims.length, dims.beam, dims.draft
        )],
    };
    let export = export_obj(&groups, &metadata);
    info!(
        vertices = export.stats.vertex_count,
        faces = export.stats.face_count,
        groups = export.stats.group_names.len(),
        issues = issues.len(),
        "model assembled"
    );

    Ok(ShipModel {
        groups,
        obj_text: export.text,
        stats: export.stats,
        issues,
    })
}

/// Run one view through background detection, extraction, and optional
/// smoothing.
fn view_profile(
    image: &PixelBuffer,
    view: ViewKind,
    config: &PipelineConfig,
    issues: &mut Vec<Issue>,
) -> PipelineResult<ProfileData> {
    let background = detect_background(image, config.background);
    if background.confidence < LOW_CONFIDENCE {
        warn!(
            ?view,
            confidence = background.confidence,
            "low background confidence"
        );
        issues.push(Issue::LowBackgroundConfidence {
            view,
            confidence: background.confidence,
        });
    }

    let profile = extract_profile(image, background.color, &config.extract);
    if profile.bounds().peak_value == 0.0 {
        warn!(?view, "no content found in view");
        issues.push(Issue::DegenerateProfile { view });
    }

    let profile = match &config.smoothing {
        Some(smoothing) => {
            let smoothed = smooth_curve(profile.curve(), smoothing.method, smoothing.window)?;
            // Re-normalize so the peak stays at 1 after smoothing
            ProfileData::from_raw_heights(&smoothed)
        }
        None => profile,
    };

    Ok(profile)
}
