//! Parameters for lofting and component placement.

/// Cross-section shape used by the lofter.
///
/// An explicit configuration choice, not a property inferred from the
/// input. `Ellipse` is the only implemented shape; the enum is the
/// extension point for future shapes (hard-chine, rectangular barge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossSection {
    /// Ellipse with half-beam and half-draft radii.
    #[default]
    Ellipse,
}

/// Parameters for hull lofting.
///
/// # Example
///
/// ```
/// use hull_loft::LoftParams;
///
/// let params = LoftParams::default();
/// assert_eq!(params.length_segments, 24);
/// assert_eq!(params.radial_segments, 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoftParams {
    /// Number of segments along the ship's length. The hull has
    /// `length_segments + 1` cross-section rings.
    pub length_segments: usize,
    /// Number of segments around each cross-section ring. Each ring
    /// has `radial_segments + 1` vertices (the seam vertex is
    /// duplicated).
    pub radial_segments: usize,
    /// Cross-section shape.
    pub shape: CrossSection,
}

impl Default for LoftParams {
    fn default() -> Self {
        Self {
            length_segments: 24,
            radial_segments: 8,
            shape: CrossSection::Ellipse,
        }
    }
}

impl LoftParams {
    /// Set the number of length segments.
    #[must_use]
    pub const fn with_length_segments(mut self, segments: usize) -> Self {
        self.length_segments = segments;
        self
    }

    /// Set the number of radial segments.
    #[must_use]
    pub const fn with_radial_segments(mut self, segments: usize) -> Self {
        self.radial_segments = segments;
        self
    }
}

/// Turret sizing parameters.
///
/// Turret radius scales from the local hull half-width at the turret's
/// station; height scales from draft. Both are deliberate v1
/// simplifications, kept configurable rather than inferred.
#[derive(Debug, Clone, Copy)]
pub struct TurretParams {
    /// Barrels per turret.
    pub barrels_per_turret: usize,
    /// Barrel length as a fraction of ship length.
    pub barrel_length: f64,
    /// Turret height as a fraction of draft.
    pub turret_height: f64,
    /// Turret radius as a fraction of the local hull half-width.
    pub turret_radius: f64,
}

impl Default for TurretParams {
    fn default() -> Self {
        Self {
            barrels_per_turret: 2,
            barrel_length: 0.04,
            turret_height: 0.25,
            turret_radius: 0.6,
        }
    }
}

/// Superstructure sizing parameters.
#[derive(Debug, Clone, Copy)]
pub struct SuperstructureParams {
    /// Block width as a fraction of beam.
    pub width_fraction: f64,
    /// Block height as a fraction of draft.
    pub height_fraction: f64,
}

impl Default for SuperstructureParams {
    fn default() -> Self {
        Self {
            width_fraction: 0.3,
            height_fraction: 0.8,
        }
    }
}

/// Funnel sizing parameters.
#[derive(Debug, Clone, Copy)]
pub struct FunnelParams {
    /// Funnel radius as a fraction of beam.
    pub radius: f64,
    /// Funnel height as a fraction of draft.
    pub height: f64,
}

impl Default for FunnelParams {
    fn default() -> Self {
        Self {
            radius: 0.08,
            height: 1.2,
        }
    }
}

/// Combined component placement parameters.
#[derive(Debug, Clone, Copy)]
pub struct ComponentParams {
    /// Turret sizing.
    pub turret: TurretParams,
    /// Superstructure sizing.
    pub superstructure: SuperstructureParams,
    /// Funnel sizing.
    pub funnel: FunnelParams,
    /// Radial segments for turret and funnel cylinders.
    pub radial_segments: usize,
    /// Radial segments for barrel cylinders.
    pub barrel_segments: usize,
}

impl Default for ComponentParams {
    fn default() -> Self {
        Self {
            turret: TurretParams::default(),
            superstructure: SuperstructureParams::default(),
            funnel: FunnelParams::default(),
            radial_segments: 12,
            barrel_segments: 6,
        }
    }
}
