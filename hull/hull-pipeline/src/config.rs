//! Pipeline configuration.

use hull_loft::{ComponentParams, LoftParams};
use hull_profile::{BackgroundMode, ExtractParams, SmoothingMethod};

use crate::error::{PipelineError, PipelineResult};

/// Optional profile smoothing stage.
#[derive(Debug, Clone, Copy)]
pub struct SmoothingConfig {
    /// Smoothing kernel.
    pub method: SmoothingMethod,
    /// Window width in samples. A window of 1 or less is an identity
    /// pass; the median kernel additionally requires an odd window.
    pub window: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            method: SmoothingMethod::Gaussian,
            window: 5,
        }
    }
}

/// Full configuration for one [`crate::build_ship`] run.
///
/// Every stage has a workable default; callers override only what they
/// need.
///
/// # Example
///
/// ```
/// use hull_pipeline::PipelineConfig;
/// use hull_profile::BackgroundMode;
///
/// let config = PipelineConfig::default().with_background(BackgroundMode::Edges);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Background estimation strategy, applied to both views.
    pub background: BackgroundMode,
    /// Content thresholding and speck rejection.
    pub extract: ExtractParams,
    /// Profile smoothing; `None` disables the stage.
    pub smoothing: Option<SmoothingConfig>,
    /// Hull lofting resolution and cross-section shape.
    pub loft: LoftParams,
    /// Turret, superstructure, and funnel sizing.
    pub components: ComponentParams,
    /// Name emitted on the OBJ `o` line and header comment.
    pub object_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            background: BackgroundMode::Auto,
            extract: ExtractParams::default(),
            smoothing: Some(SmoothingConfig::default()),
            loft: LoftParams::default(),
            components: ComponentParams::default(),
            object_name: "ship".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Set the background estimation strategy.
    #[must_use]
    pub fn with_background(mut self, mode: BackgroundMode) -> Self {
        self.background = mode;
        self
    }

    /// Set the smoothing stage.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: Option<SmoothingConfig>) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the loft parameters.
    #[must_use]
    pub fn with_loft(mut self, loft: LoftParams) -> Self {
        self.loft = loft;
        self
    }

    /// Set the OBJ object name.
    #[must_use]
    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    /// Check the configuration before running the pipeline.
    ///
    /// Catches mistakes the later stages would only reject mid-run:
    /// an even median window, non-finite sizing fractions, degenerate
    /// cylinder resolutions, and an empty object name.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] describing the first
    /// problem found.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.object_name.trim().is_empty() {
            return Err(PipelineError::config("object name is empty"));
        }

        if let Some(smoothing) = &self.smoothing {
            if smoothing.method == SmoothingMethod::Median
                && smoothing.window > 1
                && smoothing.window % 2 == 0
            {
                return Err(PipelineError::config(format!(
                    "median smoothing requires an odd window, got {}",
                    smoothing.window
                )));
            }
        }

        if self.components.radial_segments < 3 {
            return Err(PipelineError::config(format!(
                "component cylinders need at least 3 radial segments, got {}",
                self.components.radial_segments
            )));
        }
        if self.components.barrel_segments < 3 {
            return Err(PipelineError::config(format!(
                "barrels need at least 3 radial segments, got {}",
                self.components.barrel_segments
            )));
        }

        let fractions = [
            ("turret barrel_length", self.components.turret.barrel_length),
            ("turret height", self.components.turret.turret_height),
            ("turret radius", self.components.turret.turret_radius),
            (
                "superstructure width_fraction",
                self.components.superstructure.width_fraction,
            ),
            (
                "superstructure height_fraction",
                self.components.superstructure.height_fraction,
            ),
            ("funnel radius", self.components.funnel.radius),
            ("funnel height", self.components.funnel.height),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value < 0.0 {
                return Err(PipelineError::config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}
