//! Column-wise profile extraction.

use hull_types::{PixelBuffer, ProfileData, Rgb};
use tracing::debug;

/// Parameters for profile extraction.
///
/// # Example
///
/// ```
/// use hull_profile::ExtractParams;
///
/// let params = ExtractParams::default();
/// assert_eq!(params.threshold, 40);
/// assert_eq!(params.min_feature_size, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExtractParams {
    /// Euclidean RGB distance from the background above which a pixel
    /// counts as content (0-255 per-channel scale).
    pub threshold: u8,

    /// Columns whose raw extent is smaller than this many pixels are
    /// treated as noise and zeroed.
    pub min_feature_size: usize,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            threshold: 40,
            min_feature_size: 2,
        }
    }
}

impl ExtractParams {
    /// Set the content threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the minimum feature size.
    #[must_use]
    pub const fn with_min_feature_size(mut self, size: usize) -> Self {
        self.min_feature_size = size;
        self
    }
}

/// Extract a normalized extent curve from an orthographic image.
///
/// For each column, rows are scanned top to bottom; the raw extent is
/// `bottom - top + 1` over the content pixels found (0 if none). After
/// all columns are scanned, extents are normalized by the global peak.
///
/// Whether the result reads as a beam distribution (plan view) or a
/// draft distribution (side view) is the caller's labeling contract.
///
/// An all-background image yields an all-zero curve with a zero
/// `peak_value`; that is a well-formed degenerate result, not an error.
///
/// # Example
///
/// ```
/// use hull_profile::{extract_profile, ExtractParams};
/// use hull_types::{PixelBuffer, Rgb};
///
/// let mut image = PixelBuffer::solid(100, 50, Rgb::WHITE).unwrap();
/// image.fill_rect(10, 10, 80, 30, Rgb::BLACK);
///
/// let profile = extract_profile(&image, Rgb::WHITE, &ExtractParams::default());
/// assert_eq!(profile.resolution(), 100);
/// assert!(profile.curve()[9] < 1e-9);
/// assert!((profile.curve()[10] - 1.0).abs() < 1e-9);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
// Precision loss: row counts are far below 2^52
pub fn extract_profile(
    buffer: &PixelBuffer,
    background: Rgb,
    params: &ExtractParams,
) -> ProfileData {
    let width = buffer.width();
    let height = buffer.height();
    let threshold = f64::from(params.threshold);

    let mut heights = vec![0.0f64; width as usize];

    for x in 0..width {
        let mut top: Option<u32> = None;
        let mut bottom = 0u32;

        for y in 0..height {
            if buffer.pixel(x, y).distance(&background) > threshold {
                if top.is_none() {
                    top = Some(y);
                }
                bottom = y;
            }
        }

        if let Some(top) = top {
            let extent = (bottom - top + 1) as usize;
            if extent >= params.min_feature_size.max(1) {
                heights[x as usize] = extent as f64;
            }
        }
    }

    let profile = ProfileData::from_raw_heights(&heights);

    if profile.bounds().peak_value == 0.0 {
        debug!(width, height, "no content found, returning zero profile");
    }

    profile
}
