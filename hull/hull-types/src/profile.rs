//! Normalized 1D silhouette curves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw extent bookkeeping for a profile curve, recorded before
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveBounds {
    /// Index of the first non-zero sample.
    pub min_index: usize,
    /// Index of the last non-zero sample.
    pub max_index: usize,
    /// Index of the (first) peak sample.
    pub peak_index: usize,
    /// Peak value prior to normalization, in the units of the samples
    /// the curve was built from: pixels when extracted from an image,
    /// normalized units when rebuilt from an already-normalized curve
    /// (after smoothing, for example).
    pub peak_value: f64,
}

impl CurveBounds {
    /// Bounds of an all-zero curve.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min_index: 0,
            max_index: 0,
            peak_index: 0,
            peak_value: 0.0,
        }
    }
}

/// A 1D silhouette curve sampled along the ship's length.
///
/// Values are normalized to `[0, 1]` by the global raw peak. Whether
/// the curve describes beam (plan view) or draft (side view) is a
/// labeling contract owned by the caller; the data is identical in
/// shape either way.
///
/// # Invariants
///
/// - Every curve value lies in `[0.0, 1.0]`.
/// - `bounds.min_index <= bounds.peak_index <= bounds.max_index`
///   whenever `bounds.peak_value > 0`.
/// - An all-background image produces an all-zero curve with
///   `peak_value == 0.0`; that is a legitimate degenerate result, not
///   an error.
///
/// # Example
///
/// ```
/// use hull_types::ProfileData;
///
/// let profile = ProfileData::from_raw_heights(&[0.0, 2.0, 4.0, 2.0, 0.0]);
/// assert!((profile.curve()[2] - 1.0).abs() < 1e-12);
/// assert_eq!(profile.bounds().peak_index, 2);
/// assert!((profile.bounds().peak_value - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileData {
    curve: Vec<f64>,
    bounds: CurveBounds,
}

impl ProfileData {
    /// Build a profile from raw per-column heights.
    ///
    /// Records first/last non-zero and peak indices, then normalizes
    /// every sample by the global peak. A zero peak yields an all-zero
    /// curve.
    #[must_use]
    pub fn from_raw_heights(heights: &[f64]) -> Self {
        let mut bounds = CurveBounds::empty();
        let mut seen_content = false;

        for (i, &h) in heights.iter().enumerate() {
            if h > 0.0 {
                if !seen_content {
                    bounds.min_index = i;
                    seen_content = true;
                }
                bounds.max_index = i;
                if h > bounds.peak_value {
                    bounds.peak_value = h;
                    bounds.peak_index = i;
                }
            }
        }

        let curve = if bounds.peak_value > 0.0 {
            heights.iter().map(|h| h / bounds.peak_value).collect()
        } else {
            vec![0.0; heights.len()]
        };

        Self { curve, bounds }
    }

    /// Build a profile directly from already-normalized samples.
    ///
    /// Samples are clamped into `[0, 1]` to uphold the curve invariant;
    /// bounds are recomputed from the clamped data.
    #[must_use]
    pub fn from_normalized(samples: &[f64]) -> Self {
        let clamped: Vec<f64> = samples.iter().map(|s| s.clamp(0.0, 1.0)).collect();
        let mut profile = Self::from_raw_heights(&clamped);
        // from_raw_heights re-normalizes by the peak; keep the caller's
        // shape instead.
        profile.curve = clamped;
        profile
    }

    /// A constant all-ones profile with `n` samples.
    ///
    /// Useful as a neutral input for lofting tests and fallbacks.
    #[must_use]
    pub fn flat(n: usize) -> Self {
        Self::from_normalized(&vec![1.0; n])
    }

    /// The normalized curve samples.
    #[inline]
    #[must_use]
    pub fn curve(&self) -> &[f64] {
        &self.curve
    }

    /// Number of samples in the curve.
    #[inline]
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.curve.len()
    }

    /// Raw extent bookkeeping recorded before normalization.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> &CurveBounds {
        &self.bounds
    }

    /// Sample the curve at a normalized position `t` in `[0, 1]`.
    ///
    /// Maps `t` to the nearest sample index, `round(t * (len - 1))`,
    /// with both `t` and the index clamped into range. An empty curve
    /// samples as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation is safe: the product is clamped into [0, len - 1]
    pub fn sample(&self, t: f64) -> f64 {
        if self.curve.is_empty() {
            return 0.0;
        }
        let last = self.curve.len() - 1;
        let index = (t.clamp(0.0, 1.0) * last as f64).round() as usize;
        self.curve[index.min(last)]
    }
}
