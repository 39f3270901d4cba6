//! Curve smoothing filters.

use crate::error::{ProfileError, ProfileResult};

/// Smoothing strategy for profile curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingMethod {
    /// Windowed mean. Boundary windows shrink rather than wrap or pad.
    MovingAverage,
    /// Windowed median. Best for isolated spikes; preserves sharp
    /// edges better than averaging. Requires an odd window.
    Median,
    /// Gaussian-weighted kernel with `sigma = window / 6`. Boundary
    /// weights renormalize over the in-range taps.
    Gaussian,
}

/// Smooth a curve, returning a new curve of the same length.
///
/// A `window` of 1 or less is an identity transform for every method:
/// the input is returned unchanged (not an error).
///
/// For [`SmoothingMethod::MovingAverage`] and
/// [`SmoothingMethod::Gaussian`] the output variance never exceeds the
/// input variance for any window of 3 or more; the median filter
/// trades that guarantee for spike rejection.
///
/// # Errors
///
/// Returns [`ProfileError::EvenMedianWindow`] when the median filter
/// is asked for an even window.
///
/// # Example
///
/// ```
/// use hull_profile::{smooth_curve, SmoothingMethod};
///
/// let noisy = vec![0.0, 1.0, 0.0, 1.0, 0.0];
/// let smooth = smooth_curve(&noisy, SmoothingMethod::MovingAverage, 3).unwrap();
/// assert_eq!(smooth.len(), noisy.len());
/// assert!(smooth[2] > 0.0 && smooth[2] < 1.0);
/// ```
pub fn smooth_curve(
    curve: &[f64],
    method: SmoothingMethod,
    window: usize,
) -> ProfileResult<Vec<f64>> {
    if method == SmoothingMethod::Median && window > 1 && window % 2 == 0 {
        return Err(ProfileError::EvenMedianWindow { window });
    }

    if window <= 1 || curve.len() <= 1 {
        return Ok(curve.to_vec());
    }

    let out = match method {
        SmoothingMethod::MovingAverage => moving_average(curve, window),
        SmoothingMethod::Median => median_filter(curve, window),
        SmoothingMethod::Gaussian => gaussian_filter(curve, window),
    };

    Ok(out)
}

/// Clamped window `[lo, hi]` around `i` for a full width of `window`.
fn window_range(i: usize, len: usize, window: usize) -> (usize, usize) {
    let lo = i.saturating_sub((window - 1) / 2);
    let hi = (i + window / 2).min(len - 1);
    (lo, hi)
}

#[allow(clippy::cast_precision_loss)]
fn moving_average(curve: &[f64], window: usize) -> Vec<f64> {
    let len = curve.len();
    let mut out = Vec::with_capacity(len);

    for i in 0..len {
        let (lo, hi) = window_range(i, len, window);
        let sum: f64 = curve[lo..=hi].iter().sum();
        out.push(sum / (hi - lo + 1) as f64);
    }

    out
}

fn median_filter(curve: &[f64], window: usize) -> Vec<f64> {
    let len = curve.len();
    let mut out = Vec::with_capacity(len);
    let mut scratch = Vec::with_capacity(window);

    for i in 0..len {
        let (lo, hi) = window_range(i, len, window);
        scratch.clear();
        scratch.extend_from_slice(&curve[lo..=hi]);
        scratch.sort_by(f64::total_cmp);

        let n = scratch.len();
        // Shrunken boundary windows can be even-sized; average the two
        // middle samples in that case.
        let median = if n % 2 == 1 {
            scratch[n / 2]
        } else {
            (scratch[n / 2 - 1] + scratch[n / 2]) * 0.5
        };
        out.push(median);
    }

    out
}

#[allow(clippy::cast_precision_loss)]
fn gaussian_filter(curve: &[f64], window: usize) -> Vec<f64> {
    let len = curve.len();
    let half = window / 2;
    let sigma = window as f64 / 6.0;
    let denom = 2.0 * sigma * sigma;

    // Precompute one-sided kernel taps; tap 0 is the center weight.
    let taps: Vec<f64> = (0..=half)
        .map(|d| (-((d * d) as f64) / denom).exp())
        .collect();

    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let mut acc = 0.0;
        let mut weight = 0.0;
        for (j, &v) in curve
            .iter()
            .enumerate()
            .take((i + half + 1).min(len))
            .skip(i.saturating_sub(half))
        {
            let d = i.abs_diff(j);
            let w = taps[d];
            acc += v * w;
            weight += w;
        }
        out.push(acc / weight);
    }

    out
}
