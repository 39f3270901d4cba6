//! Background color estimation.
//!
//! Orthographic ship drawings usually sit on a flat background (paper
//! white, sea blue, archive sepia). Content thresholding needs that
//! color; this module estimates it from the image itself.

use hull_types::{PixelBuffer, Rgb};
use tracing::debug;

/// Side length of the corner patches sampled by
/// [`BackgroundMode::Corners`].
const CORNER_PATCH: u32 = 5;

/// Channel quantization step for [`BackgroundMode::Mode`]. 256 / 32
/// gives 8 levels per channel, 512 buckets total.
const BUCKET_STEP: u32 = 32;

/// Color distance below which the corner and histogram estimates are
/// considered to agree (used by [`BackgroundMode::Auto`]).
const AGREEMENT_DISTANCE: f64 = 30.0;

/// Divisor mapping average sample spread to a confidence penalty.
const SPREAD_SCALE: f64 = 64.0;

/// Background estimation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode {
    /// Average small patches at the four image corners.
    Corners,
    /// Average every border pixel.
    Edges,
    /// Peak of a coarsely quantized color histogram. More robust when
    /// content touches the image edges.
    Mode,
    /// Caller-supplied color, trusted with confidence 1.0.
    Custom(Rgb),
    /// Selection policy: compute [`Corners`](Self::Corners) and
    /// [`Mode`](Self::Mode); if they agree, use the corner estimate,
    /// otherwise prefer the histogram peak.
    Auto,
}

/// Method actually used to produce a [`BackgroundEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMethod {
    /// Corner patch average.
    Corners,
    /// Border pixel average.
    Edges,
    /// Quantized histogram peak.
    Mode,
    /// Caller-supplied color.
    Custom,
}

/// A background color estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundEstimate {
    /// Estimated background color.
    pub color: Rgb,
    /// Confidence in `[0, 1]`. A fully uniform image yields 1.0 for
    /// every method.
    pub confidence: f64,
    /// Method that produced the estimate.
    pub method: BackgroundMethod,
}

/// Estimate the background color of an image.
///
/// # Example
///
/// ```
/// use hull_profile::{detect_background, BackgroundMode, BackgroundMethod};
/// use hull_types::{PixelBuffer, Rgb};
///
/// let image = PixelBuffer::solid(20, 10, Rgb::WHITE).unwrap();
/// let estimate = detect_background(&image, BackgroundMode::Corners);
///
/// assert_eq!(estimate.color, Rgb::WHITE);
/// assert!((estimate.confidence - 1.0).abs() < 1e-12);
/// assert_eq!(estimate.method, BackgroundMethod::Corners);
/// ```
#[must_use]
pub fn detect_background(buffer: &PixelBuffer, mode: BackgroundMode) -> BackgroundEstimate {
    let estimate = match mode {
        BackgroundMode::Corners => detect_corners(buffer),
        BackgroundMode::Edges => detect_edges(buffer),
        BackgroundMode::Mode => detect_mode(buffer),
        BackgroundMode::Custom(color) => BackgroundEstimate {
            color,
            confidence: 1.0,
            method: BackgroundMethod::Custom,
        },
        BackgroundMode::Auto => {
            let corners = detect_corners(buffer);
            let histogram = detect_mode(buffer);
            let distance = corners.color.distance(&histogram.color);
            if distance < AGREEMENT_DISTANCE {
                corners
            } else {
                // Disagreement usually means content reaches the image
                // border; the histogram peak is the safer estimate.
                debug!(
                    distance,
                    "corner and histogram estimates disagree, using histogram peak"
                );
                histogram
            }
        }
    };

    debug!(
        r = estimate.color.r,
        g = estimate.color.g,
        b = estimate.color.b,
        confidence = estimate.confidence,
        "background estimated"
    );

    estimate
}

/// Average the corner patches and derive confidence from their spread.
fn detect_corners(buffer: &PixelBuffer) -> BackgroundEstimate {
    let patch = CORNER_PATCH.min(buffer.width()).min(buffer.height());
    let w = buffer.width();
    let h = buffer.height();

    let mut samples = Vec::with_capacity((patch * patch * 4) as usize);
    for dy in 0..patch {
        for dx in 0..patch {
            samples.push(buffer.pixel(dx, dy));
            samples.push(buffer.pixel(w - patch + dx, dy));
            samples.push(buffer.pixel(dx, h - patch + dy));
            samples.push(buffer.pixel(w - patch + dx, h - patch + dy));
        }
    }

    average_estimate(&samples, BackgroundMethod::Corners)
}

/// Average every border pixel and derive confidence from their spread.
fn detect_edges(buffer: &PixelBuffer) -> BackgroundEstimate {
    let w = buffer.width();
    let h = buffer.height();

    let mut samples = Vec::with_capacity(2 * (w + h) as usize);
    for x in 0..w {
        samples.push(buffer.pixel(x, 0));
        if h > 1 {
            samples.push(buffer.pixel(x, h - 1));
        }
    }
    for y in 1..h.saturating_sub(1) {
        samples.push(buffer.pixel(0, y));
        if w > 1 {
            samples.push(buffer.pixel(w - 1, y));
        }
    }

    average_estimate(&samples, BackgroundMethod::Edges)
}

/// Mean color of a sample set, with confidence falling off as the
/// samples spread out around that mean.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation: channel means are in [0, 255] before the cast
fn average_estimate(samples: &[Rgb], method: BackgroundMethod) -> BackgroundEstimate {
    let n = samples.len() as f64;
    let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
    for s in samples {
        r += f64::from(s.r);
        g += f64::from(s.g);
        b += f64::from(s.b);
    }
    let color = Rgb::new(
        (r / n).round() as u8,
        (g / n).round() as u8,
        (b / n).round() as u8,
    );

    let spread: f64 = samples.iter().map(|s| s.distance(&color)).sum::<f64>() / n;
    let confidence = (1.0 - spread / SPREAD_SCALE).clamp(0.0, 1.0);

    BackgroundEstimate {
        color,
        confidence,
        method,
    }
}

/// Quantized-histogram peak over the whole image.
///
/// Each channel is bucketed to 8 levels; the mean color of the most
/// frequent bucket is returned, so a fully uniform image yields its
/// exact color. Ties break toward the smallest bucket key so the
/// result never depends on iteration order.
#[allow(clippy::cast_possible_truncation)]
// Truncation: per-bucket channel means are < 256 by construction
fn detect_mode(buffer: &PixelBuffer) -> BackgroundEstimate {
    let mut counts = [0u32; 512];
    let mut sums = [[0u64; 3]; 512];

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let p = buffer.pixel(x, y);
            let key = ((u32::from(p.r) / BUCKET_STEP) * 64
                + (u32::from(p.g) / BUCKET_STEP) * 8
                + u32::from(p.b) / BUCKET_STEP) as usize;
            counts[key] += 1;
            sums[key][0] += u64::from(p.r);
            sums[key][1] += u64::from(p.g);
            sums[key][2] += u64::from(p.b);
        }
    }

    let mut best_key = 0usize;
    let mut best_count = 0u32;
    for (key, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_count = count;
            best_key = key;
        }
    }

    let n = u64::from(best_count.max(1));
    let color = Rgb::new(
        ((sums[best_key][0] + n / 2) / n) as u8,
        ((sums[best_key][1] + n / 2) / n) as u8,
        ((sums[best_key][2] + n / 2) / n) as u8,
    );

    let total = u64::from(buffer.width()) * u64::from(buffer.height());
    #[allow(clippy::cast_precision_loss)]
    let confidence = f64::from(best_count) / total as f64;

    BackgroundEstimate {
        color,
        confidence,
        method: BackgroundMethod::Mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(color: Rgb) -> PixelBuffer {
        PixelBuffer::solid(32, 16, color).unwrap()
    }

    #[test]
    fn corners_on_uniform_image() {
        let estimate = detect_background(&uniform(Rgb::new(200, 210, 220)), BackgroundMode::Corners);
        assert_eq!(estimate.color, Rgb::new(200, 210, 220));
        assert!((estimate.confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn edges_on_uniform_image() {
        let estimate = detect_background(&uniform(Rgb::WHITE), BackgroundMode::Edges);
        assert_eq!(estimate.color, Rgb::WHITE);
        assert!((estimate.confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mode_on_uniform_image_returns_exact_color() {
        // 200/210/220 are not bucket midpoints; the bucket mean must
        // recover the input color exactly.
        let estimate = detect_background(&uniform(Rgb::new(200, 210, 220)), BackgroundMode::Mode);
        assert_eq!(estimate.color, Rgb::new(200, 210, 220));
        assert!((estimate.confidence - 1.0).abs() < 1e-12);
        assert_eq!(estimate.method, BackgroundMethod::Mode);
    }

    #[test]
    fn mode_returns_dominant_color_not_bucket_midpoint() {
        let mut image = PixelBuffer::solid(32, 16, Rgb::new(200, 210, 220)).unwrap();
        // A quarter of the image is content in a different bucket
        image.fill_rect(0, 0, 8, 16, Rgb::BLACK);

        let estimate = detect_background(&image, BackgroundMode::Mode);
        assert_eq!(estimate.color, Rgb::new(200, 210, 220));
        assert!((estimate.confidence - 0.75).abs() < 1e-12);
    }

    #[test]
    fn custom_is_trusted() {
        let estimate = detect_background(&uniform(Rgb::BLACK), BackgroundMode::Custom(Rgb::WHITE));
        assert_eq!(estimate.color, Rgb::WHITE);
        assert!((estimate.confidence - 1.0).abs() < 1e-12);
        assert_eq!(estimate.method, BackgroundMethod::Custom);
    }

    #[test]
    fn auto_prefers_corners_when_estimates_agree() {
        let mut image = uniform(Rgb::new(240, 240, 240));
        // Small centered blob, corners untouched
        image.fill_rect(14, 6, 4, 4, Rgb::BLACK);

        let estimate = detect_background(&image, BackgroundMode::Auto);
        assert_eq!(estimate.method, BackgroundMethod::Corners);
        assert_eq!(estimate.color, Rgb::new(240, 240, 240));
    }

    #[test]
    fn auto_falls_back_to_mode_when_content_touches_corners() {
        let mut image = PixelBuffer::solid(32, 16, Rgb::new(240, 240, 240)).unwrap();
        // Dark content over the top-left corner skews the corner average
        image.fill_rect(0, 0, 16, 16, Rgb::BLACK);

        let estimate = detect_background(&image, BackgroundMode::Auto);
        assert_eq!(estimate.method, BackgroundMethod::Mode);
    }

    #[test]
    fn corner_patch_clamps_on_tiny_images() {
        let image = PixelBuffer::solid(2, 2, Rgb::WHITE).unwrap();
        let estimate = detect_background(&image, BackgroundMode::Corners);
        assert_eq!(estimate.color, Rgb::WHITE);
    }
}
