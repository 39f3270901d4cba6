//! Error types for hull-types validation.

use thiserror::Error;

/// Result type for hull-types operations.
pub type TypeResult<T> = Result<T, TypeError>;

/// Errors raised while constructing or validating value types.
#[derive(Debug, Error)]
pub enum TypeError {
    /// Pixel data length does not match `width * height * 4`.
    #[error("pixel buffer needs {expected} bytes for {width}x{height} RGBA, got {actual}")]
    BufferSizeMismatch {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Required byte count.
        expected: usize,
        /// Actual byte count supplied.
        actual: usize,
    },

    /// Image has a zero width or height.
    #[error("image must have non-zero size, got {width}x{height}")]
    EmptyImage {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// A ship dimension is zero, negative, or not finite.
    #[error("dimension `{name}` must be positive and finite, got {value}")]
    InvalidDimension {
        /// Which dimension failed (`length`, `beam`, or `draft`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Superstructure span is reversed, empty, or outside `[0, 1]`.
    #[error("superstructure span must satisfy 0 <= start < end <= 1, got [{start}, {end}]")]
    InvalidSpan {
        /// Normalized span start.
        start: f64,
        /// Normalized span end.
        end: f64,
    },
}
