//! Error types for lofting and component placement.

use thiserror::Error;

/// Result type for hull-loft operations.
pub type LoftResult<T> = Result<T, LoftError>;

/// Errors that can occur while generating hull geometry.
#[derive(Debug, Error)]
pub enum LoftError {
    /// Cross-section rings need at least 3 radial segments.
    #[error("radial segments must be at least {min}, got {actual}")]
    TooFewRadialSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// The hull needs at least one length segment.
    #[error("length segments must be at least {min}, got {actual}")]
    TooFewLengthSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// A profile curve has no samples.
    #[error("profile curve must not be empty")]
    EmptyProfile,

    /// A ship dimension is zero, negative, or not finite.
    #[error("dimension `{name}` must be positive and finite, got {value}")]
    InvalidDimension {
        /// Which dimension failed.
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
