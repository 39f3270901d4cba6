//! Error types for profile extraction and smoothing.

use thiserror::Error;

/// Result type for hull-profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur during profile processing.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Median smoothing requires an odd window so the center sample is
    /// well defined. Never silently corrected.
    #[error("median filter window must be odd, got {window}")]
    EvenMedianWindow {
        /// The offending window size.
        window: usize,
    },
}
