//! Pipeline error type.

use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that can abort ship generation.
///
/// Per-feature problems (a bad turret hint, a content-free view) are
/// never errors; they are reported as [`crate::Issue`]s on the result.
/// Errors are reserved for caller-correctable configuration and I/O.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration rejected before any work started.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// Input validation failure from the core types.
    #[error(transparent)]
    Type(#[from] hull_types::TypeError),

    /// Profile extraction or smoothing failure.
    #[error(transparent)]
    Profile(#[from] hull_profile::ProfileError),

    /// Lofting or component placement failure.
    #[error(transparent)]
    Loft(#[from] hull_loft::LoftError),

    /// OBJ serialization or file I/O failure.
    #[error(transparent)]
    Obj(#[from] hull_obj::ObjError),
}

impl PipelineError {
    /// Convenience constructor for configuration errors.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
