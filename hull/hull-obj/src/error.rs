//! Error types for OBJ I/O.

use thiserror::Error;

/// Result type for hull-obj operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while reading or writing OBJ data.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A face references a vertex index outside the file.
    #[error("face index {index} at line {line} outside valid range 1..={max}")]
    IndexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending index as written.
        index: i64,
        /// Number of vertices declared so far.
        max: usize,
    },
}

impl ObjError {
    /// Convenience constructor for parse errors.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
