//! Error types for the pagecut layout analysis library.

use thiserror::Error;

/// Primary error type for layout analysis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("matrix requires 4, 6 or 9 values, got {0}")]
    InvalidMatrixLength(usize),

    #[error("matrix index out of range: ({row}, {col})")]
    MatrixIndexOutOfRange { row: usize, col: usize },

    #[error("candidate list cannot be empty")]
    EmptyCandidates,
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
