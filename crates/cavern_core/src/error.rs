//! # Cave Error Types
//!
//! All errors that can occur while building or configuring a cave.

use thiserror::Error;

/// Errors that can occur in the cave generation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaveError {
    /// Width or height was zero.
    #[error("grid dimensions must be positive: width {width}, height {height}")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// `width * height` does not fit in a `usize`.
    #[error("grid size overflows: width {width} x height {height}")]
    SizeOverflow {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A supplied cell buffer does not match the grid dimensions.
    #[error("cell buffer length mismatch: expected {expected}, got {actual}")]
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// An index outside `[0, size)` was requested.
    #[error("index {index} out of bounds for grid of size {size}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Grid size.
        size: usize,
    },

    /// Invalid configuration value or file contents.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigRead {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
}

/// Result type for cave operations.
pub type CaveResult<T> = Result<T, CaveError>;
