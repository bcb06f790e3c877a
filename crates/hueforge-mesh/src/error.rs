//! Error types for height field validation and solid construction.

use thiserror::Error;

/// Errors that can occur while building a relief solid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Grid has fewer than 2 rows or 2 columns.
    #[error("height field must be at least 2x2, got {rows}x{cols}")]
    TooSmall {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        cols: usize,
    },

    /// A row's length differs from the first row.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Flat sample buffer does not match `rows * cols`.
    #[error("expected {expected} samples, got {got}")]
    DataLength {
        /// `rows * cols`.
        expected: usize,
        /// Samples supplied.
        got: usize,
    },

    /// A sample is NaN or infinite.
    #[error("non-finite height at ({row}, {col})")]
    NonFinite {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },

    /// A sample lies outside `[0, 1]`.
    #[error("height {value} at ({row}, {col}) is outside [0, 1]")]
    OutOfRange {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The offending sample.
        value: f64,
    },

    /// Relief parameters are unusable.
    #[error("invalid relief parameters: {0}")]
    InvalidParams(String),
}

/// Result type for mesh construction.
pub type Result<T> = std::result::Result<T, MeshError>;
