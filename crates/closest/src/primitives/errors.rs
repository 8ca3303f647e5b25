//! Error types for point matching.
//!
//! Every error is raised during validation, before the first distance is
//! computed. A failed call never returns partial output.

use thiserror::Error;

/// Errors returned by the matcher and its host boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClosestError {
    /// Wrong number of input arguments, or too many outputs requested.
    #[error("wrong number of {role} arguments: expected {expected}, got {got}")]
    ArgumentCount {
        /// `"input"` or `"output"`.
        role: &'static str,
        /// Human-readable accepted count.
        expected: &'static str,
        /// Count actually supplied.
        got: usize,
    },

    /// Source and target points have a different number of rows.
    #[error(
        "input arguments must have the same number of rows: source has {source_dims}, target has {target_dims}"
    )]
    DimensionMismatch {
        /// Rows of the source set.
        source_dims: usize,
        /// Rows of the target set.
        target_dims: usize,
    },

    /// Element types differ, or are not one of double/single.
    #[error(
        "input arguments must have the same supported type: source is {source_type}, target is {target_type}"
    )]
    TypeMismatch {
        /// Class name of the source set.
        source_type: String,
        /// Class name of the target set.
        target_type: String,
    },

    /// Target set has no columns, so no closest point exists.
    #[error("target point set is empty; cannot match {source_points} source points")]
    EmptyTargetSet {
        /// Number of source points that needed a match.
        source_points: usize,
    },

    /// Buffer length does not equal `dimensions * count`.
    #[error("buffer of length {len} cannot hold {count} points of dimension {dimensions}")]
    ShapeMismatch {
        /// Buffer length.
        len: usize,
        /// Declared rows.
        dimensions: usize,
        /// Declared columns.
        count: usize,
    },

    /// Any other invalid configuration or input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
