//! Precondition checks for matching.
//!
//! Element type agreement is enforced by the type system on the typed path
//! (both sets share `T`) and by the host boundary on the dynamic path, so
//! only shape-level checks remain here.

use crate::input::PointSet;
use crate::primitives::element::MatchFloat;
use crate::primitives::errors::ClosestError;

/// Validation entry points.
pub struct Validator;

impl Validator {
    /// Check that `source` can be matched against `target`.
    ///
    /// Dimensionality is checked first, then that the target set is
    /// non-empty. An empty source set is valid and yields an empty result.
    pub fn validate_inputs<T: MatchFloat>(
        source: &PointSet<'_, T>,
        target: &PointSet<'_, T>,
    ) -> Result<(), ClosestError> {
        if source.dimensions() != target.dimensions() {
            return Err(ClosestError::DimensionMismatch {
                source_dims: source.dimensions(),
                target_dims: target.dimensions(),
            });
        }

        if target.is_empty() {
            return Err(ClosestError::EmptyTargetSet {
                source_points: source.count(),
            });
        }

        Ok(())
    }

    /// Reject a zero dimension count before it reaches a flat buffer.
    pub fn validate_dimensions(dimensions: Option<usize>) -> Result<(), ClosestError> {
        match dimensions {
            Some(0) => Err(ClosestError::InvalidInput(
                "dimensions must be at least 1".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
