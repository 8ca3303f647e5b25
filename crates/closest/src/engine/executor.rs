//! Exhaustive matching passes.
//!
//! ## Purpose
//!
//! This module implements the core scan: every source point is compared
//! against every target point and the target with the smallest squared
//! Euclidean distance wins. A sequential pass and a rayon-parallel pass
//! produce identical results; [`ClosestExecutor`] validates inputs and picks
//! one of them.
//!
//! ## Design notes
//!
//! * **Exhaustive**: No spatial index. Cost is `O(source * target * dims)`
//!   with no scratch memory beyond the outputs.
//! * **Generic precision**: One routine serves `f64` and `f32`; each runs
//!   natively in its own precision.
//! * **Pruning**: With `early_exit`, a candidate's sum is abandoned as soon
//!   as it passes the current minimum. The chosen index and distance are
//!   unchanged.
//! * **Parallelism**: Source points are independent, so the parallel pass
//!   splits them across rayon workers and collects in order.
//!
//! ## Key concepts
//!
//! * **Strict improvement**: A candidate replaces the current best only if
//!   it is strictly closer, so the lowest column wins ties.
//! * **Non-finite fallback**: When no candidate compares below `+inf` (every
//!   distance is `+inf` or NaN), column `0` is reported with distance `+inf`.
//!
//! ## Invariants
//!
//! * Inputs are validated before the first distance is computed.
//! * Output order matches source column order.
//!
//! ## Non-goals
//!
//! * This module does not build acceleration structures.
//! * This module does not support metrics other than squared Euclidean.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::debug;

// Internal dependencies
use crate::engine::output::MatchResult;
use crate::engine::validator::Validator;
use crate::input::PointSet;
use crate::math::distance::{squared_euclidean, squared_euclidean_bounded};
use crate::primitives::element::MatchFloat;
use crate::primitives::errors::ClosestError;

// ============================================================================
// Execution Config
// ============================================================================

/// Options for a single matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    /// Keep the squared distance of every match.
    pub return_distances: bool,
    /// Abandon a candidate once its partial sum passes the current minimum.
    pub early_exit: bool,
    /// Split source points across rayon workers.
    pub parallel: bool,
}

// ============================================================================
// Single Column Scan
// ============================================================================

/// Find the target point closest to `query`.
///
/// Returns the 0-based target column and its squared distance. `target`
/// must be non-empty and share the query's dimensionality.
#[inline]
pub(crate) fn closest_column<T: MatchFloat>(
    query: &[T],
    target: &PointSet<'_, T>,
    early_exit: bool,
) -> (usize, T) {
    let mut min = T::infinity();
    let mut which = None;

    for (j, candidate) in target.points().enumerate() {
        let t = if early_exit {
            match squared_euclidean_bounded(query, candidate, min) {
                Some(t) => t,
                None => continue,
            }
        } else {
            squared_euclidean(query, candidate)
        };

        if t < min {
            min = t;
            which = Some(j);
        }
    }

    (which.unwrap_or(0), min)
}

// ============================================================================
// Matching Passes
// ============================================================================

/// An empty target has no column to report.
fn require_targets<T: MatchFloat>(
    source: &PointSet<'_, T>,
    target: &PointSet<'_, T>,
) -> Result<(), ClosestError> {
    if target.is_empty() {
        return Err(ClosestError::EmptyTargetSet {
            source_points: source.count(),
        });
    }
    Ok(())
}

/// Match every source point in order on the calling thread.
///
/// Fails with [`ClosestError::EmptyTargetSet`] when `target` has no points.
pub fn match_pass_sequential<T: MatchFloat>(
    source: &PointSet<'_, T>,
    target: &PointSet<'_, T>,
    early_exit: bool,
    return_distances: bool,
) -> Result<(Vec<usize>, Option<Vec<T>>), ClosestError> {
    require_targets(source, target)?;

    let n = source.count();
    let mut indices = Vec::with_capacity(n);
    let mut distances = return_distances.then(|| Vec::with_capacity(n));

    for query in source.points() {
        let (which, min) = closest_column(query, target, early_exit);
        indices.push(which);
        if let Some(out) = distances.as_mut() {
            out.push(min);
        }
    }

    Ok((indices, distances))
}

/// Match source points in parallel using rayon.
///
/// Produces exactly what [`match_pass_sequential`] produces.
#[cfg(feature = "cpu")]
pub fn match_pass_parallel<T: MatchFloat>(
    source: &PointSet<'_, T>,
    target: &PointSet<'_, T>,
    early_exit: bool,
    return_distances: bool,
) -> Result<(Vec<usize>, Option<Vec<T>>), ClosestError> {
    require_targets(source, target)?;

    let matches: Vec<(usize, T)> = (0..source.count())
        .into_par_iter()
        .map(|i| closest_column(source.point(i), target, early_exit))
        .collect();

    if return_distances {
        let (indices, distances) = matches.into_iter().unzip();
        Ok((indices, Some(distances)))
    } else {
        Ok((matches.into_iter().map(|(which, _)| which).collect(), None))
    }
}

/// Fallback for builds without the `cpu` feature.
#[cfg(not(feature = "cpu"))]
pub fn match_pass_parallel<T: MatchFloat>(
    source: &PointSet<'_, T>,
    target: &PointSet<'_, T>,
    early_exit: bool,
    return_distances: bool,
) -> Result<(Vec<usize>, Option<Vec<T>>), ClosestError> {
    match_pass_sequential(source, target, early_exit, return_distances)
}

// ============================================================================
// Executor
// ============================================================================

/// Drives validation and the selected matching pass.
pub struct ClosestExecutor;

impl ClosestExecutor {
    /// Match every point of `source` to its closest point in `target`.
    pub fn run<T: MatchFloat>(
        source: &PointSet<'_, T>,
        target: &PointSet<'_, T>,
        config: &MatchConfig,
    ) -> Result<MatchResult<T>, ClosestError> {
        Validator::validate_inputs(source, target)?;

        debug!(
            "matching {} {} points against {} targets in {} dimensions (parallel: {}, early_exit: {})",
            source.count(),
            T::ELEMENT_TYPE,
            target.count(),
            source.dimensions(),
            config.parallel,
            config.early_exit
        );

        let (indices, distances) = if config.parallel {
            match_pass_parallel(source, target, config.early_exit, config.return_distances)?
        } else {
            match_pass_sequential(source, target, config.early_exit, config.return_distances)?
        };

        Ok(MatchResult {
            indices,
            distances,
            dimensions: source.dimensions(),
            target_count: target.count(),
        })
    }
}
