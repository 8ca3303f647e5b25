//! Batch adapter for closest-point matching.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes two complete
//! point sets, validates them, and returns the closest target for every
//! source point in a single call.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire source set in one pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Parallelism**: Optional rayon execution (`cpu` feature); falls back
//!   to the sequential pass when the feature is disabled.
//! * **Generics**: Generic over `f64` and `f32`.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates, executes, and returns results.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Reuse**: A built matcher is stateless and can be fitted repeatedly.
//!
//! ## Invariants
//!
//! * Source and target sets have the same dimensionality.
//! * The target set holds at least one point.
//! * Output order matches source column order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming or incremental matching.
//! * This adapter does not coerce between element types.

// External dependencies
use log::debug;
use std::marker::PhantomData;
use std::result::Result;

// Internal dependencies
use crate::engine::executor::{ClosestExecutor, MatchConfig};
use crate::engine::output::MatchResult;
use crate::engine::validator::Validator;
use crate::input::PointSetInput;
use crate::primitives::element::MatchFloat;
use crate::primitives::errors::ClosestError;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchClosestBuilder<T: MatchFloat> {
    /// Row count used to split flat buffers into points.
    pub dimensions: Option<usize>,

    /// Report squared distances alongside indices.
    pub return_distances: bool,

    /// Enable partial-sum pruning.
    pub early_exit: bool,

    /// Run on rayon workers.
    pub parallel: bool,

    _marker: PhantomData<T>,
}

impl<T: MatchFloat> Default for BatchClosestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatchFloat> BatchClosestBuilder<T> {
    /// Create a new batch builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * dimensions: unset (required only for flat buffers)
    /// * return_distances: false
    /// * early_exit: false
    /// * parallel: false
    pub fn new() -> Self {
        Self {
            dimensions: None,
            return_distances: false,
            early_exit: false,
            parallel: false,
            _marker: PhantomData,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of dimensions used for flat buffers.
    pub fn dimensions(mut self, dims: usize) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Enable returning squared distances in the result.
    pub fn return_distances(mut self, enabled: bool) -> Self {
        self.return_distances = enabled;
        self
    }

    /// Enable partial-sum pruning.
    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch matcher.
    pub fn build(self) -> Result<BatchClosest<T>, ClosestError> {
        Validator::validate_dimensions(self.dimensions)?;

        let parallel = self.parallel && cfg!(feature = "cpu");
        if self.parallel && !parallel {
            debug!("parallel matching requested without the `cpu` feature; running sequentially");
        }

        Ok(BatchClosest {
            dimensions: self.dimensions,
            config: MatchConfig {
                return_distances: self.return_distances,
                early_exit: self.early_exit,
                parallel,
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Batch Matcher
// ============================================================================

/// Batch closest-point matcher.
#[derive(Debug, Clone, Copy)]
pub struct BatchClosest<T: MatchFloat> {
    dimensions: Option<usize>,
    config: MatchConfig,
    _marker: PhantomData<T>,
}

impl<T: MatchFloat> BatchClosest<T> {
    /// Match every point of `source` to its closest point in `target`.
    pub fn fit<I1, I2>(&self, source: &I1, target: &I2) -> Result<MatchResult<T>, ClosestError>
    where
        I1: PointSetInput<T> + ?Sized,
        I2: PointSetInput<T> + ?Sized,
    {
        let source = source.as_point_set(self.dimensions)?;
        let target = target.as_point_set(self.dimensions)?;

        ClosestExecutor::run(&source, &target, &self.config)
    }

    /// The execution options this matcher was built with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
