//! High-level API for closest-point matching.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for the matching options and hands them to an execution
//! adapter, plus a one-call [`closest`] function for the default setup.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Options are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `f64` and `f32`; both point sets must share
//!   the element type, so a type mismatch cannot be expressed here.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ClosestBuilder`] via `Closest::new()`.
//! 2. Chain configuration methods (`.dimensions()`, `.return_distances()`, ...).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.
//! 4. `.build()?.fit(&source, &target)?`
//!
//! ### Indexing
//!
//! Indices in [`MatchResult`] are 0-based. The historical host convention
//! is 1-based; use [`MatchResult::indices_with_base`] with
//! [`IndexBase::One`] to reproduce it.

// External dependencies
use std::marker::PhantomData;

// Internal dependencies
use crate::adapters::batch::BatchClosestBuilder;
use crate::engine::executor::{ClosestExecutor, MatchConfig};
use crate::input::PointSet;

// Publicly re-exported types
pub use crate::adapters::batch::BatchClosest;
pub use crate::engine::output::MatchResult;
pub use crate::primitives::element::{ElementType, MatchFloat};
pub use crate::primitives::errors::ClosestError;
pub use crate::primitives::index::IndexBase;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

/// Conversion from the shared builder into an adapter-specific builder.
pub trait ClosestAdapter<T: MatchFloat> {
    /// Builder produced for this adapter.
    type Output;

    /// Carry the shared options over to the adapter builder.
    fn convert(builder: ClosestBuilder<T>) -> Self::Output;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for in-memory batch matching.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: MatchFloat> ClosestAdapter<T> for Batch {
    type Output = BatchClosestBuilder<T>;

    fn convert(builder: ClosestBuilder<T>) -> Self::Output {
        let mut base = BatchClosestBuilder::new()
            .return_distances(builder.return_distances)
            .early_exit(builder.early_exit)
            .parallel(builder.parallel.unwrap_or(false));
        base.dimensions = builder.dimensions;
        base
    }
}

// ============================================================================
// Shared Builder
// ============================================================================

/// Options shared by every adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestBuilder<T: MatchFloat> {
    /// Row count used to split flat buffers into points.
    pub dimensions: Option<usize>,

    /// Report squared distances alongside indices.
    pub return_distances: bool,

    /// Enable partial-sum pruning.
    pub early_exit: bool,

    /// Parallel execution; the adapter decides the default.
    pub parallel: Option<bool>,

    _marker: PhantomData<T>,
}

impl<T: MatchFloat> Default for ClosestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatchFloat> ClosestBuilder<T> {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            dimensions: None,
            return_distances: false,
            early_exit: false,
            parallel: None,
            _marker: PhantomData,
        }
    }

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

    /// Abandon a candidate once its partial sum passes the current minimum.
    ///
    /// Never changes the result, only the amount of work.
    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Select an execution adapter.
    pub fn adapter<A: ClosestAdapter<T>>(self, _adapter: A) -> A::Output {
        A::convert(self)
    }
}

// ============================================================================
// One-call Entry Point
// ============================================================================

/// Match every column of `source` to its closest column of `target`.
///
/// Runs sequentially without pruning. Fails with
/// [`ClosestError::DimensionMismatch`] or [`ClosestError::EmptyTargetSet`]
/// before any distance is computed.
pub fn closest<T: MatchFloat>(
    source: &PointSet<'_, T>,
    target: &PointSet<'_, T>,
    return_distances: bool,
) -> Result<MatchResult<T>, ClosestError> {
    let config = MatchConfig {
        return_distances,
        ..MatchConfig::default()
    };
    ClosestExecutor::run(source, target, &config)
}
