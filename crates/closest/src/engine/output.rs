//! Match result container.
//!
//! ## Purpose
//!
//! [`MatchResult`] holds, for every source point, the position of its
//! closest target point and optionally the squared distance to it.
//!
//! ## Invariants
//!
//! * `indices.len()` equals the number of source points.
//! * `distances`, when present, has the same length as `indices`.
//! * Every index is below `target_count`.
//! * Indices are stored 0-based; use [`MatchResult::indices_with_base`] to
//!   report them in another convention.

use crate::primitives::element::MatchFloat;
use crate::primitives::index::IndexBase;

/// Output of a matching run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<T: MatchFloat> {
    /// 0-based column of the closest target point, one per source point.
    pub indices: Vec<usize>,

    /// Squared distance to that target point, if requested.
    pub distances: Option<Vec<T>>,

    /// Dimensionality shared by both point sets.
    pub dimensions: usize,

    /// Number of target points that were scanned.
    pub target_count: usize,
}

impl<T: MatchFloat> MatchResult<T> {
    /// Number of matched source points.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the source set was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices shifted into `base`.
    pub fn indices_with_base(&self, base: IndexBase) -> Vec<usize> {
        self.indices.iter().map(|&j| base.apply(j)).collect()
    }

    /// `(index, distance)` pairs, when distances were requested.
    pub fn pairs(&self) -> Option<impl Iterator<Item = (usize, T)> + '_> {
        self.distances
            .as_ref()
            .map(|d| self.indices.iter().copied().zip(d.iter().copied()))
    }
}
