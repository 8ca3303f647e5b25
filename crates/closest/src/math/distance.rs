//! Squared Euclidean distance kernels.
//!
//! ## Purpose
//!
//! This module computes the squared Euclidean distance between two points
//! stored as equal-length slices. Two variants exist: a full sum, and a
//! bounded sum that gives up once the running total passes a threshold.
//!
//! ## Design notes
//!
//! * **Accumulation order**: Both kernels add terms left to right in the
//!   element precision, so a bounded sum that completes is bit-identical to
//!   the full sum.
//! * **No square root**: Squared distance preserves ordering; callers that
//!   need the metric distance take the root themselves.
//!
//! ## Invariants
//!
//! * Slices are the same length (checked in debug builds only).
//! * Terms are never negative, so the running sum is monotone and abandoning
//!   it early cannot hide a smaller total.

use num_traits::Float;

/// Sum of squared coordinate differences between `a` and `b`.
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(T::zero(), |acc, (&p, &q)| {
        let d = p - q;
        acc + d * d
    })
}

/// Squared distance, abandoned once the partial sum exceeds `bound`.
///
/// Returns `None` when the total is known to be greater than `bound`,
/// otherwise the exact value [`squared_euclidean`] would return.
#[inline]
pub fn squared_euclidean_bounded<T: Float>(a: &[T], b: &[T], bound: T) -> Option<T> {
    debug_assert_eq!(a.len(), b.len());
    let mut acc = T::zero();
    for (&p, &q) in a.iter().zip(b) {
        let d = p - q;
        acc = acc + d * d;
        if acc > bound {
            return None;
        }
    }
    Some(acc)
}
