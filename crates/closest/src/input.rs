//! Input abstractions for point matching.
//!
//! ## Purpose
//!
//! This module provides the column-major [`PointSet`] buffer the engine
//! consumes, and the [`PointSetInput`] trait that lets `fit` accept flat
//! slices, vectors, ready-made point sets and (with the `cpu` feature)
//! two-dimensional ndarray arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Slices, vectors and Fortran-ordered arrays
//!   are borrowed as they are.
//! * **Layout normalization**: Arrays in any other memory order are copied
//!   once into column-major order.
//! * **Fail-fast validation**: Buffer length is checked against the declared
//!   shape before anything else runs.
//!
//! ## Key concepts
//!
//! * **Column-major**: Element `(k, i)` lives at `i * dimensions + k`, so each
//!   point is one contiguous run of `dimensions` values.
//! * **Shape authority**: Shaped inputs (point sets, arrays) carry their own
//!   row count; the configured dimension count only applies to flat buffers.
//!
//! ## Invariants
//!
//! * `as_slice().len() == dimensions() * count()`.
//! * `point(i)` is exactly `dimensions()` long for every `i < count()`.
//!
//! ## Non-goals
//!
//! * This module does not reconcile differing dimensionality.
//! * This module does not clean or impute data.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix2};

// External dependencies
use std::borrow::Cow;

// Internal dependencies
use crate::primitives::element::MatchFloat;
use crate::primitives::errors::ClosestError;

// ============================================================================
// Point Set
// ============================================================================

/// Dense column-major collection of points sharing one dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<'a, T: MatchFloat> {
    data: Cow<'a, [T]>,
    dimensions: usize,
    count: usize,
}

impl<'a, T: MatchFloat> PointSet<'a, T> {
    /// Borrow `data` as `count` points of `dimensions` rows each.
    pub fn new(data: &'a [T], dimensions: usize, count: usize) -> Result<Self, ClosestError> {
        Self::from_cow(Cow::Borrowed(data), dimensions, count)
    }

    /// Take ownership of `data` as `count` points of `dimensions` rows each.
    pub fn from_vec(
        data: Vec<T>,
        dimensions: usize,
        count: usize,
    ) -> Result<PointSet<'static, T>, ClosestError> {
        PointSet::from_cow(Cow::Owned(data), dimensions, count)
    }

    fn from_cow(data: Cow<'a, [T]>, dimensions: usize, count: usize) -> Result<Self, ClosestError> {
        let expected = dimensions.checked_mul(count);
        if expected != Some(data.len()) {
            return Err(ClosestError::ShapeMismatch {
                len: data.len(),
                dimensions,
                count,
            });
        }

        Ok(Self {
            data,
            dimensions,
            count,
        })
    }

    /// Number of rows (coordinates per point).
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of columns (points).
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The raw column-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Coordinates of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= count()`.
    #[inline]
    pub fn point(&self, i: usize) -> &[T] {
        assert!(i < self.count, "point index {i} out of range for {} points", self.count);
        let start = i * self.dimensions;
        &self.data[start..start + self.dimensions]
    }

    /// Iterate over the points in column order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.count).map(move |i| self.point(i))
    }

    /// Borrow this set without copying its buffer.
    pub fn view(&self) -> PointSet<'_, T> {
        PointSet {
            data: Cow::Borrowed(&self.data),
            dimensions: self.dimensions,
            count: self.count,
        }
    }
}

// ============================================================================
// Input Trait
// ============================================================================

/// Trait for types that can be matched as a point set.
pub trait PointSetInput<T: MatchFloat> {
    /// View the input as a column-major point set.
    ///
    /// `dimensions` is the configured row count. Flat buffers require it;
    /// shaped inputs ignore it.
    fn as_point_set(&self, dimensions: Option<usize>) -> Result<PointSet<'_, T>, ClosestError>;
}

fn flat_point_set<T: MatchFloat>(
    data: &[T],
    dimensions: Option<usize>,
) -> Result<PointSet<'_, T>, ClosestError> {
    let dims = match dimensions {
        Some(d) if d > 0 => d,
        Some(_) => {
            return Err(ClosestError::InvalidInput(
                "flat buffers need at least one dimension".to_string(),
            ))
        }
        None => {
            return Err(ClosestError::InvalidInput(
                "flat buffers need an explicit dimension count; call .dimensions(n)".to_string(),
            ))
        }
    };

    if data.len() % dims != 0 {
        return Err(ClosestError::ShapeMismatch {
            len: data.len(),
            dimensions: dims,
            count: data.len() / dims,
        });
    }

    PointSet::new(data, dims, data.len() / dims)
}

impl<T: MatchFloat> PointSetInput<T> for [T] {
    fn as_point_set(&self, dimensions: Option<usize>) -> Result<PointSet<'_, T>, ClosestError> {
        flat_point_set(self, dimensions)
    }
}

impl<T: MatchFloat> PointSetInput<T> for Vec<T> {
    fn as_point_set(&self, dimensions: Option<usize>) -> Result<PointSet<'_, T>, ClosestError> {
        flat_point_set(self.as_slice(), dimensions)
    }
}

impl<T: MatchFloat> PointSetInput<T> for PointSet<'_, T> {
    fn as_point_set(&self, _dimensions: Option<usize>) -> Result<PointSet<'_, T>, ClosestError> {
        Ok(self.view())
    }
}

#[cfg(feature = "cpu")]
impl<T: MatchFloat, S> PointSetInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_point_set(&self, _dimensions: Option<usize>) -> Result<PointSet<'_, T>, ClosestError> {
        let (rows, cols) = self.dim();
        // The transpose of a Fortran-ordered array is in standard order.
        let columns = self.t();
        match columns.to_slice() {
            Some(data) => PointSet::new(data, rows, cols),
            None => PointSet::from_cow(Cow::Owned(columns.iter().copied().collect()), rows, cols),
        }
    }
}
