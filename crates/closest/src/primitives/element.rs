//! Element types accepted by the matcher.
//!
//! ## Purpose
//!
//! The matcher runs in exactly two precisions, `f64` and `f32`. This module
//! names them ([`ElementType`]) and provides the bound the generic matching
//! routine is written against ([`MatchFloat`]).
//!
//! ## Invariants
//!
//! * `MatchFloat` is sealed: only `f64` and `f32` implement it.
//! * Each precision computes natively; nothing is widened or narrowed.

use std::fmt;
use std::fmt::Debug;

use num_traits::Float;

/// Precision of a point set's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 64-bit IEEE-754 (`f64`).
    Double,
    /// 32-bit IEEE-754 (`f32`).
    Single,
}

impl ElementType {
    /// Lower-case class name, as reported in errors.
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Double => "double",
            ElementType::Single => "single",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for f32 {}
}

/// Floating-point element type the matcher can run on.
pub trait MatchFloat: Float + Debug + Send + Sync + 'static + sealed::Sealed {
    /// The element type tag for this precision.
    const ELEMENT_TYPE: ElementType;

    /// Represent a column position as an element of this precision.
    ///
    /// Used when indices are reported in the same buffer type as the
    /// points. `f32` is exact only up to 2^24.
    fn from_index(index: usize) -> Self;
}

impl MatchFloat for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::Double;

    #[inline]
    fn from_index(index: usize) -> Self {
        index as f64
    }
}

impl MatchFloat for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::Single;

    #[inline]
    fn from_index(index: usize) -> Self {
        index as f32
    }
}
