//! # closest
//!
//! Exhaustive closest-point matching between two point sets.
//!
//! Given a source set `A` (`N x NA`) and a target set `B` (`N x NB`), both
//! stored column-major with one point per column, `closest` reports for
//! every column of `A` the column of `B` at the smallest squared Euclidean
//! distance, and optionally that distance. Matching runs natively in `f64`
//! or `f32`.
//!
//! ## Quick start
//!
//! ```
//! use closest::prelude::*;
//!
//! // one source point (0, 0); targets (0, 0), (1, 1), (5, 5)
//! let a = vec![0.0, 0.0];
//! let b = vec![0.0, 0.0, 1.0, 1.0, 5.0, 5.0];
//!
//! let result = Closest::new()
//!     .dimensions(2)
//!     .return_distances(true)
//!     .adapter(Batch)
//!     .build()?
//!     .fit(&a, &b)?;
//!
//! assert_eq!(result.indices, vec![0]);
//! assert_eq!(result.distances, Some(vec![0.0]));
//! assert_eq!(result.indices_with_base(IndexBase::One), vec![1]);
//! # Ok::<(), ClosestError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API         builder, adapter selection, `closest()`
//! Layer 5: Adapters    batch matcher
//! Layer 4: Engine      validation, sequential/parallel passes, results
//! Layer 3: Input       column-major point sets, input conversions
//! Layer 2: Math        squared Euclidean kernels
//! Layer 1: Primitives  element types, index base, errors
//! ```
//!
//! [`host`] sits beside the stack and models a dynamically typed caller.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `cpu` *(default)* | rayon parallel matching, ndarray inputs |

pub mod adapters;
pub mod api;
pub mod engine;
pub mod host;
pub mod input;
pub mod math;
pub mod primitives;

pub use api::closest;

/// Items intended for glob-import: `use closest::prelude::*;`
pub mod prelude {
    pub use crate::api::{
        closest, Adapter, Batch, BatchClosest, ClosestAdapter, ClosestBuilder as Closest,
        ClosestError, ElementType, IndexBase, MatchFloat, MatchResult,
    };
    pub use crate::input::{PointSet, PointSetInput};
}

/// Lower layers, for callers that drive the engine directly.
pub mod internals {
    pub use crate::adapters;
    pub use crate::api;
    pub use crate::engine;
    pub use crate::host;
    pub use crate::math;
    pub use crate::primitives;
}
