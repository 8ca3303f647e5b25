//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer holds the types every other layer is written against: the
//! supported element types, the index reporting convention and the error
//! taxonomy.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Input
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Supported element types and the `MatchFloat` trait.
pub mod element;

/// Error taxonomy for matching.
pub mod errors;

/// Index reporting convention (0-based or 1-based).
pub mod index;
