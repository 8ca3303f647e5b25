//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the distance kernels used by the matching engine.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squared Euclidean distance kernels.
pub mod distance;
