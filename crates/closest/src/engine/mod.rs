//! Layer 4: Engine
//!
//! ## Purpose
//!
//! This layer runs the exhaustive scan. It validates a pair of point sets,
//! matches every source point against every target point (sequentially, or
//! with rayon when the `cpu` feature is enabled) and assembles the result.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Input
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exhaustive matching passes and the executor driving them.
pub mod executor;

/// Match result container.
pub mod output;

/// Precondition checks run before any distance is computed.
pub mod validator;
