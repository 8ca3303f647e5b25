//! Layer 5: Adapters
//!
//! ## Purpose
//!
//! This layer provides the execution adapters selected from the API
//! builder. Matching is a whole-set operation, so the only adapter is
//! [`batch`], which holds both point sets in memory for the duration of a
//! call.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Input
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-memory batch matching.
pub mod batch;
