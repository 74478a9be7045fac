//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental interfaces and types used throughout
//! the crate:
//! - The error type returned by validated constructors
//! - The plot-sink trait for optional visualization
//!
//! These have no dependencies on other layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for taper construction.
pub mod errors;

/// Plot-sink trait for optional visualization.
pub mod plot;
