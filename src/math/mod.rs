//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the taper
//! constructors:
//! - The raised-cosine (Hann) window primitive
//!
//! These are reusable building blocks with no taper-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Raised-cosine (Hann) window generation.
pub mod window;
