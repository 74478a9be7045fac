//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer provides the taper constructors:
//! - 1D constructors (`hanning_taper`, `cosine_taper`) and the `TaperType`
//!   dispatch (`taper1d`)
//! - 2D and 3D mask assembly (`taper2d`, `taper3d`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Taper constructors and type dispatch.
pub mod taper;
