//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides validation and output assembly:
//! - Parameter validation (`Validator`)
//! - The 2D and 3D result containers (`Taper2D`, `Taper3D`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter validation.
pub mod validator;

/// Output containers for 2D and 3D masks.
pub mod output;
