//! # taper-rs — Tapering Windows for Rust
//!
//! Helpers for generating 1D, 2D, and 3D tapering windows: smooth
//! edge-attenuation masks used to suppress edge artifacts in signal and
//! array processing (seismic processing, imaging, spectral analysis).
//!
//! ## What is a taper?
//!
//! A taper is a multiplicative mask applied to data so that amplitudes roll
//! off smoothly toward the array boundaries instead of cutting off abruptly.
//! Hard edges leak energy across the spectrum and produce ringing artifacts;
//! multiplying by a taper first removes the discontinuity.
//!
//! **Common applications:**
//! - Muting the edges of seismic gathers before filtering or migration
//! - Windowing patches in overlap-add image and volume processing
//! - Pre-conditioning blocks for FFT-based convolution
//! - Blending overlapping tiles in mosaicking pipelines
//!
//! ## Taper profiles
//!
//! | Profile | Shape | Flat interior | Best for |
//! |---------|-------|---------------|----------|
//! | Hanning | Raised-cosine roll-off at each edge | Yes (exactly 1) | Preserving interior amplitudes untouched |
//! | Cosine | Full-length cosine bell | No | Gentle full-length weighting |
//! | Cosine-square | Squared cosine bell | No | Sharper falloff for blending overlapping tiles |
//! | No taper | All ones | Entire mask | Pass-through masks of matching shape |
//!
//! ## Quick Start
//!
//! ### 1D taper
//!
//! ```rust
//! use taper_rs::prelude::*;
//!
//! // Length-10 mask with a 3-sample Hanning roll-off at each end
//! let taper = hanning_taper::<f64>(10, 3)?;
//!
//! assert_eq!(taper.len(), 10);
//! assert_eq!(taper[0], 0.0);  // edges start at zero
//! assert_eq!(taper[5], 1.0);  // interior plateau is exactly one
//! # Result::<(), TaperError>::Ok(())
//! ```
//!
//! ### 2D mask
//!
//! A 1D taper replicated identically across a second (time) axis:
//!
//! ```rust
//! use taper_rs::prelude::*;
//!
//! // 5 space samples, tapered, replicated over 4 time samples
//! let mask = taper2d::<f64>(4, 5, 2, Hanning, None)?;
//!
//! assert_eq!(mask.shape(), (5, 4));
//! // every column equals the underlying 1D taper
//! assert_eq!(mask.column(0), mask.column(3));
//! # Result::<(), TaperError>::Ok(())
//! ```
//!
//! ### 3D mask
//!
//! Separable tapering: one independent 1D taper per spatial axis, combined
//! by outer product and replicated along the third axis:
//!
//! ```rust
//! use taper_rs::prelude::*;
//!
//! let mask = taper3d::<f64>(10, (8, 6), (2, 2), Hanning, None)?;
//!
//! assert_eq!(mask.shape(), (8, 6, 10));
//! // constant along the third axis
//! assert_eq!(mask.get(3, 2, 0), mask.get(3, 2, 9));
//! # Result::<(), TaperError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Constructors that validate their parameters return
//! `Result<_, TaperError>`. The only failure mode is a taper width that is
//! incompatible with the mask length (`ntap` wider than half the mask):
//!
//! ```rust
//! use taper_rs::prelude::*;
//!
//! let err = hanning_taper::<f64>(5, 3).unwrap_err();
//! assert_eq!(err, TaperError::InvalidTaperWidth { ntap: 3, max: 2 });
//! ```
//!
//! ### Plotting
//!
//! The 2D and 3D constructors accept an optional plot sink for quick visual
//! inspection. The crate defines only the [`prelude::TaperPlot`] trait;
//! rendering backends are supplied by the caller and never affect the
//! returned mask:
//!
//! ```rust
//! use taper_rs::prelude::*;
//!
//! struct StdoutPlot;
//!
//! impl TaperPlot<f64> for StdoutPlot {
//!     fn plot_curve(&self, values: &[f64], title: &str) {
//!         println!("{title}: {values:?}");
//!     }
//!
//!     fn plot_image(
//!         &self,
//!         values: &[f64],
//!         rows: usize,
//!         cols: usize,
//!         title: &str,
//!         _xlabel: &str,
//!         _ylabel: &str,
//!     ) {
//!         println!("{title}: {rows}x{cols} cells, {} values", values.len());
//!     }
//! }
//!
//! let mask = taper2d(4, 16, 4, Hanning, Some(&StdoutPlot))?;
//! assert_eq!(mask.shape(), (16, 4));
//! # Result::<(), TaperError>::Ok(())
//! ```
//!
//! ## `no_std` Support
//!
//! The crate is `no_std`-compatible (requires `alloc`). Disable the default
//! `std` feature; trigonometric functions are then provided through `libm`:
//!
//! ```toml
//! [dependencies]
//! taper-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Numerical Notes
//!
//! - All taper values lie in the closed interval [0, 1].
//! - The Hanning roll-off is cut from a full symmetric raised-cosine window
//!   of length `2*ntap - 1`, so the plateau joins the edges at exactly 1.
//! - The cosine bell is evaluated exactly at indices 0 and `nmask - 1`; its
//!   end values depend on `nmask` parity and it has no flat interior.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - interfaces and basic types.
//
// Contains the error type (`TaperError`) and the plot-sink trait
// (`TaperPlot`) used for optional visualization.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the raised-cosine (Hann) window primitive used as the building
// block for Hanning tapers.
mod math;

// Layer 3: Engine - validation and output containers.
//
// Contains parameter validation (`Validator`) and the result containers
// (`Taper2D`, `Taper3D`).
mod engine;

// Layer 4: Algorithms - taper constructors.
//
// Contains the 1D taper constructors (`hanning_taper`, `cosine_taper`), the
// `TaperType` dispatch, and the 2D/3D mask assembly.
mod algorithms;

// High-level public surface.
//
// Re-exports the taper constructors and supporting types.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard taper prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use taper_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Taper2D, Taper3D, TaperError, TaperPlot, TaperType,
        TaperType::{Cosine, CosineSquare, Hanning, NoTaper},
        cosine_taper, hanning_taper, taper1d, taper2d, taper3d,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and interfaces.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation and output containers.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal taper constructors.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
