//! Raised-cosine (Hann) window generation.
//!
//! ## Purpose
//!
//! This module provides the symmetric Hann window used as the building block
//! for Hanning tapers. The first half of a `2*ntap - 1`-point window forms
//! the rising edge of a taper; its mirror forms the falling edge.
//!
//! ## Design notes
//!
//! * **Symmetric formulation**: `w[k] = 0.5 * (1 - cos(2*pi*k / (len - 1)))`
//!   for `k` in `[0, len)`. The window starts and ends at exactly 0 and
//!   peaks at exactly 1 for odd lengths.
//! * **Degenerate lengths**: A zero-length request yields an empty vector
//!   and a one-point window is `[1]`, matching the numpy convention.
//!
//! ## Invariants
//!
//! * All window values lie in [0, 1].
//! * The window is symmetric: `w[k] == w[len - 1 - k]`.
//!
//! ## Non-goals
//!
//! * This module does not provide periodic (FFT) window formulations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, FloatConst};

// ============================================================================
// Hann Window
// ============================================================================

/// Generate a symmetric Hann window of the given length.
///
/// # Formula
///
/// ```text
/// w[k] = 0.5 * (1 - cos(2*pi*k / (len - 1)))    k = 0, ..., len - 1
/// ```
pub fn hann_window<T: Float + FloatConst>(len: usize) -> Vec<T> {
    if len == 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![T::one()];
    }

    let half = T::from(0.5).unwrap();
    let denom = T::from(len - 1).unwrap();

    (0..len)
        .map(|k| {
            let phase = T::from(2).unwrap() * T::PI() * T::from(k).unwrap() / denom;
            half * (T::one() - phase.cos())
        })
        .collect()
}
