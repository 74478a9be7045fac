//! Error types for taper construction.
//!
//! ## Purpose
//!
//! This module defines [`TaperError`], the error type returned by taper
//! constructors when parameters are incompatible.
//!
//! ## Design notes
//!
//! * **Single failure mode**: The only validated constraint is the taper
//!   width against the mask length. All other inputs are accepted (sizes are
//!   `usize`, so negative values are unrepresentable; zero-length masks
//!   produce empty results).
//! * **Diagnostic payload**: The error carries both the offending width and
//!   the maximum permitted value so callers can report or correct it.
//!
//! ## Invariants
//!
//! * Errors are never caught internally; they propagate to the caller.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Error raised when taper parameters are incompatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TaperError {
    /// The requested taper width is too large for the mask length.
    ///
    /// Raised when `ntap > 0` and `nmask / ntap < 2`, i.e. the two tapered
    /// edges would overlap or exceed half the mask.
    InvalidTaperWidth {
        /// The offending taper width.
        ntap: usize,

        /// The maximum permitted taper width for the given mask length.
        max: usize,
    },
}

impl fmt::Display for TaperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaperError::InvalidTaperWidth { ntap, max } => {
                write!(f, "Invalid ntap: {} (must be at most {})", ntap, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TaperError {}
