//! Parameter validation for taper construction.
//!
//! ## Purpose
//!
//! This module checks that a requested taper width is compatible with the
//! mask it will be cut into. It is the only validation in the crate; every
//! other input is accepted as-is.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: The check runs before any allocation.
//! * **Permissive elsewhere**: Zero-length masks and `ntap == 0` are valid
//!   inputs and produce all-ones or empty results downstream.
//!
//! ## Key concepts
//!
//! * **Width Bound**: The two tapered edges occupy `2 * ntap` samples, so
//!   `ntap` may not exceed half the mask: `nmask / ntap >= 2`.
//!
//! ## Invariants
//!
//! * After a successful check with `ntap > 0`, `nmask - 2 * ntap` does not
//!   underflow.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not construct tapers or correct invalid inputs.

// Internal dependencies
use crate::primitives::errors::TaperError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for taper parameters.
///
/// Provides static methods returning `Result<(), TaperError>` that fail
/// fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate a taper width against the mask length.
    ///
    /// A width of 0 is always valid. A positive width must satisfy
    /// `nmask / ntap >= 2` so that the two tapered edges fit within the
    /// mask without overlapping.
    pub fn validate_taper_width(nmask: usize, ntap: usize) -> Result<(), TaperError> {
        if ntap > 0 && nmask / ntap < 2 {
            let max = if nmask % 2 == 0 {
                nmask / 2
            } else {
                (nmask - 1) / 2
            };
            return Err(TaperError::InvalidTaperWidth { ntap, max });
        }
        Ok(())
    }
}
