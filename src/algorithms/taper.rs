//! Taper constructors and type dispatch.
//!
//! ## Purpose
//!
//! This module builds the tapering masks: the 1D Hanning and cosine
//! constructors, the [`TaperType`] dispatch shared by the higher-dimensional
//! constructors, and the 2D/3D mask assembly.
//!
//! ## Design notes
//!
//! * **Closed dispatch**: `TaperType` is an exhaustive enum; the "no taper"
//!   fallback is an explicit variant (`NoTaper`), not an implicit else.
//! * **Separable masks**: The 3D mask is the outer product of two
//!   independent 1D tapers, not a jointly evaluated 2D formula.
//! * **Replication**: The 2D mask repeats the 1D taper along the time axis;
//!   the 3D mask repeats the y-x mask along the time axis.
//! * **Plotting**: The 2D and 3D constructors accept an optional plot sink.
//!   Plots never influence the returned mask.
//!
//! ## Key concepts
//!
//! * **Hanning taper**: Raised-cosine roll-off over `ntap` samples at each
//!   edge, flat unit plateau in between.
//! * **Cosine(-square) taper**: Full-length bell with no plateau, peaking at
//!   the center index `(nmask - 1) / 2`.
//!
//! ## Invariants
//!
//! * All taper values lie in [0, 1].
//! * A Hanning taper is exactly 1 on `[ntap, nmask - ntap)`.
//! * Cosine tapers are symmetric about the center index.
//!
//! ## Non-goals
//!
//! * This module does not apply masks to data; it only constructs them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::repeat_n;
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::engine::output::{Taper2D, Taper3D};
use crate::engine::validator::Validator;
use crate::math::window::hann_window;
use crate::primitives::errors::TaperError;
use crate::primitives::plot::TaperPlot;

// ============================================================================
// Taper Type
// ============================================================================

/// Taper profile selector for the 2D and 3D constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaperType {
    /// Hanning roll-off at the edges, flat unit plateau in between.
    #[default]
    Hanning,

    /// Full-length cosine bell.
    Cosine,

    /// Full-length cosine-squared bell (sharper falloff).
    CosineSquare,

    /// No tapering: an all-ones mask. Taper widths are ignored.
    NoTaper,
}

// ============================================================================
// 1D Constructors
// ============================================================================

/// 1D Hanning taper.
///
/// Create a unit mask of length `nmask` with Hanning tapering over `ntap`
/// samples at each edge. The edges are cut from a full symmetric Hann
/// window of length `2*ntap - 1`, so the interior plateau is exactly 1.
///
/// A width of 0 produces an all-ones mask. A positive width must satisfy
/// `nmask / ntap >= 2`; otherwise [`TaperError::InvalidTaperWidth`] is
/// returned.
///
/// # Example
///
/// ```
/// use taper_rs::prelude::*;
///
/// let taper = hanning_taper::<f64>(10, 3)?;
/// assert_eq!(taper[0], 0.0);
/// assert_eq!(&taper[3..7], &[1.0, 1.0, 1.0, 1.0]);
/// # Result::<(), TaperError>::Ok(())
/// ```
pub fn hanning_taper<T: Float + FloatConst>(
    nmask: usize,
    ntap: usize,
) -> Result<Vec<T>, TaperError> {
    Validator::validate_taper_width(nmask, ntap)?;

    // Rising edge: first ntap samples of a (2*ntap - 1)-point Hann window.
    let win_len = if ntap == 0 { 0 } else { 2 * ntap - 1 };
    let win = hann_window::<T>(win_len);
    let rising = &win[..ntap];

    let mut taper = Vec::with_capacity(nmask);
    taper.extend_from_slice(rising);
    taper.extend(repeat_n(T::one(), nmask - 2 * ntap));
    taper.extend(rising.iter().rev());
    Ok(taper)
}

/// 1D cosine or cosine-square taper.
///
/// Create a full-length bell of `nmask` samples peaking at the center index
/// `(nmask - 1) / 2`:
///
/// ```text
/// taper[i] = (0.5 * (cos((i - (nmask-1)/2) * pi / ((nmask-1)/2)) + 1))^e
/// ```
///
/// with `e = 2` when `square` is true and `e = 1` otherwise. There is no
/// flat interior; the values at the very ends depend on `nmask` parity.
///
/// `nmask == 1` returns `[1]` (the formula's limit at the center) and
/// `nmask == 0` returns an empty vector.
///
/// # Example
///
/// ```
/// use taper_rs::prelude::*;
///
/// let taper = cosine_taper::<f64>(5, false);
/// assert_eq!(taper[2], 1.0);
/// assert!((taper[1] - 0.5).abs() < 1e-12);
/// ```
pub fn cosine_taper<T: Float + FloatConst>(nmask: usize, square: bool) -> Vec<T> {
    if nmask == 0 {
        return Vec::new();
    }
    if nmask == 1 {
        return vec![T::one()];
    }

    let half = T::from(0.5).unwrap();
    let center = T::from(nmask - 1).unwrap() * half;

    (0..nmask)
        .map(|i| {
            let phase = (T::from(i).unwrap() - center) * T::PI() / center;
            let v = half * (phase.cos() + T::one());
            if square { v * v } else { v }
        })
        .collect()
}

// ============================================================================
// Type Dispatch
// ============================================================================

/// Build a 1D taper of length `nmask` for the given [`TaperType`].
///
/// This is the dispatch shared by [`taper2d`] and [`taper3d`]:
/// [`TaperType::Hanning`] delegates to [`hanning_taper`] with `ntap`,
/// the cosine variants delegate to [`cosine_taper`] (which ignores `ntap`),
/// and [`TaperType::NoTaper`] yields an all-ones vector.
pub fn taper1d<T: Float + FloatConst>(
    nmask: usize,
    ntap: usize,
    taper_type: TaperType,
) -> Result<Vec<T>, TaperError> {
    match taper_type {
        TaperType::Hanning => hanning_taper(nmask, ntap),
        TaperType::Cosine => Ok(cosine_taper(nmask, false)),
        TaperType::CosineSquare => Ok(cosine_taper(nmask, true)),
        TaperType::NoTaper => Ok(vec![T::one(); nmask]),
    }
}

// ============================================================================
// 2D Mask
// ============================================================================

/// 2D taper mask of shape `(nmask, nt)`.
///
/// Builds a 1D taper of length `nmask` according to `taper_type` and
/// replicates it identically across `nt` columns. Errors from the 1D
/// constructor propagate unchanged.
///
/// When `plot` is supplied, the underlying 1D curve is rendered with the
/// title "Taper". The plot never affects the returned mask.
///
/// # Example
///
/// ```
/// use taper_rs::prelude::*;
///
/// let mask = taper2d::<f64>(4, 5, 0, NoTaper, None)?;
/// assert!(mask.as_slice().iter().all(|&v| v == 1.0));
/// # Result::<(), TaperError>::Ok(())
/// ```
pub fn taper2d<T: Float + FloatConst>(
    nt: usize,
    nmask: usize,
    ntap: usize,
    taper_type: TaperType,
    plot: Option<&dyn TaperPlot<T>>,
) -> Result<Taper2D<T>, TaperError> {
    let tpr = taper1d::<T>(nmask, ntap, taper_type)?;

    // Replicate the taper along the time axis.
    let mut values = Vec::with_capacity(nmask * nt);
    for &w in &tpr {
        values.extend(repeat_n(w, nt));
    }

    if let Some(sink) = plot {
        sink.plot_curve(&tpr, "Taper");
    }

    Ok(Taper2D { values, nmask, nt })
}

// ============================================================================
// 3D Mask
// ============================================================================

/// 3D taper mask of shape `(nmask_y, nmask_x, nt)`.
///
/// Builds one 1D taper per spatial axis (y first) using the same dispatch
/// as [`taper2d`], combines them via outer product into a y-x mask, and
/// replicates that mask identically across `nt` slices along the third
/// axis. Validation runs independently per axis and errors propagate
/// unchanged.
///
/// When `plot` is supplied, the y-x mask is rendered as a row-major image
/// titled "Taper in y-x slice" with axis labels "x" and "y". The plot never
/// affects the returned mask.
///
/// # Example
///
/// ```
/// use taper_rs::prelude::*;
///
/// let mask = taper3d::<f64>(3, (8, 6), (2, 2), Hanning, None)?;
/// assert_eq!(mask.shape(), (8, 6, 3));
/// # Result::<(), TaperError>::Ok(())
/// ```
pub fn taper3d<T: Float + FloatConst>(
    nt: usize,
    nmask: (usize, usize),
    ntap: (usize, usize),
    taper_type: TaperType,
    plot: Option<&dyn TaperPlot<T>>,
) -> Result<Taper3D<T>, TaperError> {
    let (nmask_y, nmask_x) = nmask;
    let (ntap_y, ntap_x) = ntap;

    let tpr_y = taper1d::<T>(nmask_y, ntap_y, taper_type)?;
    let tpr_x = taper1d::<T>(nmask_x, ntap_x, taper_type)?;

    // Outer product of the axis tapers, replicated along the time axis.
    let mut values = Vec::with_capacity(nmask_y * nmask_x * nt);
    for &wy in &tpr_y {
        for &wx in &tpr_x {
            values.extend(repeat_n(wy * wx, nt));
        }
    }

    if let Some(sink) = plot {
        let yx: Vec<T> = tpr_y
            .iter()
            .flat_map(|&wy| tpr_x.iter().map(move |&wx| wy * wx))
            .collect();
        sink.plot_image(&yx, nmask_y, nmask_x, "Taper in y-x slice", "x", "y");
    }

    Ok(Taper3D {
        values,
        nmask_y,
        nmask_x,
        nt,
    })
}
