//! Output containers for 2D and 3D taper masks.
//!
//! ## Purpose
//!
//! This module defines [`Taper2D`] and [`Taper3D`], the result types
//! returned by the 2D and 3D constructors. Both store their values in a
//! flat, row-major vector alongside the mask shape.
//!
//! ## Design notes
//!
//! * **Flat storage**: `Taper2D` is laid out `[nmask][nt]`; `Taper3D` is
//!   laid out `[y][x][t]`. The replicated axis is contiguous, so slices
//!   along it are trivially identical.
//! * **Owned results**: Each constructor call allocates a fresh container;
//!   nothing is shared between calls.
//! * **Display**: A compact shape summary, not the full value grid.
//!
//! ## Invariants
//!
//! * `values.len()` equals the product of the shape dimensions.
//! * All values lie in [0, 1].
//! * Every column of a `Taper2D` equals the underlying 1D taper; every time
//!   slice of a `Taper3D` equals the underlying y-x mask.
//!
//! ## Non-goals
//!
//! * These containers do not perform calculations; they only store results.
//! * No general-purpose tensor arithmetic is provided.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// ============================================================================
// 2D Mask
// ============================================================================

/// 2D taper mask of shape `(nmask, nt)`.
///
/// Rows index the tapered (space) axis; columns index the replicated (time)
/// axis. Every column is identical to the underlying 1D taper.
#[derive(Debug, Clone, PartialEq)]
pub struct Taper2D<T> {
    /// Mask values, row-major: `values[i * nt + j]` is row `i`, column `j`.
    pub values: Vec<T>,

    /// Number of space samples (rows).
    pub nmask: usize,

    /// Number of time samples (columns).
    pub nt: usize,
}

impl<T: Float> Taper2D<T> {
    /// Mask shape as `(nmask, nt)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nmask, self.nt)
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nmask` or `j >= nt`.
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nmask && j < self.nt, "index out of bounds");
        self.values[i * self.nt + j]
    }

    /// Row `i` as a contiguous slice of `nt` values.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nmask`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nmask, "row index out of bounds");
        &self.values[i * self.nt..(i + 1) * self.nt]
    }

    /// Column `j` gathered into a vector of `nmask` values.
    ///
    /// # Panics
    ///
    /// Panics if `j >= nt`.
    pub fn column(&self, j: usize) -> Vec<T> {
        assert!(j < self.nt, "column index out of bounds");
        (0..self.nmask).map(|i| self.values[i * self.nt + j]).collect()
    }

    /// All values as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Total number of values (`nmask * nt`).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the mask contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> fmt::Display for Taper2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "2D taper mask: {} x {}", self.nmask, self.nt)
    }
}

// ============================================================================
// 3D Mask
// ============================================================================

/// 3D taper mask of shape `(nmask_y, nmask_x, nt)`.
///
/// The first two axes are the independently tapered spatial axes; the third
/// is the replicated (time) axis. Every time slice equals the outer product
/// of the two 1D tapers.
#[derive(Debug, Clone, PartialEq)]
pub struct Taper3D<T> {
    /// Mask values, row-major `[y][x][t]`:
    /// `values[(y * nmask_x + x) * nt + t]`.
    pub values: Vec<T>,

    /// Number of space samples along the first (y) axis.
    pub nmask_y: usize,

    /// Number of space samples along the second (x) axis.
    pub nmask_x: usize,

    /// Number of time samples along the third axis.
    pub nt: usize,
}

impl<T: Float> Taper3D<T> {
    /// Mask shape as `(nmask_y, nmask_x, nt)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nmask_y, self.nmask_x, self.nt)
    }

    /// Value at `(y, x, t)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn get(&self, y: usize, x: usize, t: usize) -> T {
        assert!(
            y < self.nmask_y && x < self.nmask_x && t < self.nt,
            "index out of bounds"
        );
        self.values[(y * self.nmask_x + x) * self.nt + t]
    }

    /// The y-x mask at time `t`, gathered row-major into a vector of
    /// `nmask_y * nmask_x` values.
    ///
    /// # Panics
    ///
    /// Panics if `t >= nt`.
    pub fn slice(&self, t: usize) -> Vec<T> {
        assert!(t < self.nt, "slice index out of bounds");
        (0..self.nmask_y * self.nmask_x)
            .map(|yx| self.values[yx * self.nt + t])
            .collect()
    }

    /// All values as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Total number of values (`nmask_y * nmask_x * nt`).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the mask contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> fmt::Display for Taper3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "3D taper mask: {} x {} x {}",
            self.nmask_y, self.nmask_x, self.nt
        )
    }
}
