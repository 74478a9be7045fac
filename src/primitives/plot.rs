//! Plot-sink trait for optional visualization.
//!
//! ## Purpose
//!
//! This module defines [`TaperPlot`], the interface through which the 2D and
//! 3D taper constructors render quick diagnostic plots. The crate contains
//! no rendering backend; callers inject one when they want a plot and pass
//! `None` otherwise.
//!
//! ## Design notes
//!
//! * **Injection**: Plotting is a presentation concern and is kept out of
//!   the numeric core. Constructors take `Option<&dyn TaperPlot<T>>`.
//! * **Fire-and-forget**: Sink methods return nothing and must not influence
//!   the constructed mask. A sink that fails should handle the failure on
//!   its own side.
//!
//! ## Key concepts
//!
//! * **Curve plot**: The 1D taper underlying a 2D mask, titled "Taper".
//! * **Image plot**: The y-x mask underlying a 3D mask, rendered row-major.
//!
//! ## Non-goals
//!
//! * This module does not render anything; it only defines the seam.

// ============================================================================
// Plot Sink
// ============================================================================

/// Sink for diagnostic plots emitted by the 2D and 3D taper constructors.
///
/// Implement this on a rendering backend (terminal, image file, GUI) and
/// pass `Some(&sink)` to [`crate::prelude::taper2d`] or
/// [`crate::prelude::taper3d`]. Tests typically implement it on a recorder
/// that captures the calls.
pub trait TaperPlot<T> {
    /// Render a 1D curve.
    fn plot_curve(&self, values: &[T], title: &str);

    /// Render a 2D image stored row-major as `rows` rows of `cols` values.
    ///
    /// `xlabel` labels the column axis and `ylabel` the row axis.
    fn plot_image(
        &self,
        values: &[T],
        rows: usize,
        cols: usize,
        title: &str,
        xlabel: &str,
        ylabel: &str,
    );
}
