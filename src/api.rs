//! High-level API for taper generation.
//!
//! ## Purpose
//!
//! This module curates the public surface of the crate: the four taper
//! constructors, the shared dispatch, and the supporting types.
//!
//! ## Design notes
//!
//! * **Flat surface**: The crate is a small set of pure functions; the API
//!   layer is a re-export boundary, not an orchestration layer.
//! * **Stability**: Internal module paths may move; the paths re-exported
//!   here are the supported ones.
//!
//! ## Key concepts
//!
//! * **Constructors**: [`hanning_taper`], [`cosine_taper`], [`taper2d`],
//!   [`taper3d`], plus the shared [`taper1d`] dispatch.
//! * **Types**: [`TaperType`] selects the profile, [`Taper2D`]/[`Taper3D`]
//!   hold the results, [`TaperError`] reports invalid widths, and
//!   [`TaperPlot`] is the optional plot sink.

// Publicly re-exported functions
pub use crate::algorithms::taper::{cosine_taper, hanning_taper, taper1d, taper2d, taper3d};

// Publicly re-exported types
pub use crate::algorithms::taper::TaperType;
pub use crate::engine::output::{Taper2D, Taper3D};
pub use crate::primitives::errors::TaperError;
pub use crate::primitives::plot::TaperPlot;
