//! # beam-core
//!
//! Core types for projection screen and photometry calculations.
//!
//! This crate provides the foundational types used throughout the beam-rs
//! workspace:
//!
//! - [`AspectRatio`] - Validated width:height proportion with `"W:H"` parsing
//! - [`ScreenGeometry`] - Diagonal/width/height/area, resolved and derived
//! - [`Error`], [`Result`] - The shared error taxonomy
//! - [`units`] - Length-unit constants and conversions
//!
//! ## Design
//!
//! Every operation is a pure function of its inputs: validation happens at
//! entry, results are immutable value records, and nothing here performs
//! I/O or holds state. Calculations are unit-agnostic; callers pick one
//! length unit per call and convert at the boundary with [`units`].
//!
//! ## Crate Structure
//!
//! This crate is the foundation of beam-rs and has no internal
//! dependencies. All other beam crates depend on `beam-core`:
//!
//! ```text
//! beam-core (this crate)
//!    ^
//!    |
//!    +-- beam-photometry (brightness, contrast, suggestions)
//!    +-- beam-viewing (viewing-distance standards)
//!    +-- beam-profiles (screen/projector databases, settings)
//!    +-- beam-cli (the beam binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aspect;
pub mod error;
pub mod geometry;
pub mod units;

// Re-exports for convenience
pub use aspect::AspectRatio;
pub use error::{Error, Result};
pub use geometry::ScreenGeometry;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use beam_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aspect::AspectRatio;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::ScreenGeometry;
    pub use crate::units;
}
