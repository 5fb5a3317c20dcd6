//! # beam-photometry
//!
//! Photometric model for projection setups: brightness, black/white
//! levels, contrast ratios and inverse "what must change" suggestions.
//!
//! # The Two Contrast Models
//!
//! | Operation | Question answered | Output |
//! |-----------|-------------------|--------|
//! | [`compute`] | How does projected light compete with the room? | lux quantities, illuminance-quotient contrast |
//! | [`compute_nit_levels`] | What luminance floor/ceiling does the screen reach? | whole-nit levels, panel-style contrast |
//!
//! The two are deliberately independent operations with separate input
//! records; they answer different questions and are never reconciled.
//! Zero ambient light is valid for the first (tagged
//! [`ContrastRatio::Unbounded`] sentinel) and an error for the second
//! (a ratio against a zero black level has no value).
//!
//! # Usage
//!
//! ```rust
//! use beam_photometry::{compute, suggest, PhotometricInputs};
//!
//! let result = compute(&PhotometricInputs {
//!     projector_lumens: 3000.0,
//!     screen_gain: 1.0,
//!     color_factor: 1.0,
//!     ambient_lux: 110.0,
//!     alr_ambient: 0.7,
//!     alr_projector: 1.0,
//!     screen_area: 4.26,
//! }).unwrap();
//!
//! // What would it take to hit 30:1?
//! let levers = suggest(30.0, &result, 0.7).unwrap();
//! ```
//!
//! # Dependencies
//!
//! - [`beam-core`] - Error taxonomy, geometry types
//!
//! # Used By
//!
//! - `beam-cli` - The `report`, `contrast` and `suggest` subcommands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod model;
pub mod nits;
pub mod suggest;

pub use model::{compute, half_gain_width, ContrastRatio, PhotometricInputs, PhotometricResult};
pub use nits::{
    apply_alr_rejection, apply_lumen_reduction, compute_nit_levels, NitLevelInputs, NitLevels,
};
pub use suggest::{suggest, SuggestionResult};
