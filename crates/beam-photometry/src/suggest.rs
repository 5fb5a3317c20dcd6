//! Inverse suggestion solver.
//!
//! Given a target contrast ratio and a computed [`PhotometricResult`],
//! re-derives each input lever that would reach the target while the
//! other two stay fixed:
//!
//! ```text
//! max_ambient_lux          = effective_lumens / area / target / ambient_pct
//! required_projector_lumens = effective_ambient * target * area * ambient_pct
//! required_alr_ambient      = (effective_lumens / area) / (effective_ambient * target)
//! ```
//!
//! The solver works the projector-to-ambient illuminance quotient. The
//! three answers are independent what-if levers, not a combined
//! optimization; the caller decides which one to pull.

use beam_core::{Error, Result};

use crate::model::PhotometricResult;

/// The three independent levers that would reach a target contrast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionResult {
    /// Ambient light ceiling (raw lux, before ALR) for the target
    pub max_ambient_lux: f64,
    /// Projector output that would reach the target at current ambient
    pub required_projector_lumens: f64,
    /// ALR remaining-fraction that would reach the target
    pub required_alr_ambient: f64,
}

/// Solves the contrast relation backward for each input lever.
///
/// `ambient_percentage` is the ALR remaining-fraction the room's screen
/// applies to raw ambient light, in `(0, 1]`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for `target <= 0`, a percentage outside
///   `(0, 1]`, or a non-positive area in `result`
/// - [`Error::DivisionByZero`] when `result.effective_ambient_lux` is
///   zero; the lumens and ALR levers have no finite answer in a dark
///   room
///
/// # Example
///
/// ```rust
/// use beam_photometry::{compute, suggest, PhotometricInputs};
///
/// let result = compute(&PhotometricInputs {
///     projector_lumens: 3000.0,
///     screen_gain: 1.0,
///     color_factor: 1.0,
///     ambient_lux: 110.0,
///     alr_ambient: 0.7,
///     alr_projector: 1.0,
///     screen_area: 4.26,
/// }).unwrap();
/// let levers = suggest(30.0, &result, 0.7).unwrap();
/// assert!(levers.max_ambient_lux < 110.0);
/// ```
pub fn suggest(
    target: f64,
    result: &PhotometricResult,
    ambient_percentage: f64,
) -> Result<SuggestionResult> {
    if !(target > 0.0) {
        return Err(Error::invalid_input(
            "target contrast ratio",
            "positive",
            target,
        ));
    }
    if !(ambient_percentage > 0.0 && ambient_percentage <= 1.0) {
        return Err(Error::invalid_input(
            "ambient percentage",
            "within (0, 1]",
            ambient_percentage,
        ));
    }
    if !(result.screen_area > 0.0) {
        return Err(Error::invalid_input(
            "screen_area",
            "positive",
            result.screen_area,
        ));
    }
    if result.effective_ambient_lux == 0.0 {
        return Err(Error::division_by_zero("effective ambient light"));
    }

    let brightness = result.effective_projector_lumens / result.screen_area;
    Ok(SuggestionResult {
        max_ambient_lux: brightness / target / ambient_percentage,
        required_projector_lumens: result.effective_ambient_lux
            * target
            * result.screen_area
            * ambient_percentage,
        required_alr_ambient: brightness / (result.effective_ambient_lux * target),
    })
}
