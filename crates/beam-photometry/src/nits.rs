//! Nit-level black/white contrast model.
//!
//! The stricter sibling of [`crate::model`]: instead of an illuminance
//! quotient it derives the screen's luminance floor and ceiling in nits
//! (cd/m²) and the panel-style contrast between them.
//!
//! # Formulas
//!
//! ```text
//! black_level    = ceil((effective_ambient_lux / pi) * gain * color_factor)
//! white_level    = ceil((effective_lumens / area) * gain * color_factor / pi)
//! contrast_ratio = round((white_level + black_level) / black_level, 1 decimal)
//! ```
//!
//! The pi division converts lux incident on a diffuse surface into
//! reflected luminance. Levels are ceiled to whole nits. A zero black
//! level makes the quotient undefined and is reported as
//! [`DivisionByZero`](beam_core::Error::DivisionByZero), never coerced.
//!
//! The two contrast models answer different questions and are kept as
//! independently callable operations; nothing reconciles their outputs.

use std::f64::consts::PI;

use beam_core::{Error, Result};

/// Inputs to the nit-level contrast model.
///
/// Works from already-reduced quantities: ambient light after ALR
/// rejection and projector lumens after any output reduction. Use
/// [`apply_alr_rejection`] and [`apply_lumen_reduction`] to derive them
/// from the percentage-based profile fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NitLevelInputs {
    /// Projector lumens after output reduction
    pub effective_lumens: f64,
    /// Ambient lux on the screen after ALR rejection
    pub effective_ambient_lux: f64,
    /// Screen gain relative to reference white
    pub screen_gain: f64,
    /// Unitless correction for non-white reference content
    pub color_factor: f64,
    /// Screen area, m²
    pub screen_area: f64,
}

impl NitLevelInputs {
    fn validate(&self) -> Result<()> {
        if !(self.effective_lumens > 0.0) {
            return Err(Error::invalid_photometric(
                "effective_lumens",
                "positive",
                self.effective_lumens,
            ));
        }
        if !(self.effective_ambient_lux >= 0.0) {
            return Err(Error::invalid_photometric(
                "effective_ambient_lux",
                "non-negative",
                self.effective_ambient_lux,
            ));
        }
        if !(self.screen_gain > 0.0) {
            return Err(Error::invalid_photometric(
                "screen_gain",
                "positive",
                self.screen_gain,
            ));
        }
        if !(self.color_factor > 0.0) {
            return Err(Error::invalid_photometric(
                "color_factor",
                "positive",
                self.color_factor,
            ));
        }
        if !(self.screen_area > 0.0) {
            return Err(Error::invalid_photometric(
                "screen_area",
                "positive",
                self.screen_area,
            ));
        }
        Ok(())
    }
}

/// Nit-level result: luminance floor, ceiling and their contrast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NitLevels {
    /// Screen luminance with the projector off, whole nits
    pub black_level: u32,
    /// Screen luminance at full white, whole nits
    pub white_level: u32,
    /// `(white + black) / black`, rounded to one decimal
    pub contrast_ratio: f64,
}

/// Evaluates the nit-level contrast model.
///
/// # Errors
///
/// Returns [`Error::InvalidPhotometricInput`] for out-of-domain inputs
/// and [`Error::DivisionByZero`] when the black level comes out zero
/// (no ambient light at all); a ratio against a zero floor has no value
/// to report.
pub fn compute_nit_levels(inputs: &NitLevelInputs) -> Result<NitLevels> {
    inputs.validate()?;

    let black = ((inputs.effective_ambient_lux / PI) * inputs.screen_gain * inputs.color_factor)
        .ceil();
    let white = ((inputs.effective_lumens / inputs.screen_area)
        * inputs.screen_gain
        * inputs.color_factor
        / PI)
        .ceil();

    if black == 0.0 {
        return Err(Error::division_by_zero("black level"));
    }

    let contrast_ratio = round1((white + black) / black);
    Ok(NitLevels {
        black_level: black as u32,
        white_level: white as u32,
        contrast_ratio,
    })
}

/// Ambient light remaining after an ALR screen rejects `rejection_pct`
/// percent of it.
///
/// Profile databases store rejection as a 0 to 100 percentage; this is
/// the one place that convention is converted.
///
/// # Errors
///
/// Returns [`Error::InvalidPhotometricInput`] for a negative ambient
/// level or a percentage outside `[0, 100]`.
pub fn apply_alr_rejection(ambient_lux: f64, rejection_pct: f64) -> Result<f64> {
    if !(ambient_lux >= 0.0) {
        return Err(Error::invalid_photometric(
            "ambient_lux",
            "non-negative",
            ambient_lux,
        ));
    }
    if !(0.0..=100.0).contains(&rejection_pct) {
        return Err(Error::invalid_photometric(
            "alr rejection percentage",
            "within [0, 100]",
            rejection_pct,
        ));
    }
    Ok(ambient_lux * (1.0 - rejection_pct / 100.0))
}

/// Projector lumens remaining after an output reduction of
/// `reduction_pct` percent (eco mode, filter loss, aging).
///
/// # Errors
///
/// Returns [`Error::InvalidPhotometricInput`] for non-positive lumens or
/// a percentage outside `[0, 100]`.
pub fn apply_lumen_reduction(lumens: f64, reduction_pct: f64) -> Result<f64> {
    if !(lumens > 0.0) {
        return Err(Error::invalid_photometric("lumens", "positive", lumens));
    }
    if !(0.0..=100.0).contains(&reduction_pct) {
        return Err(Error::invalid_photometric(
            "lumen reduction percentage",
            "within [0, 100]",
            reduction_pct,
        ));
    }
    Ok(lumens * (1.0 - reduction_pct / 100.0))
}

#[inline]
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        // 110 lux room, 30% rejection ALR screen, 3000 lm on a
        // 135in 21:9 screen (4.2572 m²)
        let inputs = NitLevelInputs {
            effective_lumens: 3000.0,
            effective_ambient_lux: apply_alr_rejection(110.0, 30.0).unwrap(),
            screen_gain: 1.0,
            color_factor: 1.0,
            screen_area: 4.257227,
        };
        let levels = compute_nit_levels(&inputs).unwrap();
        // ceil(77 / pi) and ceil((3000 / 4.2572) / pi)
        assert_eq!(levels.black_level, 25);
        assert_eq!(levels.white_level, 225);
        assert_relative_eq!(levels.contrast_ratio, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_contrast_rounded_to_one_decimal() {
        let inputs = NitLevelInputs {
            effective_lumens: 2000.0,
            effective_ambient_lux: 50.0,
            screen_gain: 1.2,
            color_factor: 0.9,
            screen_area: 3.0,
        };
        let levels = compute_nit_levels(&inputs).unwrap();
        assert!(levels.black_level > 0);
        assert!(levels.white_level > 0);
        let scaled = levels.contrast_ratio * 10.0;
        assert_relative_eq!(scaled, scaled.round(), max_relative = 1e-9);
    }

    #[test]
    fn test_zero_ambient_is_division_by_zero() {
        let inputs = NitLevelInputs {
            effective_lumens: 3000.0,
            effective_ambient_lux: 0.0,
            screen_gain: 1.0,
            color_factor: 1.0,
            screen_area: 4.26,
        };
        let err = compute_nit_levels(&inputs).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_validation() {
        let good = NitLevelInputs {
            effective_lumens: 3000.0,
            effective_ambient_lux: 77.0,
            screen_gain: 1.0,
            color_factor: 1.0,
            screen_area: 4.26,
        };

        let mut bad = good;
        bad.screen_gain = -1.0;
        assert!(compute_nit_levels(&bad).unwrap_err().is_validation_error());

        let mut bad = good;
        bad.screen_area = 0.0;
        assert!(compute_nit_levels(&bad).is_err());

        let mut bad = good;
        bad.color_factor = 0.0;
        assert!(compute_nit_levels(&bad).is_err());
    }

    #[test]
    fn test_alr_rejection() {
        assert_relative_eq!(
            apply_alr_rejection(110.0, 30.0).unwrap(),
            77.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(apply_alr_rejection(110.0, 0.0).unwrap(), 110.0);
        assert_relative_eq!(apply_alr_rejection(110.0, 100.0).unwrap(), 0.0);
        assert!(apply_alr_rejection(110.0, 101.0).is_err());
        assert!(apply_alr_rejection(-1.0, 30.0).is_err());
    }

    #[test]
    fn test_lumen_reduction() {
        assert_relative_eq!(
            apply_lumen_reduction(3000.0, 25.0).unwrap(),
            2250.0,
            max_relative = 1e-12
        );
        assert!(apply_lumen_reduction(0.0, 25.0).is_err());
        assert!(apply_lumen_reduction(3000.0, -5.0).is_err());
    }
}
