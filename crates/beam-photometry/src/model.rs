//! Illuminance-ratio photometric model.
//!
//! Derives screen brightness and system contrast from projector output,
//! screen gain, ALR screen behavior and ambient light. All illuminance
//! values are lux over the screen area; the caller supplies the area in
//! the matching squared length unit (conventionally m²).
//!
//! # Formulas
//!
//! ```text
//! effective_projector_lumens = (projector_lumens / screen_gain) * alr_projector
//! effective_ambient_lux      = ambient_lux * alr_ambient
//! brightness_lux             = effective_projector_lumens / screen_area
//! total_effective_brightness = brightness_lux + effective_ambient_lux
//! system_contrast_ratio      = total_effective_brightness / effective_ambient_lux
//! ```
//!
//! With zero effective ambient light the contrast quotient has no finite
//! value; the result is the tagged [`ContrastRatio::Unbounded`] variant
//! rather than an error or a floating-point infinity, because a fully
//! dark room is a physically valid input.
//!
//! For the nit-level black/white variant see [`crate::nits`].

use beam_core::{Error, Result};

/// Inputs to the illuminance-ratio photometric model.
///
/// ALR factors are fractions in `[0, 1]`: `alr_ambient` is the fraction
/// of ambient light remaining after the screen's rejection, and
/// `alr_projector` the fraction of projector light usefully retained.
///
/// # Example
///
/// ```rust
/// use beam_photometry::PhotometricInputs;
///
/// let inputs = PhotometricInputs {
///     projector_lumens: 3000.0,
///     screen_gain: 1.0,
///     color_factor: 1.0,
///     ambient_lux: 110.0,
///     alr_ambient: 0.7,
///     alr_projector: 1.0,
///     screen_area: 4.26,
/// };
/// let result = beam_photometry::compute(&inputs).unwrap();
/// assert!(result.brightness_lux > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotometricInputs {
    /// Rated projector output in lumens
    pub projector_lumens: f64,
    /// Screen gain relative to reference white (typically 0.8 to 2.5)
    pub screen_gain: f64,
    /// Unitless correction for non-white reference content; carried for
    /// the nit-level derivations in [`crate::nits`]
    pub color_factor: f64,
    /// Ambient light incident on the screen, lux
    pub ambient_lux: f64,
    /// Fraction of ambient light remaining after ALR rejection, 0 to 1
    pub alr_ambient: f64,
    /// Fraction of projector light usefully retained, 0 to 1
    pub alr_projector: f64,
    /// Screen area in squared length units (conventionally m²)
    pub screen_area: f64,
}

impl PhotometricInputs {
    fn validate(&self) -> Result<()> {
        if !(self.projector_lumens > 0.0) {
            return Err(Error::invalid_photometric(
                "projector_lumens",
                "positive",
                self.projector_lumens,
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
        if !(self.ambient_lux >= 0.0) {
            return Err(Error::invalid_photometric(
                "ambient_lux",
                "non-negative",
                self.ambient_lux,
            ));
        }
        if !(0.0..=1.0).contains(&self.alr_ambient) {
            return Err(Error::invalid_photometric(
                "alr_ambient",
                "within [0, 1]",
                self.alr_ambient,
            ));
        }
        if !(0.0..=1.0).contains(&self.alr_projector) {
            return Err(Error::invalid_photometric(
                "alr_projector",
                "within [0, 1]",
                self.alr_projector,
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

/// System contrast ratio: finite quotient or the zero-ambient sentinel.
///
/// A dark room (zero effective ambient light) makes the contrast
/// quotient unbounded. That state is a tagged variant, never a
/// floating-point infinity leaking through arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContrastRatio {
    /// Finite white-plus-ambient to ambient quotient
    Finite(f64),
    /// No effective ambient light; contrast is not a finite number
    Unbounded,
}

impl ContrastRatio {
    /// The finite value, if there is one.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` for the zero-ambient sentinel.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl std::fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v:.2}:1"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Derived photometric quantities for one screen/projector/room setup.
///
/// Carries the effective inputs alongside the derived values so the
/// inverse solver in [`crate::suggest`] can consume a result directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotometricResult {
    /// Projector lumens after gain and ALR retention
    pub effective_projector_lumens: f64,
    /// Ambient lux after ALR rejection
    pub effective_ambient_lux: f64,
    /// Projector light per unit screen area, lux
    pub brightness_lux: f64,
    /// Projected brightness plus effective ambient, lux
    pub total_effective_brightness: f64,
    /// Total-to-ambient illuminance quotient
    pub system_contrast_ratio: ContrastRatio,
    /// Screen area the result was computed for
    pub screen_area: f64,
}

/// Evaluates the illuminance-ratio photometric model.
///
/// # Errors
///
/// Returns [`Error::InvalidPhotometricInput`] for non-positive
/// lumens/gain/color factor/area, negative ambient light, or ALR
/// fractions outside `[0, 1]`. Zero ambient light is valid and yields
/// [`ContrastRatio::Unbounded`].
pub fn compute(inputs: &PhotometricInputs) -> Result<PhotometricResult> {
    inputs.validate()?;

    let effective_projector_lumens =
        (inputs.projector_lumens / inputs.screen_gain) * inputs.alr_projector;
    let effective_ambient_lux = inputs.ambient_lux * inputs.alr_ambient;
    let brightness_lux = effective_projector_lumens / inputs.screen_area;
    let total_effective_brightness = brightness_lux + effective_ambient_lux;
    let system_contrast_ratio = if effective_ambient_lux > 0.0 {
        ContrastRatio::Finite(total_effective_brightness / effective_ambient_lux)
    } else {
        ContrastRatio::Unbounded
    };

    Ok(PhotometricResult {
        effective_projector_lumens,
        effective_ambient_lux,
        brightness_lux,
        total_effective_brightness,
        system_contrast_ratio,
        screen_area: inputs.screen_area,
    })
}

/// Effective viewing span at the screen's half-gain angle.
///
/// `width * tan(angle)` gives the lateral extent over which the screen
/// still delivers at least half its on-axis gain.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless `0 < angle_degrees < 90`.
pub fn half_gain_width(width: f64, angle_degrees: f64) -> Result<f64> {
    if !(width > 0.0) {
        return Err(Error::invalid_input("width", "positive", width));
    }
    if !(angle_degrees > 0.0 && angle_degrees < 90.0) {
        return Err(Error::invalid_input(
            "half-gain angle",
            "within (0, 90) degrees",
            angle_degrees,
        ));
    }
    Ok(width * angle_degrees.to_radians().tan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_inputs() -> PhotometricInputs {
        // 135in 21:9 screen (4.2572 m²), 3000 lm, 110 lux room, ALR
        // passing 70% of ambient
        PhotometricInputs {
            projector_lumens: 3000.0,
            screen_gain: 1.0,
            color_factor: 1.0,
            ambient_lux: 110.0,
            alr_ambient: 0.7,
            alr_projector: 1.0,
            screen_area: 4.257227,
        }
    }

    #[test]
    fn test_compute_reference_setup() {
        let r = compute(&reference_inputs()).unwrap();
        assert_relative_eq!(r.effective_projector_lumens, 3000.0, max_relative = 1e-12);
        assert_relative_eq!(r.effective_ambient_lux, 77.0, max_relative = 1e-12);
        assert_relative_eq!(r.brightness_lux, 704.684, max_relative = 1e-4);
        assert_relative_eq!(r.total_effective_brightness, 781.684, max_relative = 1e-4);
        let contrast = r.system_contrast_ratio.as_f64().unwrap();
        assert_relative_eq!(contrast, 781.684 / 77.0, max_relative = 1e-4);
    }

    #[test]
    fn test_gain_divides_lumens() {
        let mut inputs = reference_inputs();
        inputs.screen_gain = 1.5;
        let r = compute(&inputs).unwrap();
        assert_relative_eq!(r.effective_projector_lumens, 2000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_ambient_is_unbounded_not_error() {
        let mut inputs = reference_inputs();
        inputs.ambient_lux = 0.0;
        let r = compute(&inputs).unwrap();
        assert!(r.system_contrast_ratio.is_unbounded());
        assert!(r.system_contrast_ratio.as_f64().is_none());
    }

    #[test]
    fn test_zero_alr_ambient_is_unbounded() {
        // Perfect rejection also zeroes the denominator
        let mut inputs = reference_inputs();
        inputs.alr_ambient = 0.0;
        let r = compute(&inputs).unwrap();
        assert!(r.system_contrast_ratio.is_unbounded());
    }

    #[test]
    fn test_validation() {
        let mut inputs = reference_inputs();
        inputs.screen_gain = 0.0;
        assert!(compute(&inputs).unwrap_err().is_validation_error());

        let mut inputs = reference_inputs();
        inputs.screen_area = -1.0;
        assert!(compute(&inputs).is_err());

        let mut inputs = reference_inputs();
        inputs.alr_ambient = 1.2;
        assert!(compute(&inputs).is_err());

        let mut inputs = reference_inputs();
        inputs.alr_projector = -0.1;
        assert!(compute(&inputs).is_err());

        let mut inputs = reference_inputs();
        inputs.ambient_lux = -5.0;
        assert!(compute(&inputs).is_err());
    }

    #[test]
    fn test_half_gain_width() {
        // tan(30 deg) = 0.5774
        let w = half_gain_width(3.1518, 30.0).unwrap();
        assert_relative_eq!(w, 3.1518 * 30.0_f64.to_radians().tan(), max_relative = 1e-12);

        assert!(half_gain_width(3.0, 0.0).is_err());
        assert!(half_gain_width(3.0, 90.0).is_err());
        assert!(half_gain_width(-3.0, 30.0).is_err());
    }

    #[test]
    fn test_contrast_display() {
        assert_eq!(ContrastRatio::Finite(10.152).to_string(), "10.15:1");
        assert_eq!(ContrastRatio::Unbounded.to_string(), "unbounded");
    }
}
