//! # beam-viewing
//!
//! Viewing-distance recommendations from published display-sizing
//! standards.
//!
//! Each standard expresses its recommendation as a fixed multiple of a
//! screen dimension:
//!
//! | Standard | Min x | Max x | Basis |
//! |----------|-------|-------|-------|
//! | DISCAS | 1.5 | 2.0 | height |
//! | SMPTE | none | 1.6 | height |
//! | THX | none | 1.0 | diagonal |
//! | THX max | none | 1.2 | diagonal |
//!
//! [`recommend`] applies the table to a resolved [`ScreenGeometry`];
//! distances come out in the geometry's length unit.
//!
//! [`minimum_screen_for`] runs the DISCAS sizing relation backward: given
//! a seating distance, what is the smallest screen worth installing?
//! That variant uses the closer-viewing sizing multipliers (height ×8
//! for general content, ×4 for detail-critical content), which are a
//! distinct standard from the 1.5/2.0 range above.
//!
//! # Usage
//!
//! ```rust
//! use beam_core::{AspectRatio, ScreenGeometry};
//! use beam_viewing::{minimum_screen_for, recommend, ContentDetailClass};
//!
//! let screen = ScreenGeometry::resolve(135.0, &AspectRatio::ULTRAWIDE).unwrap();
//! let distances = recommend(&screen, ContentDetailClass::General);
//! assert_eq!(distances.len(), 4);
//!
//! // Sitting 20 ft away: what is the minimum worthwhile 16:9 screen?
//! let min = minimum_screen_for(20.0, &AspectRatio::HDTV, ContentDetailClass::General).unwrap();
//! assert!((min.height - 30.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`beam-core`] - Geometry types, error taxonomy, unit constants
//!
//! # Used By
//!
//! - `beam-cli` - The `viewing` and `screen-size` subcommands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use beam_core::{units, AspectRatio, Error, Result, ScreenGeometry};

/// DISCAS minimum comfortable distance, multiples of screen height.
pub const DISCAS_MIN_HEIGHT_FACTOR: f64 = 1.5;

/// DISCAS maximum recommended distance, multiples of screen height.
pub const DISCAS_MAX_HEIGHT_FACTOR: f64 = 2.0;

/// SMPTE recommended distance, multiples of screen height.
pub const SMPTE_HEIGHT_FACTOR: f64 = 1.6;

/// THX recommended distance, multiples of screen diagonal.
pub const THX_DIAGONAL_FACTOR: f64 = 1.0;

/// THX maximum acceptable distance, multiples of screen diagonal.
pub const THX_MAX_DIAGONAL_FACTOR: f64 = 1.2;

/// DISCAS sizing multiplier for general content: distance over 8 screen
/// heights wastes the image.
pub const DISCAS_SIZING_GENERAL: f64 = 8.0;

/// DISCAS sizing multiplier for detail-critical content; detailed
/// material demands a closer seat or a larger screen.
pub const DISCAS_SIZING_DETAILED: f64 = 4.0;

/// Content detail class for DISCAS-style sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentDetailClass {
    /// Film and television material
    #[default]
    General,
    /// Detail-critical material (fine text, simulation, monitoring)
    Detailed,
}

impl ContentDetailClass {
    /// The sizing multiplier this class selects.
    #[inline]
    pub const fn sizing_multiplier(&self) -> f64 {
        match self {
            Self::General => DISCAS_SIZING_GENERAL,
            Self::Detailed => DISCAS_SIZING_DETAILED,
        }
    }
}

impl std::fmt::Display for ContentDetailClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Detailed => write!(f, "detailed"),
        }
    }
}

/// A named display-sizing standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewingStandard {
    /// DISCAS height-multiple range, tagged with the content class
    Discas(ContentDetailClass),
    /// SMPTE single recommended distance
    Smpte,
    /// THX recommended distance
    Thx,
    /// THX maximum acceptable distance
    ThxMax,
}

impl ViewingStandard {
    /// Canonical name of the standard, e.g. `"DISCAS-general"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Discas(ContentDetailClass::General) => "DISCAS-general",
            Self::Discas(ContentDetailClass::Detailed) => "DISCAS-detailed",
            Self::Smpte => "SMPTE",
            Self::Thx => "THX",
            Self::ThxMax => "THX-max",
        }
    }
}

impl std::fmt::Display for ViewingStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A standard's recommended distance range, in the geometry's unit.
///
/// Single-distance standards (SMPTE, THX) carry no minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRange {
    /// The standard this range comes from
    pub standard: ViewingStandard,
    /// Minimum comfortable distance, if the standard defines one
    pub min: Option<f64>,
    /// Maximum (or single) recommended distance
    pub max: f64,
}

/// Applies the standards table to a resolved screen geometry.
///
/// Returns one [`DistanceRange`] per table row, in table order. The
/// detail class names the DISCAS row; the 1.5/2.0 range itself does not
/// vary by class (the class matters for the inverse sizing query,
/// [`minimum_screen_for`]).
pub fn recommend(geometry: &ScreenGeometry, detail: ContentDetailClass) -> Vec<DistanceRange> {
    vec![
        DistanceRange {
            standard: ViewingStandard::Discas(detail),
            min: Some(geometry.height * DISCAS_MIN_HEIGHT_FACTOR),
            max: geometry.height * DISCAS_MAX_HEIGHT_FACTOR,
        },
        DistanceRange {
            standard: ViewingStandard::Smpte,
            min: None,
            max: geometry.height * SMPTE_HEIGHT_FACTOR,
        },
        DistanceRange {
            standard: ViewingStandard::Thx,
            min: None,
            max: geometry.diagonal * THX_DIAGONAL_FACTOR,
        },
        DistanceRange {
            standard: ViewingStandard::ThxMax,
            min: None,
            max: geometry.diagonal * THX_MAX_DIAGONAL_FACTOR,
        },
    ]
}

/// Smallest screen worth installing at a given seating distance.
///
/// Solves the DISCAS sizing relation backward: the minimum height in
/// inches is the distance (feet, converted to inches) over the class's
/// sizing multiplier; width and diagonal follow from the aspect ratio.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive distance.
///
/// # Example
///
/// ```rust
/// use beam_core::AspectRatio;
/// use beam_viewing::{minimum_screen_for, ContentDetailClass};
///
/// let min = minimum_screen_for(20.0, &AspectRatio::HDTV, ContentDetailClass::General).unwrap();
/// assert!((min.height - 30.0).abs() < 1e-9);
/// assert!((min.width - 160.0 / 3.0).abs() < 1e-9);
/// ```
pub fn minimum_screen_for(
    distance_feet: f64,
    ratio: &AspectRatio,
    detail: ContentDetailClass,
) -> Result<ScreenGeometry> {
    if !(distance_feet > 0.0) {
        return Err(Error::invalid_input(
            "viewing distance",
            "positive",
            distance_feet,
        ));
    }
    let min_height = units::feet_to_inches(distance_feet) / detail.sizing_multiplier();
    // resolve() rebuilds width and area from the implied diagonal
    let diagonal = min_height * ratio.diagonal_factor() / ratio.height();
    ScreenGeometry::resolve(diagonal, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recommend_ultrawide_135() {
        let screen = ScreenGeometry::resolve(135.0, &AspectRatio::ULTRAWIDE).unwrap();
        let ranges = recommend(&screen, ContentDetailClass::General);

        assert_eq!(ranges.len(), 4);
        let discas = &ranges[0];
        assert_eq!(discas.standard.name(), "DISCAS-general");
        assert_relative_eq!(discas.min.unwrap(), 1.5 * screen.height, max_relative = 1e-12);
        assert_relative_eq!(discas.max, 2.0 * screen.height, max_relative = 1e-12);

        let smpte = &ranges[1];
        assert_eq!(smpte.standard, ViewingStandard::Smpte);
        assert!(smpte.min.is_none());
        assert_relative_eq!(smpte.max, 1.6 * screen.height, max_relative = 1e-12);

        let thx = &ranges[2];
        assert_relative_eq!(thx.max, 135.0, max_relative = 1e-12);

        let thx_max = &ranges[3];
        assert_relative_eq!(thx_max.max, 162.0, max_relative = 1e-12);
    }

    #[test]
    fn test_recommend_detail_class_names_row() {
        let screen = ScreenGeometry::resolve(100.0, &AspectRatio::HDTV).unwrap();
        let general = recommend(&screen, ContentDetailClass::General);
        let detailed = recommend(&screen, ContentDetailClass::Detailed);
        assert_eq!(general[0].standard.name(), "DISCAS-general");
        assert_eq!(detailed[0].standard.name(), "DISCAS-detailed");
        // The forward range itself does not vary by class
        assert_eq!(general[0].min, detailed[0].min);
        assert_eq!(general[0].max, detailed[0].max);
    }

    #[test]
    fn test_minimum_screen_general_20ft() {
        let min =
            minimum_screen_for(20.0, &AspectRatio::HDTV, ContentDetailClass::General).unwrap();
        // (20 ft * 12) / 8 = 30 in height; 16:9 gives 53.33 in width
        assert_relative_eq!(min.height, 30.0, max_relative = 1e-9);
        assert_relative_eq!(min.width, 160.0 / 3.0, max_relative = 1e-9);
        assert_relative_eq!(
            (min.width * min.width + min.height * min.height).sqrt(),
            min.diagonal,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_minimum_screen_detailed_doubles_height() {
        let general =
            minimum_screen_for(20.0, &AspectRatio::HDTV, ContentDetailClass::General).unwrap();
        let detailed =
            minimum_screen_for(20.0, &AspectRatio::HDTV, ContentDetailClass::Detailed).unwrap();
        assert_relative_eq!(detailed.height, 2.0 * general.height, max_relative = 1e-12);
    }

    #[test]
    fn test_minimum_screen_rejects_bad_distance() {
        assert!(
            minimum_screen_for(0.0, &AspectRatio::HDTV, ContentDetailClass::General)
                .unwrap_err()
                .is_validation_error()
        );
        assert!(minimum_screen_for(-5.0, &AspectRatio::HDTV, ContentDetailClass::General).is_err());
    }

    #[test]
    fn test_standard_names() {
        assert_eq!(ViewingStandard::Smpte.to_string(), "SMPTE");
        assert_eq!(ViewingStandard::ThxMax.to_string(), "THX-max");
        assert_eq!(
            ViewingStandard::Discas(ContentDetailClass::Detailed).to_string(),
            "DISCAS-detailed"
        );
    }
}
