//! Screen geometry resolution.
//!
//! This module turns a diagonal and an [`AspectRatio`] into the full set
//! of screen dimensions, and derives sub-region geometries from them:
//!
//! - [`ScreenGeometry::resolve`] - diagonal + ratio -> width/height/area
//! - [`ScreenGeometry::scale`] - area-preserving-ratio inset (PiP content)
//! - [`ScreenGeometry::with_ratio`] - same-height re-aspect (letterbox sibling)
//!
//! All lengths are in whatever unit the caller picked for the diagonal;
//! no conversion happens here (see [`crate::units`] for the factors).
//!
//! # Usage
//!
//! ```rust
//! use beam_core::{AspectRatio, ScreenGeometry};
//!
//! let screen = ScreenGeometry::resolve(135.0, &AspectRatio::ULTRAWIDE).unwrap();
//! assert!((screen.width / screen.height - 21.0 / 9.0).abs() < 1e-9);
//! ```

use crate::aspect::AspectRatio;
use crate::error::{Error, Result};

/// Resolved screen dimensions in one consistent length unit.
///
/// # Invariants
///
/// - `width / height` equals the resolving ratio (within float tolerance)
/// - `diagonal^2 == width^2 + height^2`
/// - `area == width * height`
///
/// # Example
///
/// ```rust
/// use beam_core::{AspectRatio, ScreenGeometry};
///
/// let screen = ScreenGeometry::resolve(100.0, &AspectRatio::HDTV).unwrap();
/// let d = (screen.width * screen.width + screen.height * screen.height).sqrt();
/// assert!((d - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    /// Diagonal length
    pub diagonal: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
    /// `width * height`, in squared length units
    pub area: f64,
}

impl ScreenGeometry {
    /// Resolves a diagonal and aspect ratio into full screen dimensions.
    ///
    /// # Formula
    ///
    /// ```text
    /// d      = sqrt(ratio.w^2 + ratio.h^2)
    /// height = diagonal * ratio.h / d
    /// width  = diagonal * ratio.w / d
    /// area   = width * height
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if `diagonal` is not strictly
    /// positive. Ratio components are validated by [`AspectRatio::new`].
    pub fn resolve(diagonal: f64, ratio: &AspectRatio) -> Result<Self> {
        if !(diagonal > 0.0) {
            return Err(Error::invalid_geometry("diagonal", diagonal));
        }
        let d = ratio.diagonal_factor();
        let height = diagonal * ratio.height() / d;
        let width = diagonal * ratio.width() / d;
        Ok(Self {
            diagonal,
            width,
            height,
            area: width * height,
        })
    }

    /// Scales the displayed area by `area_factor`, preserving aspect ratio.
    ///
    /// Width and height are each multiplied by `sqrt(area_factor)`, so the
    /// area scales by exactly `area_factor`. Models a picture-in-picture or
    /// pillarboxed content region inside the full screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] unless `0 < area_factor <= 1`.
    pub fn scale(&self, area_factor: f64) -> Result<Self> {
        if !(area_factor > 0.0 && area_factor <= 1.0) {
            return Err(Error::invalid_geometry("area factor", area_factor));
        }
        let k = area_factor.sqrt();
        let width = self.width * k;
        let height = self.height * k;
        Ok(Self {
            diagonal: self.diagonal * k,
            width,
            height,
            area: width * height,
        })
    }

    /// Builds the same-height sibling geometry in a different ratio.
    ///
    /// A 16:9 image letterboxed on a 21:9 screen shares the screen height
    /// and gives up width; this computes that sibling's dimensions.
    pub fn with_ratio(&self, ratio: &AspectRatio) -> Self {
        let width = self.height * ratio.ratio();
        let diagonal = (width * width + self.height * self.height).sqrt();
        Self {
            diagonal,
            width,
            height: self.height,
            area: width * self.height,
        }
    }

    /// The aspect ratio implied by the resolved dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] only for a hand-built geometry
    /// with non-positive dimensions; resolved geometries always succeed.
    #[inline]
    pub fn aspect_ratio(&self) -> Result<AspectRatio> {
        AspectRatio::new(self.width, self.height)
    }

    /// Rescales every length by `factor` (unit conversion helper).
    ///
    /// Lengths scale by `factor`, area by `factor^2`. Pair with the
    /// constants in [`crate::units`], e.g. inches to meters:
    ///
    /// ```rust
    /// use beam_core::{units, AspectRatio, ScreenGeometry};
    ///
    /// let inches = ScreenGeometry::resolve(135.0, &AspectRatio::HDTV).unwrap();
    /// let meters = inches.rescale(units::METERS_PER_INCH);
    /// assert!((meters.diagonal - 3.429).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn rescale(&self, factor: f64) -> Self {
        Self {
            diagonal: self.diagonal * factor,
            width: self.width * factor,
            height: self.height * factor,
            area: self.area * factor * factor,
        }
    }
}

impl std::fmt::Display for ScreenGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} x {:.2} (diagonal {:.2})",
            self.width, self.height, self.diagonal
        )
    }
}
