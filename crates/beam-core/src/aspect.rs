//! Aspect ratio value type.
//!
//! An aspect ratio is a pure width:height proportion; its absolute
//! magnitude carries no meaning. `16:9` and `1920:1080` describe the
//! same shape.
//!
//! # Usage
//!
//! ```rust
//! use beam_core::AspectRatio;
//!
//! let ratio: AspectRatio = "21:9".parse().unwrap();
//! assert!((ratio.ratio() - 21.0 / 9.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};

/// A width:height aspect ratio with strictly positive components.
///
/// Construct with [`AspectRatio::new`] (validated) or parse from a
/// `"W:H"` string. The components are kept as given; only their ratio
/// is ever used.
///
/// # Example
///
/// ```rust
/// use beam_core::AspectRatio;
///
/// let hdtv = AspectRatio::new(16.0, 9.0).unwrap();
/// assert_eq!(hdtv, AspectRatio::HDTV);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// 16:9, HDTV and most projector native format.
    pub const HDTV: AspectRatio = AspectRatio {
        width: 16.0,
        height: 9.0,
    };

    /// 21:9, ultrawide cinema format.
    pub const ULTRAWIDE: AspectRatio = AspectRatio {
        width: 21.0,
        height: 9.0,
    };

    /// 4:3, standard-definition television.
    pub const SD: AspectRatio = AspectRatio {
        width: 4.0,
        height: 3.0,
    };

    /// 2.39:1, anamorphic scope.
    pub const SCOPE: AspectRatio = AspectRatio {
        width: 2.39,
        height: 1.0,
    };

    /// Creates a validated aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if either component is not
    /// strictly positive (zero, negative, NaN).
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0) {
            return Err(Error::invalid_geometry("aspect ratio width", width));
        }
        if !(height > 0.0) {
            return Err(Error::invalid_geometry("aspect ratio height", height));
        }
        Ok(Self { width, height })
    }

    /// Width component as given.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height component as given.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Length of the unit diagonal: `sqrt(width^2 + height^2)`.
    ///
    /// Dividing a screen diagonal by this factor yields the per-unit
    /// scale of the ratio components.
    #[inline]
    pub fn diagonal_factor(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = Error;

    /// Parses `"W:H"` strings such as `"16:9"`, `"21:9"` or `"2.39:1"`.
    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| Error::parse_aspect(s))?;
        let width: f64 = w.trim().parse().map_err(|_| Error::parse_aspect(s))?;
        let height: f64 = h.trim().parse().map_err(|_| Error::parse_aspect(s))?;
        AspectRatio::new(width, height).map_err(|_| Error::parse_aspect(s))
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}
