//! Error types for beam-core operations.
//!
//! This module provides a unified error handling system for all geometric
//! and photometric calculations in the beam-rs workspace.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Screen geometry resolution (diagonal/aspect-ratio validation)
//! - Photometric model evaluation (gain, area, percentage validation)
//! - Viewing-distance queries (distance, target validation)
//!
//! Every operation validates its inputs at entry and either returns a
//! complete result record or fails before producing any output. A zero
//! denominator where a ratio is required is reported as
//! [`DivisionByZero`](Error::DivisionByZero), never coerced to infinity.
//!
//! # Usage
//!
//! ```rust
//! use beam_core::{Error, Result};
//!
//! fn check_diagonal(diagonal: f64) -> Result<()> {
//!     if diagonal <= 0.0 {
//!         return Err(Error::invalid_geometry("diagonal", diagonal));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::geometry::ScreenGeometry`] - Input validation
//! - `beam-photometry` - Photometric input validation, zero black level
//! - `beam-viewing` - Distance validation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during screen and photometric calculations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Geometry errors**: [`InvalidGeometry`](Error::InvalidGeometry),
///   [`ParseAspect`](Error::ParseAspect)
/// - **Photometric errors**: [`InvalidPhotometricInput`](Error::InvalidPhotometricInput)
/// - **Arithmetic errors**: [`DivisionByZero`](Error::DivisionByZero)
/// - **Query errors**: [`InvalidInput`](Error::InvalidInput)
#[derive(Debug, Error)]
pub enum Error {
    /// A geometric quantity is outside its valid domain.
    ///
    /// Returned for non-positive diagonals, non-positive aspect-ratio
    /// components, or area factors outside `(0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::Error;
    ///
    /// let err = Error::invalid_geometry("diagonal", -5.0);
    /// assert!(err.to_string().contains("diagonal"));
    /// ```
    #[error("invalid geometry: {field} must be positive, got {value}")]
    InvalidGeometry {
        /// Name of the offending field
        field: &'static str,
        /// Value that failed validation
        value: f64,
    },

    /// A photometric quantity is outside its valid domain.
    ///
    /// Returned for non-positive gain/lumens/area/color factor, negative
    /// ambient light, or an ALR percentage outside `[0, 1]`.
    #[error("invalid photometric input: {field} must be {expected}, got {value}")]
    InvalidPhotometricInput {
        /// Name of the offending field
        field: &'static str,
        /// Description of the valid domain
        expected: &'static str,
        /// Value that failed validation
        value: f64,
    },

    /// A quantity that serves as a denominator is exactly zero.
    ///
    /// Returned when a contrast ratio is requested but the black level or
    /// effective ambient light is zero. This is reported to the caller,
    /// never silently coerced into an infinite float.
    #[error("division by zero: {quantity} is zero where a ratio is required")]
    DivisionByZero {
        /// Name of the zero-valued quantity
        quantity: &'static str,
    },

    /// A query parameter is outside its valid domain.
    ///
    /// Returned for non-positive viewing distances, non-positive target
    /// contrast ratios, or an out-of-range solver percentage.
    #[error("invalid input: {field} must be {expected}, got {value}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Description of the valid domain
        expected: &'static str,
        /// Value that failed validation
        value: f64,
    },

    /// An aspect-ratio string could not be parsed.
    ///
    /// Aspect ratios are written as `"W:H"`, e.g. `"16:9"` or `"2.39:1"`.
    #[error("invalid aspect ratio string {value:?} (expected \"W:H\")")]
    ParseAspect {
        /// String that failed to parse
        value: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidGeometry`] error.
    #[inline]
    pub fn invalid_geometry(field: &'static str, value: f64) -> Self {
        Self::InvalidGeometry { field, value }
    }

    /// Creates an [`Error::InvalidPhotometricInput`] error.
    ///
    /// # Arguments
    ///
    /// * `field` - Name of the offending input field
    /// * `expected` - Human-readable valid domain, e.g. `"positive"`
    /// * `value` - The rejected value
    #[inline]
    pub fn invalid_photometric(field: &'static str, expected: &'static str, value: f64) -> Self {
        Self::InvalidPhotometricInput {
            field,
            expected,
            value,
        }
    }

    /// Creates an [`Error::DivisionByZero`] error.
    #[inline]
    pub fn division_by_zero(quantity: &'static str) -> Self {
        Self::DivisionByZero { quantity }
    }

    /// Creates an [`Error::InvalidInput`] error.
    #[inline]
    pub fn invalid_input(field: &'static str, expected: &'static str, value: f64) -> Self {
        Self::InvalidInput {
            field,
            expected,
            value,
        }
    }

    /// Creates an [`Error::ParseAspect`] error.
    #[inline]
    pub fn parse_aspect(value: impl Into<String>) -> Self {
        Self::ParseAspect {
            value: value.into(),
        }
    }

    /// Returns `true` if this is a validation error (bad input domain).
    #[inline]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGeometry { .. }
                | Self::InvalidPhotometricInput { .. }
                | Self::InvalidInput { .. }
                | Self::ParseAspect { .. }
        )
    }

    /// Returns `true` if this is a division-by-zero error.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry() {
        let err = Error::invalid_geometry("diagonal", -135.0);
        let msg = err.to_string();
        assert!(msg.contains("diagonal"));
        assert!(msg.contains("-135"));
        assert!(err.is_validation_error());
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn test_invalid_photometric() {
        let err = Error::invalid_photometric("screen_gain", "positive", 0.0);
        let msg = err.to_string();
        assert!(msg.contains("screen_gain"));
        assert!(msg.contains("positive"));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_division_by_zero() {
        let err = Error::division_by_zero("black level");
        assert!(err.to_string().contains("black level"));
        assert!(err.is_division_by_zero());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_parse_aspect() {
        let err = Error::parse_aspect("sixteen by nine");
        assert!(err.to_string().contains("sixteen by nine"));
        assert!(err.is_validation_error());
    }
}
