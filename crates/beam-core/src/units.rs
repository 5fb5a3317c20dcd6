//! Length-unit constants and conversions.
//!
//! The calculation crates are unit-agnostic: every operation works in
//! whatever single length unit the caller picks, and callers convert at
//! the boundary. This module holds the conversion factors those
//! boundaries use.
//!
//! Screen diagonals are conventionally quoted in inches, viewing
//! distances in feet, and photometric areas in square meters, so the
//! same installation routinely crosses all three.
//!
//! # Usage
//!
//! ```rust
//! use beam_core::units;
//!
//! let diagonal_m = units::inches_to_meters(135.0);
//! assert!((diagonal_m - 3.429).abs() < 1e-9);
//! ```

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Meters per inch.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Converts inches to meters.
#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

/// Converts meters to inches.
#[inline]
pub fn meters_to_inches(meters: f64) -> f64 {
    meters / METERS_PER_INCH
}

/// Converts inches to millimeters.
#[inline]
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Converts feet to inches.
#[inline]
pub fn feet_to_inches(feet: f64) -> f64 {
    feet * INCHES_PER_FOOT
}

/// Converts square inches to square meters.
#[inline]
pub fn square_inches_to_square_meters(sq_inches: f64) -> f64 {
    sq_inches * METERS_PER_INCH * METERS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_meter_roundtrip() {
        let inches = 135.0;
        let back = meters_to_inches(inches_to_meters(inches));
        assert!((back - inches).abs() < 1e-9);
    }

    #[test]
    fn test_feet_to_inches() {
        assert_eq!(feet_to_inches(20.0), 240.0);
    }

    #[test]
    fn test_square_conversion() {
        // 1 m2 is 10000 cm2 is ~1550 in2
        let m2 = square_inches_to_square_meters(1550.0031000062);
        assert!((m2 - 1.0).abs() < 1e-9);
    }
}
