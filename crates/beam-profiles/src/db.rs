//! Screen and projector profile databases.
//!
//! Profiles are tabular records keyed by model name, loaded from a YAML
//! file:
//!
//! ```yaml
//! screens:
//!   - model: ALR Gray 0.8
//!     gain: 0.8
//!     color_factor: 1.0
//!     alr_percentage: 70.0
//! projectors:
//!   - model: Generic Lamp 3000
//!     lumens: 3000.0
//!     lumen_reduction_percentage: 25.0
//! ```
//!
//! Percentages are stored 0 to 100, as the vendor datasheets quote
//! them; the fraction accessors convert once at this boundary. Lookup
//! by an unknown name returns `None` and the caller supplies defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProfileResult;

/// A projection screen's photometric profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenProfile {
    /// Model name, the lookup key
    pub model: String,
    /// Screen gain relative to reference white
    #[serde(default = "default_unity")]
    pub gain: f64,
    /// Unitless correction for non-white reference content
    #[serde(default = "default_unity")]
    pub color_factor: f64,
    /// Ambient light rejection, percent of incident light rejected (0-100)
    #[serde(default)]
    pub alr_percentage: f64,
}

impl ScreenProfile {
    /// Fraction of ambient light this screen rejects, 0 to 1.
    #[inline]
    pub fn rejection_fraction(&self) -> f64 {
        self.alr_percentage / 100.0
    }

    /// Fraction of ambient light remaining after rejection, 0 to 1.
    #[inline]
    pub fn remaining_fraction(&self) -> f64 {
        1.0 - self.alr_percentage / 100.0
    }
}

/// A projector's output profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectorProfile {
    /// Model name, the lookup key
    pub model: String,
    /// Rated output, lumens
    pub lumens: f64,
    /// Real-world output reduction, percent (eco mode, filter, aging)
    #[serde(default)]
    pub lumen_reduction_percentage: f64,
}

impl ProjectorProfile {
    /// Rated lumens after the reduction percentage.
    #[inline]
    pub fn effective_lumens(&self) -> f64 {
        self.lumens * (1.0 - self.lumen_reduction_percentage / 100.0)
    }
}

/// A named collection of screen and projector profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDatabase {
    /// Screen profiles
    #[serde(default)]
    pub screens: Vec<ScreenProfile>,
    /// Projector profiles
    #[serde(default)]
    pub projectors: Vec<ProjectorProfile>,
}

impl ProfileDatabase {
    /// Parses a database from YAML text.
    pub fn from_str(yaml: &str) -> ProfileResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a database from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    /// Looks up a screen profile by model name (case-insensitive).
    ///
    /// An unknown name is `None`, not an error; the caller decides on
    /// defaults.
    pub fn screen(&self, model: &str) -> Option<&ScreenProfile> {
        self.screens
            .iter()
            .find(|s| s.model.eq_ignore_ascii_case(model))
    }

    /// Looks up a projector profile by model name (case-insensitive).
    pub fn projector(&self, model: &str) -> Option<&ProjectorProfile> {
        self.projectors
            .iter()
            .find(|p| p.model.eq_ignore_ascii_case(model))
    }

    /// A small set of generic reference profiles, available without any
    /// database file.
    pub fn builtin() -> Self {
        Self {
            screens: vec![
                ScreenProfile {
                    model: "Matte White".into(),
                    gain: 1.0,
                    color_factor: 1.0,
                    alr_percentage: 0.0,
                },
                ScreenProfile {
                    model: "ALR Gray".into(),
                    gain: 0.8,
                    color_factor: 1.0,
                    alr_percentage: 70.0,
                },
                ScreenProfile {
                    model: "High Gain".into(),
                    gain: 1.3,
                    color_factor: 1.0,
                    alr_percentage: 30.0,
                },
            ],
            projectors: vec![
                ProjectorProfile {
                    model: "Generic Lamp".into(),
                    lumens: 3000.0,
                    lumen_reduction_percentage: 25.0,
                },
                ProjectorProfile {
                    model: "Generic Laser".into(),
                    lumens: 2700.0,
                    lumen_reduction_percentage: 10.0,
                },
            ],
        }
    }
}

fn default_unity() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
screens:
  - model: Test ALR
    gain: 0.9
    color_factor: 1.1
    alr_percentage: 65.0
  - model: Bare Wall
projectors:
  - model: Bench PJ
    lumens: 2400.0
    lumen_reduction_percentage: 20.0
"#;

    #[test]
    fn test_parse_and_lookup() {
        let db = ProfileDatabase::from_str(SAMPLE).unwrap();
        let screen = db.screen("Test ALR").unwrap();
        assert_eq!(screen.gain, 0.9);
        assert_eq!(screen.alr_percentage, 65.0);
        assert!((screen.rejection_fraction() - 0.65).abs() < 1e-12);
        assert!((screen.remaining_fraction() - 0.35).abs() < 1e-12);

        let pj = db.projector("Bench PJ").unwrap();
        assert_eq!(pj.lumens, 2400.0);
        assert!((pj.effective_lumens() - 1920.0).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let db = ProfileDatabase::from_str(SAMPLE).unwrap();
        assert!(db.screen("test alr").is_some());
        assert!(db.projector("BENCH PJ").is_some());
    }

    #[test]
    fn test_unknown_is_none_not_error() {
        let db = ProfileDatabase::from_str(SAMPLE).unwrap();
        assert!(db.screen("No Such Screen").is_none());
        assert!(db.projector("No Such PJ").is_none());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let db = ProfileDatabase::from_str(SAMPLE).unwrap();
        let bare = db.screen("Bare Wall").unwrap();
        assert_eq!(bare.gain, 1.0);
        assert_eq!(bare.color_factor, 1.0);
        assert_eq!(bare.alr_percentage, 0.0);
    }

    #[test]
    fn test_builtin_profiles() {
        let db = ProfileDatabase::builtin();
        assert!(db.screen("ALR Gray").is_some());
        assert!(db.projector("Generic Lamp").is_some());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.yaml");

        let db = ProfileDatabase::builtin();
        std::fs::write(&path, serde_yaml::to_string(&db).unwrap()).unwrap();

        let loaded = ProfileDatabase::from_file(&path).unwrap();
        assert_eq!(loaded, db);
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(ProfileDatabase::from_str("screens: [not a mapping").is_err());
    }
}
