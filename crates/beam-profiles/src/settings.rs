//! Installation settings persistence.
//!
//! A flat record of every calculator input, saved as YAML so a run can
//! start from the last-confirmed values. The settings store is a
//! boundary collaborator: the calculation crates never read or write
//! it, they receive already-parsed numeric fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use beam_core::AspectRatio;

use crate::db::{ProjectorProfile, ScreenProfile};
use crate::error::{ProfileError, ProfileResult};

/// Persisted installation parameters.
///
/// Every field has a workable default so a fresh install can run
/// without a settings file. Percentages follow the database convention
/// (0 to 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen model name, if picked from a database
    pub screen_model: Option<String>,
    /// Screen gain relative to reference white
    pub screen_gain: f64,
    /// Unitless correction for non-white reference content
    pub color_factor: f64,
    /// Ambient light rejection, percent (0-100)
    pub alr_percentage: f64,
    /// Projector model name, if picked from a database
    pub projector_model: Option<String>,
    /// Rated projector output, lumens
    pub lumens: f64,
    /// Real-world output reduction, percent (0-100)
    pub lumen_reduction_percentage: f64,
    /// Ambient light on the screen, lux
    pub ambient_lux: f64,
    /// Screen diagonal, inches
    pub diagonal_inches: f64,
    /// Aspect ratio as a `"W:H"` string
    pub aspect_ratio: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_model: None,
            screen_gain: 1.0,
            color_factor: 1.0,
            alr_percentage: 0.0,
            projector_model: None,
            lumens: 2000.0,
            lumen_reduction_percentage: 0.0,
            ambient_lux: 0.0,
            diagonal_inches: 100.0,
            aspect_ratio: "16:9".into(),
        }
    }
}

impl Settings {
    /// Loads settings from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Loads settings if the file exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves settings as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> ProfileResult<()> {
        let text = serde_yaml::to_string(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// The parsed aspect ratio.
    pub fn aspect(&self) -> ProfileResult<AspectRatio> {
        self.aspect_ratio
            .parse()
            .map_err(|_| ProfileError::InvalidAspect {
                value: self.aspect_ratio.clone(),
            })
    }

    /// Copies a screen profile's fields into the settings.
    pub fn apply_screen(&mut self, profile: &ScreenProfile) {
        self.screen_model = Some(profile.model.clone());
        self.screen_gain = profile.gain;
        self.color_factor = profile.color_factor;
        self.alr_percentage = profile.alr_percentage;
    }

    /// Copies a projector profile's fields into the settings.
    pub fn apply_projector(&mut self, profile: &ProjectorProfile) {
        self.projector_model = Some(profile.model.clone());
        self.lumens = profile.lumens;
        self.lumen_reduction_percentage = profile.lumen_reduction_percentage;
    }
}
