//! Subcommand implementations and shared display helpers.

use std::path::Path;

use anyhow::{Context, Result};

use beam_profiles::{ProfileDatabase, Settings};
use beam_viewing::ContentDetailClass;

pub mod contrast;
pub mod report;
pub mod screen;
pub mod suggest;
pub mod viewing;

/// Loads settings, defaulting when the file does not exist.
pub fn load_settings(path: &Path) -> Result<Settings> {
    Settings::load_or_default(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}

/// Loads a profile database file, or the builtin profiles if no file
/// was given.
pub fn load_database(path: Option<&Path>) -> Result<ProfileDatabase> {
    match path {
        Some(p) => ProfileDatabase::from_file(p)
            .with_context(|| format!("failed to load profile database {}", p.display())),
        None => Ok(ProfileDatabase::builtin()),
    }
}

/// Copies named profiles into the settings.
///
/// An unknown name keeps the current settings values and logs a
/// warning.
pub fn apply_profiles(
    settings: &mut Settings,
    db: &ProfileDatabase,
    screen: Option<&str>,
    projector: Option<&str>,
) {
    if let Some(name) = screen {
        match db.screen(name) {
            Some(profile) => settings.apply_screen(profile),
            None => tracing::warn!(model = name, "screen profile not found, using settings"),
        }
    }
    if let Some(name) = projector {
        match db.projector(name) {
            Some(profile) => settings.apply_projector(profile),
            None => tracing::warn!(model = name, "projector profile not found, using settings"),
        }
    }
}

/// Parses a content detail class flag.
pub fn parse_detail(s: &str) -> Result<ContentDetailClass> {
    match s.to_ascii_lowercase().as_str() {
        "general" => Ok(ContentDetailClass::General),
        "detailed" => Ok(ContentDetailClass::Detailed),
        other => anyhow::bail!("unknown detail class {other:?} (expected general or detailed)"),
    }
}

/// Formats a length in inches as a feet-and-inches display string,
/// e.g. `"12ft 3.4in"`.
pub fn format_feet_inches(inches: f64) -> String {
    let feet = (inches / 12.0).floor();
    let remaining = inches - feet * 12.0;
    format!("{}ft {:.1}in", feet as i64, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_feet_inches() {
        assert_eq!(format_feet_inches(240.0), "20ft 0.0in");
        assert_eq!(format_feet_inches(135.0), "11ft 3.0in");
        assert_eq!(format_feet_inches(7.5), "0ft 7.5in");
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(parse_detail("general").unwrap(), ContentDetailClass::General);
        assert_eq!(parse_detail("Detailed").unwrap(), ContentDetailClass::Detailed);
        assert!(parse_detail("cinematic").is_err());
    }

    #[test]
    fn test_apply_profiles_unknown_keeps_settings() {
        let mut settings = Settings::default();
        let db = ProfileDatabase::builtin();
        apply_profiles(&mut settings, &db, Some("No Such Screen"), None);
        assert_eq!(settings, Settings::default());
    }
}
