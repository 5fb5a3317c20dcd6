//! Error types for profile database and settings persistence.

use thiserror::Error;

/// Result type for profile and settings operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur loading or saving profiles and settings.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// I/O error reading or writing a database/settings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The settings file carries an unparsable aspect-ratio string.
    #[error("invalid aspect ratio in settings: {value:?} (expected \"W:H\")")]
    InvalidAspect {
        /// String that failed to parse
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_aspect_message() {
        let err = ProfileError::InvalidAspect {
            value: "wide".into(),
        };
        assert!(err.to_string().contains("wide"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ProfileError = io.into();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}
