//! # beam-profiles
//!
//! Screen/projector profile databases and settings persistence.
//!
//! These are the boundary collaborators of the calculation crates: a
//! [`ProfileDatabase`] supplies named photometric records, a
//! [`Settings`] file persists the last-confirmed installation
//! parameters. The calculation crates themselves never touch storage;
//! they receive already-parsed numeric values.
//!
//! Both stores are YAML via serde. Lookup by an unknown model name
//! returns `None` (the caller supplies defaults); a missing settings
//! file yields [`Settings::default`].
//!
//! # Usage
//!
//! ```rust
//! use beam_profiles::{ProfileDatabase, Settings};
//!
//! let db = ProfileDatabase::builtin();
//! let mut settings = Settings::default();
//! if let Some(screen) = db.screen("ALR Gray") {
//!     settings.apply_screen(screen);
//! }
//! assert_eq!(settings.screen_gain, 0.8);
//! ```
//!
//! # Dependencies
//!
//! - [`beam-core`] - Aspect-ratio parsing for the settings record
//! - [`serde`] / [`serde_yaml`] - Storage format
//! - [`thiserror`] - Error types
//!
//! # Used By
//!
//! - `beam-cli` - Flag-value fallback and `--save`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod db;
pub mod error;
pub mod settings;

pub use db::{ProfileDatabase, ProjectorProfile, ScreenProfile};
pub use error::{ProfileError, ProfileResult};
pub use settings::Settings;
