//! # Penkit Core
//!
//! Core types for the penkit G-code post-processor:
//! - `GcodeLine` command records and the `Word` command pair
//! - Error types for parsing and settings validation
//! - `ServoSettings` for pen-lift actuation parameters

pub mod error;
pub mod settings;
pub mod types;

pub use error::{Error, GcodeError, Result, SettingsError};
pub use settings::ServoSettings;
pub use types::{GcodeLine, Word};
