//! Plate configuration.
//!
//! Detection ranges and the fallback cooldown are process-wide settings
//! loaded once and injected immutably into each plate at construction. The
//! state machine never reads globals, which keeps it testable in isolation.
//!
//! # File format
//!
//! Configuration files are JSON with optional fields; anything omitted takes
//! its default:
//!
//! ```json
//! { "radius_xz": 2.0, "radius_y": 1.0, "open_delay": 3.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents were not valid JSON for [`PlateConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field held a value outside its allowed range.
    #[error("invalid config value for {field}: {value}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Process-wide plate settings.
///
/// # Fields
///
/// - `radius_xz`: Horizontal detection radius (Euclidean in the XZ plane).
/// - `radius_y`: Vertical detection tolerance (absolute Y difference).
/// - `open_delay`: Fallback cooldown seconds when no in-range door specifies
///   its own open time.
/// - `door_search_radius`: How far from a plate doors are considered in
///   range for powering.
///
/// Both detection constraints must hold simultaneously for an actor to press
/// the plate (a cylinder test, not a sphere test); boundaries are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateConfig {
    /// Horizontal detection radius in the XZ plane.
    pub radius_xz: f32,
    /// Vertical detection tolerance.
    pub radius_y: f32,
    /// Fallback cooldown in seconds.
    pub open_delay: f32,
    /// Plate-to-door activation range.
    pub door_search_radius: f32,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            radius_xz: 2.0,
            radius_y: 1.0,
            open_delay: 3.0,
            door_search_radius: 6.0,
        }
    }
}

impl PlateConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::InvalidValue`] on negative ranges or delays.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus the
    /// errors of [`PlateConfig::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that every field is within its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending
    /// field. NaN values are rejected by the same comparison.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("radius_xz", self.radius_xz),
            ("radius_y", self.radius_y),
            ("open_delay", self.open_delay),
            ("door_search_radius", self.door_search_radius),
        ];
        for (field, value) in checks {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}
