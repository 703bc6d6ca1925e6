use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DriveTrain, GearStage};

/// Errors raised while loading a drive train description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the expected shape.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The description parsed but describes an impossible drive train.
    #[error(transparent)]
    Invalid(#[from] froglib_math::Error),
}

const fn default_wheel_diameter() -> f64 {
    // 4 inch wheel.
    0.1016
}

/// Serializable description of a [`DriveTrain`].
///
/// ```toml
/// gear_stages = [[14, 50], [27, 17], [15, 45]]
/// wheel_diameter = 0.1016
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveTrainConfig {
    /// Ordered `(driving, driven)` gear stages from motor to wheel.
    pub gear_stages: Vec<GearStage>,
    /// Wheel diameter in meters (default: 0.1016, a 4" wheel).
    #[serde(default = "default_wheel_diameter")]
    pub wheel_diameter: f64,
}

impl DriveTrainConfig {
    /// Parses a description from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text does not parse.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a description from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or [`ConfigError::Toml`]
    /// if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates this description and builds the drive train.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`DriveTrain::new`].
    pub fn build(&self) -> Result<DriveTrain, froglib_math::Error> {
        DriveTrain::new(self.gear_stages.as_slice(), self.wheel_diameter)
    }
}

impl TryFrom<&DriveTrainConfig> for DriveTrain {
    type Error = froglib_math::Error;

    fn try_from(config: &DriveTrainConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
