//! Gear trains.
//!
//! # Ratio Convention
//!
//! Each [`GearStage`] is written `(driving, driven)` and contributes `driven / driving`
//! to the train's ratio. Stages compose by multiplication:
//!
//! - `to_output(input) = input × ratio`
//! - `to_input(output) = output / ratio`

use froglib_math::{ConfigurationError, Error};
use serde::{Deserialize, Serialize};

/// One meshed pair of gears.
///
/// Deserializes from a two-element array, so `[10, 32]` in a config file is a 10 tooth
/// gear driving a 32 tooth gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct GearStage {
    /// Tooth count of the gear on the input side.
    pub driving: i32,
    /// Tooth count of the gear on the output side.
    pub driven: i32,
}

impl GearStage {
    /// Creates a stage from its tooth counts.
    #[must_use]
    pub const fn new(driving: i32, driven: i32) -> Self {
        Self { driving, driven }
    }

    /// Returns `driven / driving` for this stage alone.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.driven) / f64::from(self.driving)
    }

    const fn is_valid(&self) -> bool {
        self.driving > 0 && self.driven > 0
    }
}

impl From<(i32, i32)> for GearStage {
    fn from((driving, driven): (i32, i32)) -> Self {
        Self { driving, driven }
    }
}

impl From<GearStage> for (i32, i32) {
    fn from(stage: GearStage) -> Self {
        (stage.driving, stage.driven)
    }
}

/// A fixed reduction between a motor shaft and a mechanism shaft.
///
/// # Examples
///
/// ```
/// use froglib_drivetrain::GearTrain;
///
/// let gearing = GearTrain::new(&[(10, 32), (9, 24)])?;
/// assert!((gearing.ratio() - 256.0 / 30.0).abs() < 1e-12);
/// assert!((gearing.to_input(gearing.to_output(3.0)) - 3.0).abs() < 1e-12);
/// # Ok::<(), froglib_math::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearTrain {
    ratio: f64,
}

impl GearTrain {
    /// Builds a gear train from an ordered list of stages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyGearTrain`] if `stages` is empty, or
    /// [`ConfigurationError::NonPositiveTeeth`] if any tooth count is zero or negative.
    pub fn new<S>(stages: &[S]) -> Result<Self, Error>
    where
        S: Into<GearStage> + Copy,
    {
        if stages.is_empty() {
            return Err(ConfigurationError::EmptyGearTrain.into());
        }

        let mut ratio = 1.0;
        for (index, &stage) in stages.iter().enumerate() {
            let stage: GearStage = stage.into();
            if !stage.is_valid() {
                return Err(ConfigurationError::NonPositiveTeeth {
                    stage: index,
                    driving: stage.driving,
                    driven: stage.driven,
                }
                .into());
            }
            ratio *= stage.ratio();
        }

        log::debug!("built {}-stage gear train, ratio {ratio}", stages.len());

        Ok(Self { ratio })
    }

    /// A 1:1 train, for mechanisms driven straight off the motor shaft.
    #[must_use]
    pub const fn direct() -> Self {
        Self { ratio: 1.0 }
    }

    /// Returns the product of `driven / driving` over every stage.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Converts rotations of the output shaft into rotations of the input shaft.
    #[must_use]
    pub fn to_input(&self, output_rotations: f64) -> f64 {
        output_rotations / self.ratio
    }

    /// Converts rotations of the input shaft into rotations of the output shaft.
    #[must_use]
    pub fn to_output(&self, input_rotations: f64) -> f64 {
        input_rotations * self.ratio
    }
}

impl Default for GearTrain {
    fn default() -> Self {
        Self::direct()
    }
}
