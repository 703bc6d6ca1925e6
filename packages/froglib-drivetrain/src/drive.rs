use core::f64::consts::PI;

use froglib_math::{ConfigurationError, Error};

use crate::{GearStage, GearTrain};

/// A gear train driving a wheel, converting between motor rotation and linear travel.
///
/// Speeds are in meters per second and rotation rates in rotations per second.
///
/// # Examples
///
/// ```
/// use froglib_drivetrain::DriveTrain;
///
/// // A 4" wheel behind a two stage reduction.
/// let drive = DriveTrain::new(&[(14, 50), (27, 17)], 0.1016)?;
///
/// let motor_rps = drive.speed_to_motor_rate(4.0);
/// assert!((drive.motor_rate_to_speed(motor_rps) - 4.0).abs() < 1e-9);
/// # Ok::<(), froglib_math::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveTrain {
    gearing: GearTrain,
    circumference: f64,
}

impl DriveTrain {
    /// Builds a drive train from gear stages and a wheel diameter in meters.
    ///
    /// # Errors
    ///
    /// Fails if the gear stages are invalid (see [`GearTrain::new`]) or if
    /// `wheel_diameter` is not strictly positive.
    pub fn new<S>(gear_stages: &[S], wheel_diameter: f64) -> Result<Self, Error>
    where
        S: Into<GearStage> + Copy,
    {
        Self::from_gear_train(GearTrain::new(gear_stages)?, wheel_diameter)
    }

    /// Builds a drive train around an existing gear train.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NonPositiveDiameter`] if `wheel_diameter` is not a
    /// finite positive number.
    pub fn from_gear_train(gearing: GearTrain, wheel_diameter: f64) -> Result<Self, Error> {
        if !wheel_diameter.is_finite() || wheel_diameter <= 0.0 {
            return Err(ConfigurationError::NonPositiveDiameter(wheel_diameter).into());
        }

        let circumference = PI * wheel_diameter;
        log::debug!(
            "built drive train, ratio {}, circumference {circumference} m",
            gearing.ratio()
        );

        Ok(Self {
            gearing,
            circumference,
        })
    }

    /// The gear train between motor and wheel.
    #[must_use]
    pub const fn gearing(&self) -> &GearTrain {
        &self.gearing
    }

    /// Wheel circumference in meters.
    #[must_use]
    pub const fn circumference(&self) -> f64 {
        self.circumference
    }

    /// Converts a linear speed into the motor rate that produces it.
    #[must_use]
    pub fn speed_to_motor_rate(&self, speed: f64) -> f64 {
        let wheel_rps = speed / self.circumference;
        self.gearing.to_input(wheel_rps)
    }

    /// Converts a motor rate into the linear speed it produces.
    #[must_use]
    pub fn motor_rate_to_speed(&self, motor_rps: f64) -> f64 {
        self.gearing.to_output(motor_rps) * self.circumference
    }

    /// Converts a count of motor rotations into distance traveled in meters.
    #[must_use]
    pub fn rotations_to_distance(&self, motor_rotations: f64) -> f64 {
        self.gearing.to_output(motor_rotations) * self.circumference
    }

    /// Converts a distance in meters into the motor rotations needed to cover it.
    #[must_use]
    pub fn distance_to_rotations(&self, distance: f64) -> f64 {
        self.gearing.to_input(distance / self.circumference)
    }
}
