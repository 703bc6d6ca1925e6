//! Gear train and drive train kinematics.
//!
//! [`GearTrain`] turns rotations on one side of a gearbox into rotations on the other.
//! [`DriveTrain`] adds a wheel, converting motor rotation into meters traveled.

mod config;
mod drive;
mod gearing;

pub use config::{ConfigError, DriveTrainConfig};
pub use drive::DriveTrain;
pub use gearing::{GearStage, GearTrain};
