//! FROG 3160's library of commonly used robot types and functions.
//!
//! - [`math`]: angles, poses, angle wrapping, remapping and aiming geometry.
//! - [`drivetrain`]: gear train and drive train kinematics.
//! - [`motors`]: configured motor controller adapters and telemetry.

pub use froglib_drivetrain as drivetrain;
pub use froglib_math as math;
pub use froglib_motors as motors;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::{
        drivetrain::{DriveTrain, GearStage, GearTrain},
        math::{Angle, IntoAngle, Pose2, Pose3, RobotRelativeTarget, Rotation3, Vec2, Vec3},
        motors::{
            FrogTalonFx, FrogTalonSrx, MotorOptions, TalonFxConfig, TalonFxDriver,
            TalonSrxConfig, TalonSrxDriver, TelemetrySink, TelemetryTable,
        },
    };
}
