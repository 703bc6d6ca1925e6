use num_traits::Float;

use crate::{Angle, DegenerateGeometry, Error, Pose2, Pose3, Vec2};

/// Aiming geometry from a robot to a target on the field.
///
/// All planar quantities are expressed in field axes: the robot's heading is not applied to
/// the displacement. `field_z` is the target's absolute height, not its height above the
/// robot.
///
/// # Examples
///
/// ```
/// use froglib_math::{IntoAngle, Pose2, Pose3, RobotRelativeTarget, Rotation3};
///
/// let robot = Pose2::new(0.0, 0.0, 0.0.deg());
/// let speaker = Pose3::new(5.0, 5.0, 1.0, Rotation3::default());
///
/// let target = RobotRelativeTarget::new(&robot, &speaker)?;
/// assert!((target.drive_heading.as_degrees() - 45.0).abs() < 1e-9);
/// assert!((target.firing_heading.as_degrees() + 135.0).abs() < 1e-9);
/// # Ok::<(), froglib_math::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotRelativeTarget {
    /// Displacement from the robot to the target on the ground plane.
    pub to_target: Vec2<f64>,
    /// X component of [`Self::to_target`].
    pub field_x: f64,
    /// Y component of [`Self::to_target`].
    pub field_y: f64,
    /// Height of the target above the field.
    pub field_z: f64,
    /// Ground-plane distance to the target.
    pub distance: f64,
    /// Straight-line distance to the target, height included.
    pub range: f64,
    /// Heading that points the robot's front at the target, in `(-π, π]`.
    pub drive_heading: Angle,
    /// Heading that points the robot's back at the target, in `(-π, π]`.
    pub firing_heading: Angle,
    /// Angle of the target above the ground plane.
    pub elevation: Angle,
    /// Firing heading in degrees divided by 90. Not clamped, so it spans roughly `[-2, 2]`.
    pub drive_vt: f64,
}

impl RobotRelativeTarget {
    /// Computes aiming geometry from `robot` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateGeometry::ZeroRange`] if the target sits exactly at the robot's
    /// position with zero height, where elevation is undefined.
    pub fn new(robot: &Pose2, target: &Pose3) -> Result<Self, Error> {
        let to_target = target.to_pose2().position - robot.position;
        let field_x = to_target.x;
        let field_y = to_target.y;
        let field_z = target.z();

        let drive_heading = Angle::from_xy(field_x, field_y);
        let firing_heading = drive_heading.rotate_by(Angle::HALF_TURN);

        let ground_squared = field_x * field_x + field_y * field_y;
        let distance = ground_squared.sqrt();
        let range = (ground_squared + field_z * field_z).sqrt();

        if range == 0.0 {
            log::warn!("target at {target:?} coincides with robot at {robot:?}");
            return Err(DegenerateGeometry::ZeroRange.into());
        }

        // Rounding can push the ratio a hair past 1 for targets near the floor.
        let elevation = Angle::from_radians((distance / range).min(1.0).acos());

        Ok(Self {
            to_target,
            field_x,
            field_y,
            field_z,
            distance,
            range,
            drive_heading,
            firing_heading,
            elevation,
            drive_vt: firing_heading.as_degrees() / 90.0,
        })
    }
}
