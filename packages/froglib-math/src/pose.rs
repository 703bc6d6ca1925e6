//! Field-frame poses and transforms.
//!
//! Poses come from an external pose estimator and are only read here. There is no 3D
//! rotation algebra; orientations are carried as roll/pitch/yaw.

use crate::{Angle, Vec2, Vec3};

/// An orientation in 3D space, expressed as extrinsic roll, pitch and yaw.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rotation3 {
    /// Rotation about the x axis.
    pub roll: Angle,
    /// Rotation about the y axis.
    pub pitch: Angle,
    /// Rotation about the z axis.
    pub yaw: Angle,
}

impl Rotation3 {
    /// Creates a rotation from roll, pitch and yaw angles.
    #[must_use]
    pub const fn new(roll: Angle, pitch: Angle, yaw: Angle) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Creates a rotation from roll, pitch and yaw given in degrees.
    #[must_use]
    pub const fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            roll: Angle::from_degrees(roll),
            pitch: Angle::from_degrees(pitch),
            yaw: Angle::from_degrees(yaw),
        }
    }
}

/// A robot pose on the field: a ground-plane position and a heading.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Pose2 {
    /// Position in meters, field frame.
    pub position: Vec2<f64>,
    /// Heading measured counterclockwise from the field x axis.
    pub heading: Angle,
}

impl Pose2 {
    /// Creates a pose at `(x, y)` facing `heading`.
    #[must_use]
    pub const fn new(x: f64, y: f64, heading: Angle) -> Self {
        Self {
            position: Vec2::new(x, y),
            heading,
        }
    }

    /// The x coordinate of this pose.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.position.x
    }

    /// The y coordinate of this pose.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.position.y
    }
}

/// A pose in 3D space: a translation and an orientation.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Pose3 {
    /// Position in meters, field frame.
    pub translation: Vec3,
    /// Orientation relative to the field axes.
    pub rotation: Rotation3,
}

impl Pose3 {
    /// Creates a pose at `(x, y, z)` with the given orientation.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, rotation: Rotation3) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            rotation,
        }
    }

    /// The x coordinate of this pose.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.translation.x
    }

    /// The y coordinate of this pose.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.translation.y
    }

    /// The z coordinate (height) of this pose.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.translation.z
    }

    /// Drops height, roll and pitch, keeping the ground-plane position and yaw.
    #[must_use]
    pub const fn to_pose2(&self) -> Pose2 {
        Pose2 {
            position: self.translation.xy(),
            heading: self.rotation.yaw,
        }
    }
}

/// A rigid transform between two 3D frames, such as camera-to-target.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Transform3 {
    /// Translation component in meters.
    pub translation: Vec3,
    /// Rotation component.
    pub rotation: Rotation3,
}

impl Transform3 {
    /// Creates a transform from its components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Rotation3) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}
