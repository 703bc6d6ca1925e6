/// Errors produced by froglib's math and kinematics helpers.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A constructor or call received arguments it cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    /// A computation would have divided by zero.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] DegenerateGeometry),
}

/// Bad constructor or call arguments.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// No gear stages were given.
    #[error("a gear train needs at least one stage")]
    EmptyGearTrain,

    /// A gear stage has a tooth count of zero or less.
    #[error("gear stage {stage} has non-positive teeth ({driving}:{driven})")]
    NonPositiveTeeth {
        /// Index of the offending stage.
        stage: usize,
        /// Tooth count of the driving gear.
        driving: i32,
        /// Tooth count of the driven gear.
        driven: i32,
    },

    /// Wheel diameter is zero, negative or NaN.
    #[error("wheel diameter must be > 0, got {0}")]
    NonPositiveDiameter(f64),

    /// The source range of a remap has zero width.
    #[error("cannot remap from an empty range ({0}..{0})")]
    EmptyRange(f64),

    /// Fewer than six values were given for a pose.
    #[error("a pose array needs 6 elements, got {len}")]
    PoseArrayTooShort {
        /// Number of values actually given.
        len: usize,
    },
}

/// Zero-size geometry that has no well-defined angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DegenerateGeometry {
    /// Robot and target coincide.
    #[error("target is at zero range from the robot")]
    ZeroRange,
}
