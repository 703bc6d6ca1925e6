//! Math utilities & types.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::PI;

use num_traits::Float;

mod angle;
mod error;
mod pose;
mod target;
mod vec2;
mod vec3;

pub use angle::{Angle, IntoAngle};
pub use error::{ConfigurationError, DegenerateGeometry, Error};
pub use pose::{Pose2, Pose3, Rotation3, Transform3};
pub use target::RobotRelativeTarget;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Normalizes an angle in radians to the half-open interval `(-π, π]`.
///
/// # Examples
///
/// ```
/// use core::f64::consts::PI;
/// use froglib_math::constrain_radians;
///
/// assert!((constrain_radians(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// assert_eq!(constrain_radians(-PI), PI);
/// ```
#[must_use]
pub fn constrain_radians(radians: f64) -> f64 {
    let wrapped = radians.sin().atan2(radians.cos());

    // atan2 can land on -π itself; the interval is open on that side.
    if wrapped <= -PI { PI } else { wrapped }
}

/// Linearly maps `value` from the range `old_min..old_max` onto `new_min..new_max`.
///
/// Values outside the old range extrapolate; nothing is clamped.
///
/// # Errors
///
/// Returns [`ConfigurationError::EmptyRange`] if `old_min == old_max`.
///
/// # Examples
///
/// ```
/// use froglib_math::remap;
///
/// assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0)?, 50.0);
/// assert_eq!(remap(0.0, 0.0, 10.0, -1.0, 1.0)?, -1.0);
/// # Ok::<(), froglib_math::Error>(())
/// ```
pub fn remap(
    value: f64,
    old_min: f64,
    old_max: f64,
    new_min: f64,
    new_max: f64,
) -> Result<f64, Error> {
    let old_span = old_max - old_min;
    if old_span == 0.0 {
        return Err(ConfigurationError::EmptyRange(old_min).into());
    }

    Ok((value - old_min) * (new_max - new_min) / old_span + new_min)
}

/// Returns the straight-line length of a transform's translation.
#[must_use]
pub fn range_from_transform(transform: &Transform3) -> f64 {
    transform.translation.length()
}

/// Returns the ground-plane bearing of a transform's translation.
#[must_use]
pub fn angle_from_transform(transform: &Transform3) -> Angle {
    let translation = transform.translation;
    Angle::from_radians(translation.y.atan2(translation.x))
}

/// Splits `items` into consecutive chunks whose lengths are given by `sizes`.
///
/// Whatever is left over after the last size forms one final chunk, so the output always
/// has `sizes.len() + 1` chunks. If `sizes` asks for more items than there are, the
/// affected chunks come out short or empty rather than failing.
///
/// # Examples
///
/// ```
/// use froglib_math::partition_array;
///
/// let chunks = partition_array(1..=10, &[3, 2]);
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9, 10]]);
/// ```
pub fn partition_array<T, I>(items: I, sizes: &[usize]) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let mut items = items.into_iter();

    let mut chunks: Vec<Vec<T>> = sizes
        .iter()
        .map(|&size| items.by_ref().take(size).collect())
        .collect();
    chunks.push(items.collect());

    chunks
}

/// Builds a pose from `[x, y, z, roll, pitch, yaw]`, with angles in degrees.
///
/// Values past the sixth are ignored.
///
/// # Errors
///
/// Returns [`ConfigurationError::PoseArrayTooShort`] if fewer than six values are given.
pub fn array_to_pose(values: &[f64]) -> Result<Pose3, Error> {
    let &[x, y, z, roll, pitch, yaw, ..] = values else {
        return Err(ConfigurationError::PoseArrayTooShort { len: values.len() }.into());
    };

    Ok(Pose3::new(x, y, z, Rotation3::from_degrees(roll, pitch, yaw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use approx::assert_relative_eq;
    use core::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn constrain_radians_range() {
        let mut x = -20.0;
        while x < 20.0 {
            let c = constrain_radians(x);
            assert!(c > -PI && c <= PI, "{x} -> {c}");
            x += 0.173;
        }
    }

    #[test]
    fn constrain_radians_is_idempotent() {
        for x in [-9.5, -PI, -FRAC_PI_2, 0.0, 1.0, PI, 4.0, 12.25] {
            let once = constrain_radians(x);
            assert_relative_eq!(constrain_radians(once), once, epsilon = 1e-12);
        }
    }

    #[test]
    fn constrain_radians_boundaries() {
        assert_relative_eq!(constrain_radians(PI), PI);
        assert_relative_eq!(constrain_radians(-PI), PI);
        assert_relative_eq!(constrain_radians(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(constrain_radians(-FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn remap_examples() {
        assert_relative_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
        assert_relative_eq!(remap(0.0, 0.0, 10.0, -1.0, 1.0).unwrap(), -1.0);
        assert_relative_eq!(remap(10.0, 0.0, 10.0, -1.0, 1.0).unwrap(), 1.0);
        assert_relative_eq!(remap(15.0, 0.0, 10.0, 0.0, 1.0).unwrap(), 1.5);
        // Inverted target range.
        assert_relative_eq!(remap(2.5, 0.0, 10.0, 1.0, 0.0).unwrap(), 0.75);
    }

    #[test]
    fn remap_empty_range_fails() {
        assert_eq!(
            remap(1.0, 3.0, 3.0, 0.0, 1.0),
            Err(Error::InvalidConfiguration(ConfigurationError::EmptyRange(3.0)))
        );
    }

    #[test]
    fn transform_range_and_angle() {
        let transform = Transform3::new(Vec3::new(3.0, 4.0, 12.0), Rotation3::default());
        assert_relative_eq!(range_from_transform(&transform), 13.0);
        assert_relative_eq!(
            angle_from_transform(&transform).as_radians(),
            4.0_f64.atan2(3.0)
        );
    }

    #[test]
    fn partition_with_remainder() {
        let chunks = partition_array(1..=10, &[3, 2]);
        assert_eq!(
            chunks,
            vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9, 10]]
        );
    }

    #[test]
    fn partition_exact_fit_has_empty_tail() {
        let chunks = partition_array([1, 2, 3, 4], &[1, 3]);
        assert_eq!(chunks, vec![vec![1], vec![2, 3, 4], vec![]]);
    }

    #[test]
    fn partition_overrun_truncates() {
        let chunks = partition_array(vec!['a', 'b', 'c'], &[2, 5, 1]);
        assert_eq!(chunks, vec![vec!['a', 'b'], vec!['c'], vec![], vec![]]);
    }

    #[test]
    fn partition_without_sizes() {
        let chunks = partition_array([7, 8], &[]);
        assert_eq!(chunks, vec![vec![7, 8]]);
    }

    #[test]
    fn array_to_pose_reads_degrees() {
        let pose = array_to_pose(&[1.0, 2.0, 3.0, 0.0, 0.0, 90.0]).unwrap();
        assert_relative_eq!(pose.x(), 1.0);
        assert_relative_eq!(pose.y(), 2.0);
        assert_relative_eq!(pose.z(), 3.0);
        assert_relative_eq!(pose.rotation.yaw.as_degrees(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(pose.rotation.roll.as_radians(), 0.0);
    }

    #[test]
    fn array_to_pose_ignores_extra_values() {
        let pose = array_to_pose(&[0.0, 0.0, 0.0, 10.0, 20.0, 30.0, 99.0]).unwrap();
        assert_relative_eq!(pose.rotation.pitch.as_degrees(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn array_to_pose_rejects_short_input() {
        assert_eq!(
            array_to_pose(&[1.0, 2.0, 3.0]),
            Err(Error::InvalidConfiguration(
                ConfigurationError::PoseArrayTooShort { len: 3 }
            ))
        );
    }
}
