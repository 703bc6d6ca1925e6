use core::{
    f64::consts::{PI, TAU},
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use num_traits::Float;

use crate::constrain_radians;

/// A planar angle, stored in radians.
///
/// Angles are not wrapped on construction. Use [`Angle::wrapped_half`] to bring one into
/// the half-open interval `(-π, π]`, or [`Angle::rotate_by`] which wraps its result the
/// same way.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// An angle of zero radians.
    pub const ZERO: Self = Self(0.0);

    /// Half of a full revolution (π radians).
    pub const HALF_TURN: Self = Self(PI);

    /// A quarter of a full revolution (π/2 radians).
    pub const QUARTER_TURN: Self = Self(PI / 2.0);

    /// Creates an angle from a measurement in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Creates an angle from a measurement in degrees.
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees * (PI / 180.0))
    }

    /// Creates an angle from a number of turns (revolutions).
    #[must_use]
    pub const fn from_turns(turns: f64) -> Self {
        Self(turns * TAU)
    }

    /// Creates the angle of the vector `(x, y)` measured from the positive x axis.
    ///
    /// The result lies in `(-π, π]`. A zero vector yields [`Angle::ZERO`].
    #[must_use]
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self(constrain_radians(y.atan2(x)))
    }

    /// Returns this angle in radians.
    #[must_use]
    pub const fn as_radians(self) -> f64 {
        self.0
    }

    /// Returns this angle in degrees.
    #[must_use]
    pub const fn as_degrees(self) -> f64 {
        self.0 * (180.0 / PI)
    }

    /// Returns this angle in turns (revolutions).
    #[must_use]
    pub const fn as_turns(self) -> f64 {
        self.0 / TAU
    }

    /// Wraps this angle into the half-open interval `(-π, π]`.
    #[must_use]
    pub fn wrapped_half(self) -> Self {
        Self(constrain_radians(self.0))
    }

    /// Rotates this angle by `other`, wrapping the result into `(-π, π]`.
    #[must_use]
    pub fn rotate_by(self, other: Self) -> Self {
        (self + other).wrapped_half()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.as_degrees())
    }
}

// MARK: Operators

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

// MARK: Extension Trait

/// Extension trait for easily creating [`Angle`]s from floating-point
/// number literals.
pub trait IntoAngle {
    /// Creates an [`Angle`] of `self` degrees.
    fn deg(self) -> Angle;

    /// Creates an [`Angle`] of `self` radians.
    fn rad(self) -> Angle;

    /// Creates an [`Angle`] of `self` turns (revolutions).
    fn turns(self) -> Angle;
}

impl IntoAngle for f64 {
    fn deg(self) -> Angle {
        Angle::from_degrees(self)
    }

    fn rad(self) -> Angle {
        Angle::from_radians(self)
    }

    fn turns(self) -> Angle {
        Angle::from_turns(self)
    }
}
