//! Scalar angular quantities.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
pub const fn turns(a: f32) -> Angle {
    Angle(a * RADS_PER_TURN)
}

const RADS_PER_DEG: f32 = PI / 180.0;
const RADS_PER_TURN: f32 = TAU;

//
// Inherent impls
//

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(RADS_PER_TURN / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(RADS_PER_TURN / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(RADS_PER_TURN);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / RADS_PER_TURN
    }

    /// Returns the minimum of `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
    /// Returns the maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        super::float::f32::sin(self.0)
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        super::float::f32::cos(self.0)
    }
    /// Simultaneously computes the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        (self.sin(), self.cos())
    }

    /// Returns `self` "wrapped around" to the range `min..max`.
    #[must_use]
    pub fn wrap(self, min: Self, max: Self) -> Self {
        let rem = super::float::f32::rem_euclid(self.0 - min.0, max.0 - min.0);
        Self(min.0 + rem)
    }
}

//
// Local trait impls
//

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f32::relative_epsilon())
    }
}

//
// Foreign trait impls
//

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{PI, TAU};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn unit_conversions() {
        assert_eq!(rads(PI).to_degs(), 180.0);
        assert_eq!(rads(PI).to_turns(), 0.5);
        assert_eq!(degs(180.0).to_rads(), PI);
        assert_eq!(degs(360.0).to_turns(), 1.0);
        assert_eq!(turns(1.0).to_rads(), TAU);
        assert_eq!(turns(1.0).to_degs(), 360.0);
    }

    #[test]
    fn clamping() {
        let min = degs(-45.0);
        let max = degs(45.0);
        assert_eq!(degs(60.0).clamp(min, max), max);
        assert_eq!(degs(10.0).clamp(min, max), degs(10.0));
        assert_eq!(degs(-50.0).clamp(min, max), min);
    }

    #[test]
    fn ordering() {
        assert!(degs(-370.0) < -Angle::FULL);
        assert!(degs(10.0) > Angle::ZERO);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(degs(90.0) + degs(90.0), Angle::STRAIGHT);
        assert_eq!(Angle::FULL - Angle::STRAIGHT, Angle::STRAIGHT);
        assert_eq!(-Angle::RIGHT, degs(-90.0));
        assert_eq!(Angle::RIGHT * 4.0, Angle::FULL);
        assert_eq!(Angle::FULL / 2.0, Angle::STRAIGHT);

        let mut a = Angle::ZERO;
        a += degs(30.0);
        a -= degs(10.0);
        assert_approx_eq!(a, degs(20.0));
    }

    #[cfg(feature = "fp")]
    #[test]
    fn trig_functions() {
        assert_eq!(degs(0.0).sin(), 0.0);
        assert_eq!(degs(0.0).cos(), 1.0);

        assert_approx_eq!(degs(30.0).sin(), 0.5, eps = 1e-5);
        assert_approx_eq!(degs(60.0).cos(), 0.5, eps = 1e-5);

        let (sin, cos) = degs(90.0).sin_cos();
        assert_approx_eq!(sin, 1.0);
        assert_approx_eq!(cos, 0.0, eps = 1e-6);
    }

    #[cfg(feature = "fp")]
    #[test]
    fn wrapping() {
        let a = degs(540.0).wrap(Angle::ZERO, Angle::FULL);
        assert_approx_eq!(a, degs(180.0));

        let a = degs(225.0).wrap(-Angle::STRAIGHT, Angle::STRAIGHT);
        assert_approx_eq!(a, degs(-135.0));
    }
}
