//! 2D vectors and points.
//!
//! A `Vec2` is a displacement, a `Point2` a location; points and vectors
//! combine the usual affine way: point + vector = point, point − point =
//! vector. Both are thin wrappers over a two-element array.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

//
// Types
//

/// A 2-vector with components of type `Sc`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Vec2<Sc = f32>(pub [Sc; 2]);

/// A 2-point with components of type `Sc`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Point2<Sc = f32>(pub [Sc; 2]);

/// A 2-vector with `i32` components.
pub type Vec2i = Vec2<i32>;
/// A 2-point with `i32` components.
pub type Point2i = Point2<i32>;

//
// Free fns
//

/// Returns a 2-vector with `x` and `y` components.
#[inline]
pub const fn vec2<Sc>(x: Sc, y: Sc) -> Vec2<Sc> {
    Vec2([x, y])
}

/// Returns a 2-point with `x` and `y` components.
#[inline]
pub const fn pt2<Sc>(x: Sc, y: Sc) -> Point2<Sc> {
    Point2([x, y])
}

//
// Inherent impls
//

impl<Sc: Copy> Vec2<Sc> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns a vector with `f` applied to both components.
    #[inline]
    pub fn map<T>(self, f: impl Fn(Sc) -> T) -> Vec2<T> {
        Vec2(self.0.map(f))
    }
}

impl<Sc: Copy> Point2<Sc> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns a point with `f` applied to both components.
    #[inline]
    pub fn map<T>(self, f: impl Fn(Sc) -> T) -> Point2<T> {
        Point2(self.0.map(f))
    }
}

impl Point2<f32> {
    /// Returns `self` with both components converted to `f32`.
    #[inline]
    pub const fn from_i32(p: Point2i) -> Self {
        Point2([p.0[0] as f32, p.0[1] as f32])
    }
}

//
// Foreign trait impls
//

impl<Sc: Add<Output = Sc> + Copy> Add for Vec2<Sc> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        vec2(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl<Sc: Sub<Output = Sc> + Copy> Sub for Vec2<Sc> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        vec2(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl<Sc: Neg<Output = Sc> + Copy> Neg for Vec2<Sc> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        vec2(-self.x(), -self.y())
    }
}

impl<Sc: Mul<Output = Sc> + Copy> Mul<Sc> for Vec2<Sc> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Sc) -> Self {
        vec2(self.x() * rhs, self.y() * rhs)
    }
}

impl<Sc: Add<Output = Sc> + Copy> Add<Vec2<Sc>> for Point2<Sc> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vec2<Sc>) -> Self {
        pt2(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl<Sc: Add<Output = Sc> + Copy> AddAssign<Vec2<Sc>> for Point2<Sc> {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2<Sc>) {
        *self = *self + rhs;
    }
}

impl<Sc: Sub<Output = Sc> + Copy> Sub for Point2<Sc> {
    type Output = Vec2<Sc>;
    #[inline]
    fn sub(self, rhs: Self) -> Vec2<Sc> {
        vec2(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_addition() {
        assert_eq!(vec2(1.0, 2.0) + vec2(-2.0, 1.0), vec2(-1.0, 3.0));
        assert_eq!(vec2(1, 2) - vec2(2, -1), vec2(-1, 3));
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(vec2(1.0, -2.0) * 0.0, vec2(0.0, 0.0));
        assert_eq!(vec2(1, -2) * 3, vec2(3, -6));
    }

    #[test]
    fn negation() {
        assert_eq!(-vec2(1, -2), vec2(-1, 2));
    }

    #[test]
    fn affine_ops() {
        assert_eq!(pt2(1.0, 2.0) + vec2(0.5, -1.0), pt2(1.5, 1.0));
        assert_eq!(pt2(3, 4) - pt2(1, 1), vec2(2, 3));

        let mut p = pt2(0.0, 0.0);
        p += vec2(1.0, 2.0);
        assert_eq!(p, pt2(1.0, 2.0));
    }

    #[test]
    fn component_accessors() {
        let v = vec2(3, -4);
        assert_eq!((v.x(), v.y()), (3, -4));
        assert_eq!(v.map(|c| c as f32), vec2(3.0, -4.0));

        let p = pt2(1.5, 2.5);
        assert_eq!((p.x(), p.y()), (1.5, 2.5));
        assert_eq!(Point2::from_i32(pt2(1, 2)), pt2(1.0, 2.0));
    }
}
