//! Floating-point compatibility API.
//!
//! Most floating-point functions are currently unavailable in `no_std`.
//! This module provides the missing functions using either the `libm` or
//! `micromath` crate, depending on which feature is enabled. As a fallback,
//! it also implements the rounding functions even if none of the features
//! is enabled, so that the raster primitives work on a featureless build.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::floorf as floor;
    pub use libm::roundf as round;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;

    pub use super::fallback::rem_euclid;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn floor(x: f32) -> f32 {
        mm::floor(x)
    }
    #[inline]
    pub fn round(x: f32) -> f32 {
        mm::round(x)
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        mm::rem_euclid(x, m)
    }
}

pub mod fallback {
    /// Returns the largest integer less than or equal to `x`.
    #[inline]
    pub fn floor(x: f32) -> f32 {
        (x as i64 - (x < 0.0) as i64) as f32
    }
    /// Returns `x` rounded to the nearest integer.
    ///
    /// Unlike `std`, rounds negative halves up rather than away from zero.
    #[inline]
    pub fn round(x: f32) -> f32 {
        floor(x + 0.5)
    }
    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        let r = x % m;
        r + if r < 0.0 { m.abs() } else { 0.0 }
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;
