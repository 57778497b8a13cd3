//! Core functionality of the `metrorail` project.
//!
//! Includes a small math library with 2D vectors, points, and angles;
//! procedural rasterization primitives for lines and circles; the animation
//! state machine that sequences a metro train through its station cycle;
//! and the scene geometry that paints the whole diorama into a pixel buffer.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O, timekeeping, or any floating-point
//!   functions not included in `core`. In particular this means trigonometric
//!   functions, and thus the `scene` module.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! All features are disabled by default.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod math;
pub mod raster;
#[cfg(feature = "fp")]
pub mod scene;
pub mod sim;
pub mod stats;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        color::{Color3, Color3f, rgb},
        vec::{Point2, Point2i, Vec2, Vec2i, pt2, vec2},
    };

    pub use crate::raster::{bresenham_line, dda_line, midpoint_circle};

    pub use crate::sim::{Params, Phase, Simulation};

    pub use crate::util::buf::Buf2;
}
