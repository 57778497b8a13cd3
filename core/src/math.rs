//! Mathematical utilities: angles, vectors, points, and colors.

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod vec;

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    color::{Color3, Color3f, rgb},
    vec::{Point2, Point2i, Vec2, Vec2i, pt2, vec2},
};
