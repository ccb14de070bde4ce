//! A small linear algebra and animation math library for real-time graphics.
//!
//! # Motivation
//!
//! Games and other interactive programs keep needing the same handful of types: 2, 3 and 4
//! element vectors, square matrices to transform them, quaternions to represent orientation, and
//! a set of easing curves to animate between values. This library provides exactly those, and
//! nothing else.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Vector and matrix dimensions are
//!   specified with const generics, which keeps the API small and lets most operations be
//!   implemented once for every size.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors. Every
//!   type is [`bytemuck::Pod`] when its element type is, so it can be copied into GPU buffers
//!   as-is.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//!   [`f32`] and [`f64`] get type aliases (`Vec3f`, `Mat4d`, ...), integer types work wherever the
//!   operation doesn't need a square root or trigonometry.
//! - Never panic on degenerate input. Normalizing a zero vector or inverting a singular matrix
//!   produces NaN or infinite components, exactly as the underlying float arithmetic does. Debug
//!   builds log such cases at `debug` level through the [`log`] crate.
//! - Don't do SIMD, generic N-dimensional algebra or geometry queries.
//!
//! # Conventions
//!
//! - Vectors are column vectors. `m * v` transforms `v` by `m`, and `a * b` is the transform that
//!   applies `b` first, then `a`. The same holds for quaternions.
//! - Matrices are indexed as `m[(row, column)]`.
//! - Coordinate systems are right-handed. Positive angles rotate counterclockwise when looking
//!   down the rotation axis towards the origin.
//! - Projection matrices map view space to the OpenGL clip space (`z` in `-1.0..=1.0`).
//!
//! # Approximate comparison
//!
//! All types implement the traits of the [`approx`] crate, and additionally provide a
//! `nearly_equal` method that compares with an absolute tolerance of [`EPSILON`] per component.

pub mod ease;
mod matrix;
mod quat;
mod scalar;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use scalar::*;
pub use traits::*;
pub use vector::*;
