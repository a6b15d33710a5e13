//! Small fixed-size vectors, matrices and quaternions with graphics-style semantics.
//!
//! The types and functions in this crate follow the conventions of the GLSL shading language and
//! of the GLM library:
//!
//! - Matrices are stored in column-major order, and the type aliases name the number of columns
//!   first: a [`Mat3x2`] has 3 columns and 2 rows.
//! - Vectors are column vectors. `mat * vec` transforms a vector, and `vec * mat` treats the
//!   vector as a row vector.
//! - [`Quat`] represents a rotation as a unit quaternion. `q * v` rotates `v`, and `p * q` is the
//!   rotation `q` followed by `p`.
//!
//! All types are generic over their element type, and most operations only require the traits in
//! this crate's [`Number`] and [`Float`] hierarchy. [`Real`] selects a default floating-point type
//! via the `f64` cargo feature.
//!
//! # Static and dynamic shapes
//!
//! The shape of a [`Vector`] or [`Matrix`] is part of its type, so multiplying matrices of
//! incompatible shape is a compile error, and indexing panics like indexing a slice does.
//!
//! [`AnyMatrix`], [`AnyVector`] and [`Arg`] carry their shape at runtime instead. They back
//! argument-list based construction ([`Matrix::try_from_args`], [`Quat::try_from_args`]) and
//! checked arithmetic, and report mismatches as an [`Error`].
//!
//! # Features
//!
//! - `bytemuck` (enabled by default): implements [`bytemuck::Pod`] and [`bytemuck::Zeroable`] for
//!   vectors, matrices and quaternions, so that they can be uploaded to the GPU directly.
//! - `f64`: makes [`Real`] an alias of [`f64`].
//!
//! # Logging
//!
//! Operations that hit a degenerate input and fall back to a defined result (normalizing a
//! zero-length quaternion, interpolating between nearly parallel quaternions, ...) emit a
//! `trace`-level message through the [`log`] crate.

#[macro_use]
mod macros;

mod dynamic;
mod error;
mod matrix;
mod precision;
mod quat;
mod traits;
mod vector;

pub use dynamic::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use precision::{Precision, Real, DEFAULT_PRECISION};
pub use quat::*;
pub use traits::*;
pub use vector::*;
