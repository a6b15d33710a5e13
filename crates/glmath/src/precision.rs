//! Default element type selection.
//!
//! Every type in this crate is generic over its element type, so the precision of an individual
//! vector, matrix or quaternion is picked by its type parameter (`Mat3<f64>`). Code that does not
//! care can use [`Real`] instead, which is [`f32`] unless the `f64` cargo feature is enabled.

use std::fmt;

use crate::Float;

/// The default floating-point element type.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// The default floating-point element type.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The precision of a floating-point element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit IEEE 754 floats ([`f32`]).
    Single,
    /// 64-bit IEEE 754 floats ([`f64`]).
    Double,
}

impl Precision {
    /// Returns the precision of the element type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Precision::of::<f32>(), Precision::Single);
    /// assert_eq!(Precision::of::<f64>(), Precision::Double);
    /// ```
    pub const fn of<T: Float>() -> Self {
        T::PRECISION
    }

    /// Returns the size of a single element in bytes.
    pub const fn size(self) -> usize {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => f.write_str("f32"),
            Precision::Double => f.write_str("f64"),
        }
    }
}

/// Precision of [`Real`], as configured by the `f64` cargo feature.
pub const DEFAULT_PRECISION: Precision = Precision::of::<Real>();
