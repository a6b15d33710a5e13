//! Numeric element traits.
//!
//! Vectors, matrices and quaternions are generic over their element type. The traits in this
//! module describe what an element type has to support for a given operation, so that e.g.
//! addition works on integer matrices while [`Quat::slerp`][crate::Quat::slerp] requires a
//! [`Float`].

use std::{fmt, ops};

use crate::Precision;

/// Additive identity.
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Element types supporting the four arithmetic operators and negation.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types with an absolute value.
pub trait Signed {
    fn abs(self) -> Self;
}

/// Trigonometric functions.
///
/// All angles are in radians.
pub trait Trig: Sized {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;
    /// Computes sine and cosine at once, returning `(sin, cos)`.
    fn sin_cos(self) -> (Self, Self);
}

/// Square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Minimum and maximum of two values.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] ([`f64::min`]
/// and [`f64::max`] respectively), integers use [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Floating-point element types.
///
/// This is the bound required by everything that needs square roots or trigonometry: quaternion
/// rotations, normalization, interpolation and the matrix/quaternion casts.
pub trait Float: Number + Signed + Trig + Sqrt + MinMax + PartialOrd + fmt::Debug {
    /// Machine epsilon of the type.
    const EPSILON: Self;

    /// Which precision this type represents.
    const PRECISION: Precision;

    /// Converts an `f64` constant to this type (rounding if needed).
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! signed_int_impls {
    ($($ty:ty),+) => {
        $(
            impl Signed for $ty {
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }
        )+
    };
}
signed_int_impls!(i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($ty:ident => $precision:ident),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Signed for $ty {
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    <$ty>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$ty>::max(self, other)
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                fn cos(self) -> Self {
                    <$ty>::cos(self)
                }

                fn tan(self) -> Self {
                    <$ty>::tan(self)
                }

                fn asin(self) -> Self {
                    <$ty>::asin(self)
                }

                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                fn atan(self) -> Self {
                    <$ty>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$ty>::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$ty>::sin_cos(self)
                }
            }

            impl Float for $ty {
                const EPSILON: Self = <$ty>::EPSILON;
                const PRECISION: Precision = Precision::$precision;

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}
float_impls!(f32 => Single, f64 => Double);

/// Returns `1/2` in the element type.
pub(crate) fn half<T: Number>() -> T {
    T::ONE / (T::ONE + T::ONE)
}

/// Returns `2` in the element type.
pub(crate) fn two<T: Number>() -> T {
    T::ONE + T::ONE
}
