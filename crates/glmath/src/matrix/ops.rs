//! Operator and comparison impls for [`Matrix`].
//!
//! Shapes are checked at compile time: a `Mat3x2 * Mat4` simply has no `Mul` impl. The runtime
//! equivalent lives in [`AnyMatrix`][crate::AnyMatrix].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{traits::Number, Float, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

/// Column access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl_approx!(
    [T, const R: usize, const C: usize] Matrix<T, R, C>,
    |m| m.0.iter().flat_map(|col| col.as_slice())
);

impl<T: Number, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident :: $f:ident, $assign:ident :: $assign_f:ident, $sym:tt);+ $(;)?) => {
        $(
            /// Element-wise operation on two matrices of the same shape.
            impl<T: Number, const R: usize, const C: usize> $op for Matrix<T, R, C> {
                type Output = Self;

                fn $f(self, rhs: Self) -> Self {
                    Matrix::from_fn(|row, col| self[(row, col)] $sym rhs[(row, col)])
                }
            }

            /// Applies the operation between every element and a scalar.
            impl<T: Number, const R: usize, const C: usize> $op<T> for Matrix<T, R, C> {
                type Output = Self;

                fn $f(self, rhs: T) -> Self {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T: Number, const R: usize, const C: usize> $assign for Matrix<T, R, C> {
                fn $assign_f(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }

            impl<T: Number, const R: usize, const C: usize> $assign<T> for Matrix<T, R, C> {
                fn $assign_f(&mut self, rhs: T) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}
elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Row Vector * Matrix.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R>
where
    T: Number,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| rhs[col].dot(self))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Square Matrix, keeping the shape of `self`.
impl<T, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// Division by a matrix multiplies with its inverse, which only exists for the square shapes.
macro_rules! inverse_div {
    ($($n:literal),+) => {
        $(
            /// `lhs * inverse(rhs)`.
            ///
            /// # Panics
            ///
            /// Panics if `rhs` is not invertible.
            impl<T: Float, const R: usize> Div<Matrix<T, $n, $n>> for Matrix<T, R, $n> {
                type Output = Self;

                #[track_caller]
                fn div(self, rhs: Matrix<T, $n, $n>) -> Self {
                    self * rhs.invert()
                }
            }

            impl<T: Float, const R: usize> DivAssign<Matrix<T, $n, $n>> for Matrix<T, R, $n> {
                #[track_caller]
                fn div_assign(&mut self, rhs: Matrix<T, $n, $n>) {
                    *self = *self / rhs;
                }
            }

            /// `inverse(lhs) * rhs`.
            impl<T: Float> Div<Vector<T, $n>> for Matrix<T, $n, $n> {
                type Output = Vector<T, $n>;

                #[track_caller]
                fn div(self, rhs: Vector<T, $n>) -> Vector<T, $n> {
                    self.invert() * rhs
                }
            }

            /// `lhs * inverse(rhs)`.
            impl<T: Float> Div<Matrix<T, $n, $n>> for Vector<T, $n> {
                type Output = Vector<T, $n>;

                #[track_caller]
                fn div(self, rhs: Matrix<T, $n, $n>) -> Vector<T, $n> {
                    self * rhs.invert()
                }
            }
        )+
    };
}
inverse_div!(2, 3, 4);
