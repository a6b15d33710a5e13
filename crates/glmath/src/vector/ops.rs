//! Operator and comparison impls for [`Vector`].
//!
//! Like GLSL, the arithmetic operators work component-wise, both between two vectors of the same
//! length and between a vector and a scalar.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{Number, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

/// Vectors compare equal to arrays holding the same elements.
impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl_approx!([T, const N: usize] Vector<T, N>, |v| v.0.iter());

impl<T: Number, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

macro_rules! componentwise {
    ($($op:ident :: $f:ident, $assign:ident :: $assign_f:ident, $sym:tt);+ $(;)?) => {
        $(
            impl<T: Number, const N: usize> $op for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $f(self, rhs: Self) -> Self {
                    Vector::from_fn(|i| self.0[i] $sym rhs.0[i])
                }
            }

            impl<T: Number, const N: usize> $op<T> for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $f(self, rhs: T) -> Self {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T: Number, const N: usize> $assign for Vector<T, N> {
                #[inline]
                fn $assign_f(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }

            impl<T: Number, const N: usize> $assign<T> for Vector<T, N> {
                #[inline]
                fn $assign_f(&mut self, rhs: T) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}
componentwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_ulps_eq};

    use crate::{vec2, vec3, Vec2, Vec3f};

    #[test]
    fn componentwise() {
        assert_eq!(vec3(1, 2, 3) + vec3(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(vec3(1, 2, 3) - vec3(1, 1, 1), vec3(0, 1, 2));
        assert_eq!(vec3(1, 2, 3) * vec3(2, 2, 2), vec3(2, 4, 6));
        assert_eq!(vec2(8, 6) / vec2(2, 3), vec2(4, 2));
        assert_eq!(-vec2(1, -1), vec2(-1, 1));
    }

    #[test]
    fn scalar() {
        assert_eq!(vec3(1, 2, 3) + 1, vec3(2, 3, 4));
        assert_eq!(vec3(1, 2, 3) - 1, vec3(0, 1, 2));
        assert_eq!(vec2(3, 4) * 2, vec2(6, 8));
        assert_eq!(vec2(3, 4) / 2, vec2(1, 2));
    }

    #[test]
    fn assign() {
        let mut v: Vec2<i32> = vec2(1, 2);
        v += vec2(1, 1);
        v *= 3;
        v -= vec2(6, 0);
        v /= 3;
        v += 1;
        v *= vec2(2, 1);
        v -= 1;
        v /= vec2(1, 3);
        assert_eq!(v, vec2(1, 1));
    }

    #[test]
    fn arrays() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2], vec2(1, 2));
    }

    #[test]
    fn approx() {
        let a = Vec3f::X * 0.1 * 3.0;
        assert_abs_diff_eq!(a, Vec3f::X * 0.3, epsilon = 1e-6);
        assert_ulps_eq!(a, Vec3f::X * 0.3);
    }
}
