use std::{array, fmt};

use crate::{
    error::{resolve_index, Result},
    traits::two,
    MinMax, Number, One, Signed, Sqrt, Zero,
};

mod ops;
pub(crate) mod view;

macro_rules! aliases {
    ($($n:literal => $name:ident, $f32:ident, $f64:ident;)+) => {
        $(
            #[doc = concat!("A ", stringify!($n), "-element column vector.")]
            pub type $name<T> = Vector<T, $n>;
            #[doc = concat!("A [`", stringify!($name), "`] with [`f32`] elements.")]
            pub type $f32 = $name<f32>;
            #[doc = concat!("A [`", stringify!($name), "`] with [`f64`] elements.")]
            pub type $f64 = $name<f64>;
        )+
    };
}
aliases! {
    2 => Vec2, Vec2f, Vec2d;
    3 => Vec3, Vec3f, Vec3d;
    4 => Vec4, Vec4f, Vec4d;
}

/// A column vector of `N` elements of type `T`, GLSL's `vecN`.
///
/// Vectors are the columns of a [`Matrix`][crate::Matrix], the right-hand side of matrix-vector
/// products, and the operand of quaternion rotations.
///
/// The `+`, `-`, `*` and `/` operators work component-wise, between two vectors or between a vector
/// and a scalar. Geometric functions ([`Vector::dot`], [`Vector::length`], [`Vector::cross`], ...)
/// are methods.
///
/// Elements can be accessed:
/// - as fields `x`, `y`, `z` and `w` (up to the length of the vector),
/// - through [`Index`][std::ops::Index] like an array (panicking when out of bounds),
/// - through [`Vector::component`], which accepts negative indices and returns an error when out
///   of bounds.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let mut v = vec3(1.0, 2.0, 3.0);
/// v.z = 4.0;
/// assert_eq!(v[2], 4.0);
/// assert_eq!(v.component(-1), Ok(4.0));
/// assert_eq!(v * 2.0, vec3(2.0, 4.0, 8.0));
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector with all elements set to zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

macro_rules! axes {
    ($($n:literal: $($axis:ident = [$($elem:ident),+]),+;)+) => {
        $(
            impl<T: Zero + One> Vector<T, $n> {
                $(
                    #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                    pub const $axis: Self = Self([$(T::$elem),+]);
                )+
            }
        )+
    };
}
axes! {
    2: X = [ONE, ZERO], Y = [ZERO, ONE];
    3: X = [ONE, ZERO, ZERO], Y = [ZERO, ONE, ZERO], Z = [ZERO, ZERO, ONE];
    4: X = [ONE, ZERO, ZERO, ZERO],
       Y = [ZERO, ONE, ZERO, ZERO],
       Z = [ZERO, ZERO, ONE, ZERO],
       W = [ZERO, ZERO, ZERO, ONE];
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns the GLSL name of this vector type (`vec2`, `vec3`, `vec4`).
    pub fn type_name() -> String {
        format!("vec{N}")
    }

    /// Creates a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Vec3::splat(2), vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector by invoking `cb` with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Vec4::from_fn(|i| i * 10), vec4(0, 10, 20, 30));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec2(1, 2).zip(vec2('a', 'b')), vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut pairs = self.0.into_iter().zip(other.0);
        Vector(array::from_fn(|_| match pairs.next() {
            Some(pair) => pair,
            // Both arrays have exactly `N` elements.
            None => unreachable!(),
        }))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the element at `index`. Negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][crate::Error::IndexOutOfRange] unless
    /// `-N <= index < N`.
    pub fn component(&self, index: isize) -> Result<T>
    where
        T: Copy,
    {
        let index = resolve_index(Self::type_name, index, N)?;
        Ok(self.0[index])
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        self.map(T::abs)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Clamps each component of `self` to the range given by the corresponding components of
    /// `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec3(-2.0, 0.5, 9.0).clamp(Vec3::splat(-1.0), Vec3::splat(1.0));
    /// assert_eq!(v, vec3(-1.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].clamp(min.0[i], max.0[i]))
    }
}

/// Geometric functions.
impl<T: Number, const N: usize> Vector<T, N> {
    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i] * other.0[i])
    }

    /// Returns the squared length, `self.dot(self)`.
    pub fn length2(&self) -> T {
        self.dot(*self)
    }

    /// Returns the Euclidean length.
    pub fn length(&self) -> T
    where
        T: Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn distance(self, other: Self) -> T
    where
        T: Sqrt,
    {
        (self - other).length()
    }

    /// Returns the vector with the same direction as `self` and a length of 1.
    ///
    /// Normalizing a zero vector divides by zero, yielding NaN elements for floats.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3d::Z);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Sqrt,
    {
        self / self.length()
    }

    /// Reflects the incident vector `self` at a surface with the (normalized) normal `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec2(1.0, -1.0).reflect(Vec2::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, n: Self) -> Self {
        self - n * (two::<T>() * n.dot(self))
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec2(0.0, 10.0).lerp(vec2(10.0, 20.0), 0.5), vec2(5.0, 15.0));
    /// ```
    #[doc(alias = "mix")]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }
}

impl<T: Number> Vector<T, 3> {
    /// Returns the cross product of `self` and `other`, a vector perpendicular to both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

// `extend` appends an element, `truncate` drops the last one.
macro_rules! resize {
    ($($n:literal => $m:literal: [$($elem:ident),+];)+) => {
        $(
            impl<T> Vector<T, $n> {
                #[doc = concat!("Appends `value`, yielding a `vec", stringify!($m), "`.")]
                pub fn extend(self, value: T) -> Vector<T, $m> {
                    let [$($elem),+] = self.0;
                    Vector([$($elem,)+ value])
                }
            }

            impl<T> Vector<T, $m> {
                #[doc = concat!("Drops the last element, yielding a `vec", stringify!($n), "`.")]
                pub fn truncate(self) -> Vector<T, $n> {
                    let [$($elem,)+ _] = self.0;
                    Vector([$($elem),+])
                }
            }
        )+
    };
}
resize! {
    2 => 3: [x, y];
    3 => 4: [x, y, z];
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Formats the elements as a tuple, e.g. `(1.0, 2.0)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |tuple, elem| tuple.field(elem))
            .finish()
    }
}

/// Formats the vector like its GLSL constructor, e.g. `vec2(1, 2)`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec{N}(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

/// Creates a [`Vec2`].
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Creates a [`Vec3`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a [`Vec4`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::Error;

    use super::*;

    #[test]
    fn fields() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        v[1] = 9;
        assert_eq!(v, [777, 9]);
        assert_eq!((v.x, v.y), (777, 9));
    }

    #[test]
    fn negative_indices() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.component(0), Ok(1));
        assert_eq!(v.component(-1), Ok(4));
        assert_eq!(v.component(-4), Ok(1));
        assert_eq!(
            v.component(4),
            Err(Error::IndexOutOfRange {
                target: "vec4".into(),
                index: 4,
                len: 4,
            })
        );
        assert!(v.component(-5).is_err());
    }

    #[test]
    fn fmt() {
        assert_eq!(Vec4f::W.to_string(), "vec4(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(Vec2::<i32>::type_name(), "vec2");
    }

    #[test]
    fn geometry() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec3(2, 0, 0).cross(vec3(0, 3, 0)), vec3(0, 0, 6));
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
        assert_relative_eq!(vec3(1.0f32, 1.0, 1.0).normalize().length(), 1.0, epsilon = 1e-6);
        assert_eq!(vec3(1, -1, 0).reflect(vec3(0, 1, 0)), vec3(1, 1, 0));
    }

    #[test]
    fn componentwise_functions() {
        assert_eq!(vec3(-1, 2, -3).abs(), vec3(1, 2, 3));
        assert_eq!(vec2(1, 5).min(vec2(3, 2)), vec2(1, 2));
        assert_eq!(vec2(1, 5).max(vec2(3, 2)), vec2(3, 5));
        assert_eq!(vec2(4.0, 8.0).lerp(vec2(8.0, 0.0), 0.25), vec2(5.0, 6.0));
    }

    #[test]
    fn resize() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }
}
