use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{traits::two, vec4, Number, Quat, Vec3, Vec4};

/// Indexes the components in `x`, `y`, `z`, `w` order.
impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vec[index]
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl_approx!([T] Quat<T>, |q| q.vec.as_slice().iter());

/// Hamilton product.
///
/// Not commutative: `p * q` applies the rotation `q` first, then `p`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, q: Self) -> Self {
        let p = self;
        Quat::new(
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y + p.y * q.w + p.z * q.x - p.x * q.z,
            p.w * q.z + p.z * q.w + p.x * q.y - p.y * q.x,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let u = self.vector_part();
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        v + (uv * self.w + uuv) * two::<T>()
    }
}

/// Rotates the `xyz` part of a vector, keeping `w`.
impl<T: Number> Mul<Vec4<T>> for Quat<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        (self * v.truncate()).extend(v.w)
    }
}

/// Rotates a vector by the inverse of the quaternion.
impl<T: Number> Mul<Quat<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn mul(self, q: Quat<T>) -> Vec3<T> {
        q.inverse() * self
    }
}

/// Rotates the `xyz` part of a vector by the inverse of the quaternion, keeping `w`.
impl<T: Number> Mul<Quat<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn mul(self, q: Quat<T>) -> Vec4<T> {
        q.inverse() * self
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Quat::from_vec(self.vec * s)
    }
}

impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Quat::from_vec(self.vec / s)
    }
}

impl<T: Number> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Quat::from_vec(self.vec - rhs.vec)
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::from_vec(-self.vec)
    }
}

impl<T> From<Quat<T>> for Vec4<T> {
    /// Returns the components in `x`, `y`, `z`, `w` order.
    fn from(q: Quat<T>) -> Self {
        q.vec
    }
}

impl<T> From<[T; 4]> for Quat<T> {
    /// Creates a quaternion from `[x, y, z, w]`.
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Quat::from_vec(vec4(x, y, z, w))
    }
}
