mod cast;
mod ops;
mod view;

use std::fmt;

use crate::{
    error::{resolve_index, Result},
    traits::{half, two},
    vec3, vec4, Float, Number, One, Sqrt, Vec3, Vector, Zero,
};

pub use cast::*;

/// A [`Quat`] with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A [`Quat`] with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion `w + xi + yj + zk` consisting of a real part `w` and 3 imaginary parts.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// The type does not enforce unit length: non-unit quaternions are valid intermediate values, and
/// [`Quat::normalize`] has to be called explicitly.
///
/// Quaternions are stored like a 4-dimensional vector in `x`, `y`, `z`, `w` order, and the
/// components can be accessed as fields. Constructors that take individual components, like
/// [`Quat::new`], take `w` first.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let q = Quat::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!((q.w, q.x, q.y, q.z), (1.0, 2.0, 3.0, 4.0));
/// assert_eq!(q[3], 1.0);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity `(w=1, x=0, y=0, z=0)`.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and imaginary parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] in `x`, `y`, `z`, `w` order.
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components as a [`Vector`] in `x`, `y`, `z`, `w` order.
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Creates a quaternion from a real part and the vector of imaginary parts.
    pub fn from_scalar_vector(w: T, v: Vec3<T>) -> Self {
        let [x, y, z] = v.into_array();
        Self::new(w, x, y, z)
    }

    /// Returns the imaginary (vector) part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3<T>
    where
        T: Copy,
    {
        vec3(self.x, self.y, self.z)
    }

    /// Returns the component at `index` in `x`, `y`, `z`, `w` order.
    ///
    /// Negative indices count from the end, so `-1` is `w`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][crate::Error::IndexOutOfRange] if `index` is not in
    /// `-4..4`.
    pub fn component(&self, index: isize) -> Result<T>
    where
        T: Copy,
    {
        let index = resolve_index(|| "quat".to_string(), index, 4)?;
        Ok(self.vec[index])
    }

    /// Returns the conjugate `(w, -x, -y, -z)`.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the multiplicative inverse (the conjugate divided by the squared length).
    ///
    /// For unit quaternions this is the same as the [`Quat::conjugate`].
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() / self.dot(self)
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A quaternion of length zero normalizes to [`Quat::IDENTITY`].
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let len = self.length();
        if len <= T::ZERO {
            log::trace!("normalizing a zero-length quaternion, using identity");
            return Self::IDENTITY;
        }
        self / len
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion from Euler angles `(pitch, yaw, roll)`, ie. rotations around the X,
    /// Y, and Z axis in radians.
    ///
    /// [`Quat::euler_angles`] performs the inverse conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quat::from_euler(vec3(0.0, 0.0, std::f64::consts::FRAC_PI_2));
    /// assert_relative_eq!(q * Vec3d::X, Vec3d::Y, epsilon = 1e-12);
    /// ```
    #[doc(alias = "euler")]
    pub fn from_euler(angles: Vec3<T>) -> Self {
        let [(sx, cx), (sy, cy), (sz, cz)] = (angles * half::<T>()).into_array().map(T::sin_cos);

        Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// `axis` must already be normalized, it is used as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quat::from_axis_angle(Vec3f::Z, std::f32::consts::PI);
    /// assert_relative_eq!(q.to_mat3(), Mat3::from_diagonal([-1.0, -1.0, 1.0]), epsilon = 1e-6);
    /// ```
    #[doc(alias = "angleAxis")]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (sin, cos) = (angle * half::<T>()).sin_cos();
        Self::from_scalar_vector(cos, axis * sin)
    }

    /// Creates the shortest rotation that turns the direction `from` into the direction `to`.
    ///
    /// Both inputs are expected to be unit vectors.
    ///
    /// If the vectors point in opposite directions, any axis perpendicular to them describes a
    /// shortest rotation. Once their cross product is too small to carry a direction, the
    /// rotation is 180° around `from x X` (or `from x Y` if `from` is parallel to the X axis).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quat::from_rotation_arc(Vec3d::X, Vec3d::Y);
    /// assert_relative_eq!(q * Vec3d::X, Vec3d::Y, epsilon = 1e-12);
    ///
    /// let flip = Quat::from_rotation_arc(Vec3d::X, -Vec3d::X);
    /// assert_relative_eq!(flip * Vec3d::X, -Vec3d::X, epsilon = 1e-12);
    /// ```
    pub fn from_rotation_arc(from: Vec3<T>, to: Vec3<T>) -> Self {
        let dot = from.dot(to);
        let cross = from.cross(to);
        // `1 + dot` loses all precision near antiparallel inputs, but the cross product still
        // carries the axis until it drops to rounding-error size.
        if dot >= T::ZERO || cross.length2() > T::EPSILON * T::EPSILON {
            return Self::from_scalar_vector(T::ONE + dot, cross).normalize();
        }

        log::trace!("rotation arc between antiparallel vectors, picking a perpendicular axis");
        let mut axis = from.cross(Vec3::X);
        if axis.length2() <= T::EPSILON {
            axis = from.cross(Vec3::Y);
        }
        Self::from_scalar_vector(T::ZERO, axis.normalize())
    }

    /// Linearly interpolates between `self` (at `a = 0`) and `other` (at `a = 1`).
    ///
    /// The result is not normalized.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not in `[0, 1]`.
    #[track_caller]
    pub fn lerp(self, other: Self, a: T) -> Self {
        assert_unit_factor(a);
        self * (T::ONE - a) + other * a
    }

    /// Spherical linear interpolation between `self` (at `a = 0`) and `other` (at `a = 1`).
    ///
    /// The interpolation follows the shortest path, so `other` is negated if the quaternions are
    /// more than 90° apart. When they are (almost) equal, the components are interpolated linearly
    /// instead.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// # use approx::assert_relative_eq;
    /// let a = Quatd::IDENTITY;
    /// let b = Quat::from_axis_angle(Vec3::Z, 1.0);
    /// assert_relative_eq!(a.slerp(b, 0.5), Quat::from_axis_angle(Vec3::Z, 0.5), epsilon = 1e-12);
    /// ```
    #[track_caller]
    pub fn slerp(self, other: Self, a: T) -> Self {
        assert_unit_factor(a);

        let mut other = other;
        let mut cos_theta = self.dot(other);
        if cos_theta < T::ZERO {
            other = -other;
            cos_theta = -cos_theta;
        }

        if cos_theta > T::ONE - T::EPSILON {
            log::trace!("slerp between (almost) parallel quaternions, interpolating linearly");
            return Self::from_vec(self.vec.lerp(other.vec, a));
        }

        let angle = cos_theta.acos();
        (self * ((T::ONE - a) * angle).sin() + other * (a * angle).sin()) / angle.sin()
    }

    /// Applies an additional rotation of `angle` radians around `axis` (in the local frame of
    /// `self`).
    ///
    /// Unlike [`Quat::from_axis_angle`], `axis` is normalized here if its length differs noticeably
    /// from 1.
    pub fn rotate(self, angle: T, axis: Vec3<T>) -> Self {
        let len = axis.length();
        let axis = if (len - T::ONE).abs() > T::from_f64(0.001) {
            axis * (T::ONE / len)
        } else {
            axis
        };
        self * Self::from_axis_angle(axis, angle)
    }

    /// Returns the rotation angle in radians, `2 * acos(w)`.
    pub fn angle(&self) -> T {
        two::<T>() * self.w.acos()
    }

    /// Returns the rotation axis.
    ///
    /// For the identity rotation every axis is valid, and `(0, 0, 1)` is returned.
    pub fn axis(&self) -> Vec3<T> {
        let tmp = T::ONE - self.w * self.w;
        if tmp <= T::ZERO {
            log::trace!("rotation axis of an identity quaternion, using Z");
            return Vec3::Z;
        }
        self.vector_part() * (T::ONE / tmp.sqrt())
    }

    /// Returns the Euler angles `(pitch, yaw, roll)` in radians.
    ///
    /// This is the inverse of [`Quat::from_euler`] as long as the yaw lies in `[-π/2, π/2]`.
    #[doc(alias = "eulerAngles")]
    pub fn euler_angles(&self) -> Vec3<T> {
        vec3(self.pitch(), self.yaw(), self.roll())
    }

    /// Returns the rotation angle around the X axis.
    pub fn pitch(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (two::<T>() * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z)
    }

    /// Returns the rotation angle around the Y axis.
    pub fn yaw(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (-two::<T>() * (x * z - w * y)).clamp(-T::ONE, T::ONE).asin()
    }

    /// Returns the rotation angle around the Z axis.
    pub fn roll(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (two::<T>() * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }
}

#[track_caller]
fn assert_unit_factor<T: Float>(a: T) {
    assert!(
        a >= T::ZERO && a <= T::ONE,
        "interpolation factor {:?} is outside of [0, 1]",
        a
    );
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

/// Renders as `quat(w, x, y, z)`.
impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quat({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

/// Spherical linear interpolation, see [`Quat::slerp`].
pub fn slerp<T: Float>(x: Quat<T>, y: Quat<T>, a: T) -> Quat<T> {
    x.slerp(y, a)
}

/// Component-wise linear interpolation, see [`Quat::lerp`].
pub fn lerp<T: Float>(x: Quat<T>, y: Quat<T>, a: T) -> Quat<T> {
    x.lerp(y, a)
}

/// A rotation of `angle` radians around the normalized `axis`.
#[doc(alias = "angleAxis")]
pub fn angle_axis<T: Float>(angle: T, axis: Vec3<T>) -> Quat<T> {
    Quat::from_axis_angle(axis, angle)
}

/// Returns the rotation angle of `q`, see [`Quat::angle`].
pub fn angle<T: Float>(q: Quat<T>) -> T {
    q.angle()
}

/// Returns the rotation axis of `q`, see [`Quat::axis`].
pub fn axis<T: Float>(q: Quat<T>) -> Vec3<T> {
    q.axis()
}

/// Returns `(pitch, yaw, roll)` of `q`, see [`Quat::euler_angles`].
#[doc(alias = "eulerAngles")]
pub fn euler_angles<T: Float>(q: Quat<T>) -> Vec3<T> {
    q.euler_angles()
}

/// Returns the conjugate of `q`, see [`Quat::conjugate`].
pub fn conjugate<T: Number>(q: Quat<T>) -> Quat<T> {
    q.conjugate()
}

/// Returns the inverse of `q`, see [`Quat::inverse`].
pub fn inverse<T: Number>(q: Quat<T>) -> Quat<T> {
    q.inverse()
}

/// Rotates `q` by `angle` radians around `axis`, see [`Quat::rotate`].
pub fn rotate<T: Float>(q: Quat<T>, angle: T, axis: Vec3<T>) -> Quat<T> {
    q.rotate(angle, axis)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{Mat3, Vec3d, Vec3f, Vec4d};

    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn fields() {
        let mut q = Quat::new(4, 1, 2, 3);
        assert_eq!(q.vector_part(), vec3(1, 2, 3));
        assert_eq!(q.into_vec(), vec4(1, 2, 3, 4));
        q.w = 5;
        assert_eq!(q[3], 5);
        assert_eq!(q.component(-1).unwrap(), 5);
        assert_eq!(q.component(-4).unwrap(), 1);
        assert!(q.component(4).is_err());
        assert_eq!(Quat::<f32>::default(), Quat::IDENTITY);
    }

    #[test]
    fn fmt() {
        let q = Quat::new(1, 2, 3, 4);
        assert_eq!(q.to_string(), "quat(1, 2, 3, 4)");
        assert_eq!(format!("{q:?}"), "Quat { w: 1, x: 2, y: 3, z: 4 }");
    }

    #[test]
    fn conjugate_inverse() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, -3.0, -4.0));
        assert_relative_eq!(q * q.inverse(), Quatd::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(inverse(q) * q, Quatd::IDENTITY, epsilon = 1e-12);
        assert_eq!(conjugate(conjugate(q)), q);
    }

    #[test]
    fn normalize() {
        init_logger();
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quatf::IDENTITY);
        assert_relative_eq!(Quat::new(2.0, 0.0, 0.0, 0.0).normalize(), Quatd::IDENTITY);
        assert_relative_eq!(Quat::new(1.0f64, 1.0, 1.0, 1.0).normalize().length(), 1.0);
    }

    #[test]
    fn euler_round_trip() {
        let angles = vec3(0.1, -0.4, 1.3);
        let q = Quat::from_euler(angles);
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.euler_angles(), angles, epsilon = 1e-12);
        assert_relative_eq!(euler_angles(q), angles, epsilon = 1e-12);
        assert_relative_eq!(q.pitch(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn euler_single_axis() {
        let x = Quat::from_euler(vec3(FRAC_PI_2, 0.0, 0.0));
        assert_relative_eq!(x, Quat::from_axis_angle(Vec3d::X, FRAC_PI_2), epsilon = 1e-12);
        let y = Quat::from_euler(vec3(0.0, FRAC_PI_2, 0.0));
        assert_relative_eq!(y, Quat::from_axis_angle(Vec3d::Y, FRAC_PI_2), epsilon = 1e-12);
    }

    #[test]
    fn angle_and_axis() {
        init_logger();
        let q = angle_axis(1.2, vec3(0.0, 0.6, 0.8));
        assert_relative_eq!(angle(q), 1.2, epsilon = 1e-12);
        assert_relative_eq!(axis(q), vec3(0.0, 0.6, 0.8), epsilon = 1e-12);

        assert_eq!(Quatd::IDENTITY.axis(), Vec3d::Z);
        assert_eq!(Quatd::IDENTITY.angle(), 0.0);
    }

    #[test]
    fn rotation_arc() {
        init_logger();
        let from = vec3(1.0, 1.0, 0.0).normalize();
        let to = vec3(0.0, 0.0, 1.0);
        let q = Quat::from_rotation_arc(from, to);
        assert_relative_eq!(q * from, to, epsilon = 1e-12);

        // Antiparallel: 180° rotation around a perpendicular axis.
        for dir in [Vec3d::X, Vec3d::Y, Vec3d::Z, vec3(1.0, 2.0, 3.0).normalize()] {
            let q = Quat::from_rotation_arc(dir, -dir);
            assert!(q.vec.into_array().iter().all(|c| c.is_finite()));
            assert_abs_diff_eq!(q.w, 0.0);
            assert_abs_diff_eq!(q.vector_part().dot(dir), 0.0, epsilon = 1e-12);
            assert_relative_eq!(q * dir, -dir, epsilon = 1e-12);
        }
    }

    #[test]
    fn rotation_arc_nearly_antiparallel() {
        init_logger();
        // The axis of a rotation from X to almost -X is determined by the small Z offset.
        let to = vec3(-1.0, 0.0, 1e-8).normalize();
        let q = Quat::from_rotation_arc(Vec3d::X, to);
        assert_relative_eq!(q.axis(), -Vec3d::Y, epsilon = 1e-12);
        assert_abs_diff_eq!(q * Vec3d::X, to, epsilon = 1e-7);

        // In `f32`, `1 + dot` is pure rounding noise here, so only the axis is exact.
        let to = vec3(-1.0f32, 0.0, 3e-4).normalize();
        let q = Quat::from_rotation_arc(Vec3f::X, to);
        assert_relative_eq!(q.axis(), -Vec3f::Y, epsilon = 1e-6);
        assert!(q.w.abs() < 1e-3);
    }

    #[test]
    fn rotate() {
        let q = Quatd::IDENTITY.rotate(FRAC_PI_2, vec3(0.0, 0.0, 5.0));
        assert_relative_eq!(q * Vec3d::X, Vec3d::Y, epsilon = 1e-12);

        // Local frame: rotate around the already-rotated axis.
        let q = super::rotate(q, FRAC_PI_2, Vec3d::X);
        assert_relative_eq!(q * Vec3d::X, Vec3d::Y, epsilon = 1e-12);
        assert_relative_eq!(q * Vec3d::Y, Vec3d::Z, epsilon = 1e-12);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quat::from_euler(vec3(0.3, 0.2, -0.1));
        let b = Quat::from_euler(vec3(-0.2, 0.5, 0.4));
        assert!(a.dot(b) > 0.0);
        assert_relative_eq!(slerp(a, b, 0.0), a, epsilon = 1e-12);
        assert_relative_eq!(slerp(a, b, 1.0), b, epsilon = 1e-12);
        assert_relative_eq!(a.slerp(b, 0.5).length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn slerp_shortest_path() {
        let a = Quatd::IDENTITY;
        let b = -Quat::from_axis_angle(Vec3d::Z, 0.5);
        // `b` represents the same rotation as its negation, so the path must not go the long way.
        let mid = a.slerp(b, 0.5);
        assert_relative_eq!(mid, Quat::from_axis_angle(Vec3d::Z, 0.25), epsilon = 1e-12);
    }

    #[test]
    fn slerp_parallel() {
        init_logger();
        let q = Quat::from_axis_angle(Vec3d::Y, 0.7);
        assert_relative_eq!(q.slerp(q, 0.3), q, epsilon = 1e-12);
        assert_relative_eq!(lerp(q, q, 0.3), q, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "outside of [0, 1]")]
    fn slerp_factor() {
        Quatd::IDENTITY.slerp(Quatd::IDENTITY, 1.5);
    }

    #[test]
    #[should_panic(expected = "outside of [0, 1]")]
    fn lerp_factor() {
        Quatf::IDENTITY.lerp(Quatf::IDENTITY, -0.1);
    }

    #[test]
    fn half_turn_matrix() {
        let q = angle_axis(PI, Vec3d::Z);
        assert_relative_eq!(
            mat3_cast(q),
            Mat3::from_columns([[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]),
            epsilon = 1e-12
        );
        assert_relative_eq!(q * Vec4d::X, -Vec4d::X, epsilon = 1e-12);
    }
}
