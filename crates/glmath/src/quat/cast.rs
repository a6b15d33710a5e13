//! Conversions between quaternions and rotation matrices.

use crate::{traits::two, Float, Mat3, Mat4, Matrix, Quat};

impl<T: Float> Quat<T> {
    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// The quaternion is expected to have unit length.
    #[doc(alias = "mat3_cast")]
    pub fn to_mat3(&self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let two = two::<T>();
        let one = T::ONE;

        Matrix::from_columns([
            [one - two * (yy + zz), two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), one - two * (xx + zz), two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), one - two * (xx + yy)],
        ])
    }

    /// Converts this quaternion to a 4x4 rotation matrix.
    ///
    /// The result is the [`Quat::to_mat3`] matrix embedded in the top-left of a 4x4 identity
    /// matrix, so it has no translation.
    #[doc(alias = "mat4_cast")]
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_matrix(self.to_mat3())
    }

    /// Converts a 3x3 rotation matrix to a quaternion.
    ///
    /// Uses Shepperd's method: out of the 4 quaternion components, the one with the largest
    /// magnitude is computed from the diagonal, and the others are derived from it, which avoids
    /// dividing by a value close to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quat::from_axis_angle(vec3(0.0, 0.6, -0.8), 1.0);
    /// assert_relative_eq!(Quat::from_mat3(&q.to_mat3()), q, epsilon = 1e-12);
    /// ```
    #[doc(alias = "quat_cast")]
    pub fn from_mat3(mat: &Mat3<T>) -> Self {
        // `m(c, r)` is the element in column `c` and row `r`.
        let m = |c: usize, r: usize| mat[(r, c)];

        let four_sq_minus_one = [
            m(0, 0) + m(1, 1) + m(2, 2),
            m(0, 0) - m(1, 1) - m(2, 2),
            m(1, 1) - m(0, 0) - m(2, 2),
            m(2, 2) - m(0, 0) - m(1, 1),
        ];
        let mut biggest_index = 0;
        for i in 1..4 {
            if four_sq_minus_one[i] > four_sq_minus_one[biggest_index] {
                biggest_index = i;
            }
        }

        let biggest = (four_sq_minus_one[biggest_index] + T::ONE).sqrt() * T::from_f64(0.5);
        let mult = T::from_f64(0.25) / biggest;

        match biggest_index {
            0 => Self::new(
                biggest,
                (m(1, 2) - m(2, 1)) * mult,
                (m(2, 0) - m(0, 2)) * mult,
                (m(0, 1) - m(1, 0)) * mult,
            ),
            1 => Self::new(
                (m(1, 2) - m(2, 1)) * mult,
                biggest,
                (m(0, 1) + m(1, 0)) * mult,
                (m(2, 0) + m(0, 2)) * mult,
            ),
            2 => Self::new(
                (m(2, 0) - m(0, 2)) * mult,
                (m(0, 1) + m(1, 0)) * mult,
                biggest,
                (m(1, 2) + m(2, 1)) * mult,
            ),
            _ => Self::new(
                (m(0, 1) - m(1, 0)) * mult,
                (m(2, 0) + m(0, 2)) * mult,
                (m(1, 2) + m(2, 1)) * mult,
                biggest,
            ),
        }
    }

    /// Converts the rotation part (upper-left 3x3 block) of a 4x4 matrix to a quaternion.
    ///
    /// Translation and projection components are ignored.
    pub fn from_mat4(mat: &Mat4<T>) -> Self {
        Self::from_mat3(&Mat3::from_matrix(*mat))
    }
}

/// Rotation matrix shapes that can be converted to a [`Quat`].
///
/// Implemented for [`Mat3`] and [`Mat4`], so that [`quat_cast`] accepts either.
pub trait RotationMatrix<T> {
    /// Extracts the rotation as a unit quaternion.
    fn to_quat(&self) -> Quat<T>;
}

impl<T: Float> RotationMatrix<T> for Mat3<T> {
    fn to_quat(&self) -> Quat<T> {
        Quat::from_mat3(self)
    }
}

impl<T: Float> RotationMatrix<T> for Mat4<T> {
    fn to_quat(&self) -> Quat<T> {
        Quat::from_mat4(self)
    }
}

/// Converts a quaternion to a 3x3 rotation matrix, see [`Quat::to_mat3`].
pub fn mat3_cast<T: Float>(q: Quat<T>) -> Mat3<T> {
    q.to_mat3()
}

/// Converts a quaternion to a 4x4 rotation matrix, see [`Quat::to_mat4`].
pub fn mat4_cast<T: Float>(q: Quat<T>) -> Mat4<T> {
    q.to_mat4()
}

/// Converts a 3x3 or 4x4 rotation matrix to a quaternion, see [`Quat::from_mat3`].
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// assert_eq!(quat_cast(Mat3f::identity()), Quat::IDENTITY);
/// assert_eq!(quat_cast(Mat4f::identity()), Quat::IDENTITY);
/// ```
pub fn quat_cast<T, M: RotationMatrix<T>>(m: M) -> Quat<T> {
    m.to_quat()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use crate::{vec3, Mat3d, Mat4d, Quatd, Vec3d, Vec4d};

    use super::*;

    #[test]
    fn identity() {
        assert_eq!(Quatd::IDENTITY.to_mat3(), Mat3d::identity());
        assert_eq!(mat4_cast(Quatd::IDENTITY), Mat4d::identity());
        assert_eq!(quat_cast(Mat3d::identity()), Quatd::IDENTITY);
    }

    #[test]
    fn matches_vector_rotation() {
        let q = Quat::from_euler(vec3(0.4, -1.1, 2.0));
        let v = vec3(1.0, -2.0, 0.5);
        assert_relative_eq!(mat3_cast(q) * v, q * v, epsilon = 1e-12);

        let m4 = mat4_cast(q);
        assert_relative_eq!(m4 * v.extend(1.0), (q * v).extend(1.0), epsilon = 1e-12);
        assert_eq!(m4[3], Vec4d::W);
        assert_eq!(m4.row(3), Vec4d::W);
    }

    /// Each branch of Shepperd's method is taken by a rotation whose largest component is `w`,
    /// `x`, `y` or `z` respectively.
    #[test]
    fn all_branches() {
        let rotations = [
            Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 0.3),
            Quat::from_axis_angle(Vec3d::X, 3.0),
            Quat::from_axis_angle(vec3(0.6, 0.8, 0.0), 3.0),
            Quat::from_axis_angle(vec3(0.0, -0.6, 0.8), 3.0),
        ];
        for q in rotations {
            let back = quat_cast(mat3_cast(q));
            // `q` and `-q` are the same rotation.
            let back = if back.dot(q) < 0.0 { -back } else { back };
            assert_relative_eq!(back, q, epsilon = 1e-12);
        }
    }

    #[test]
    fn half_turns() {
        for axis in [Vec3d::X, Vec3d::Y, Vec3d::Z] {
            let q = Quat::from_axis_angle(axis, PI);
            let m = q.to_mat3();
            let back = Quat::from_mat3(&m);
            assert_relative_eq!(back.to_mat3(), m, epsilon = 1e-12);
        }
    }

    #[test]
    fn from_mat4_ignores_translation() {
        let q = Quat::from_euler(vec3(0.1, 0.2, 0.3));
        let mut m = q.to_mat4();
        m[3] = [5.0, 6.0, 7.0, 1.0].into();
        assert_relative_eq!(quat_cast(m), q, epsilon = 1e-12);
    }
}
