//! Randomized checks of algebraic properties that should hold for any input.

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use glmath::*;

const ITERATIONS: usize = 200;

fn init_logger() {
    env_logger::builder()
        .filter_module("glmath", log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x6c8e9cf570932bd5)
}

fn random_unit(rng: &mut fastrand::Rng) -> f64 {
    rng.f64() * 2.0 - 1.0
}

fn random_quat(rng: &mut fastrand::Rng) -> Quatd {
    loop {
        let q = Quat::new(
            random_unit(rng),
            random_unit(rng),
            random_unit(rng),
            random_unit(rng),
        );
        if q.length() > 0.1 {
            return q.normalize();
        }
    }
}

/// A random matrix with a dominant diagonal, which is always invertible.
fn random_invertible<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|row, col| {
        let off = random_unit(rng);
        if row == col {
            off + N as f64 * 2.0
        } else {
            off
        }
    })
}

#[test]
fn copy_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = Mat4x3d::from_fn(|_, _| random_unit(&mut rng));
        assert_eq!(Mat4x3d::from_matrix(m), m);
        assert_eq!(Mat4x3d::try_from_args(&[m.into()]).unwrap(), m);
        assert_eq!(Mat4x3d::from_columns(m.into_columns()), m);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = Mat3x2d::from_fn(|_, _| random_unit(&mut rng));
        assert_eq!(m * Mat3d::identity(), m);
        assert_eq!(Mat2d::identity() * m, m);

        let v = vec3(random_unit(&mut rng), random_unit(&mut rng), random_unit(&mut rng));
        assert_eq!(Mat3d::identity() * v, v);
    }
}

#[test]
fn inverse_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m2 = random_invertible::<2>(&mut rng);
        let m3 = random_invertible::<3>(&mut rng);
        let m4 = random_invertible::<4>(&mut rng);
        assert_relative_eq!(m2 * m2.invert(), Mat2d::identity(), epsilon = 1e-9);
        assert_relative_eq!(m3 * m3.invert(), Mat3d::identity(), epsilon = 1e-9);
        assert_relative_eq!(m4.invert() * m4, Mat4d::identity(), epsilon = 1e-9);
        assert_relative_eq!(m4.determinant() * m4.invert().determinant(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn cast_round_trip() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_quat(&mut rng);
        let back = quat_cast(mat3_cast(q));
        // `q` and `-q` describe the same rotation.
        let back = if back.dot(q) < 0.0 { -back } else { back };
        assert_relative_eq!(back, q, epsilon = 1e-9);

        let back = quat_cast(mat4_cast(q));
        assert_relative_eq!(back.to_mat3(), q.to_mat3(), epsilon = 1e-9);
    }
}

#[test]
fn rotation_matches_matrix() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_quat(&mut rng);
        let v = vec3(random_unit(&mut rng), random_unit(&mut rng), random_unit(&mut rng));
        assert_relative_eq!(q * v, mat3_cast(q) * v, epsilon = 1e-9);
        assert_relative_eq!(v * q, q.inverse() * v, epsilon = 1e-9);
        assert_relative_eq!((q * v).length(), v.length(), epsilon = 1e-9);
    }
}

#[test]
fn slerp_with_itself() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_quat(&mut rng);
        let a = rng.f64();
        assert_relative_eq!(slerp(q, q, a), q, epsilon = 1e-9);
    }
}

#[test]
fn slerp_stays_normalized() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let (p, q) = (random_quat(&mut rng), random_quat(&mut rng));
        let a = rng.f64();
        assert_relative_eq!(slerp(p, q, a).length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn known_values() {
    assert_eq!(quat_cast(Mat3d::identity()), Quatd::IDENTITY);
    assert_eq!(quat_cast(Mat4f::identity()), Quatf::IDENTITY);

    let half_turn = angle_axis(PI, Vec3d::Z);
    assert_abs_diff_eq!(half_turn, Quat::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
    assert_relative_eq!(angle(half_turn), PI, epsilon = 1e-12);
    assert_relative_eq!(axis(half_turn), Vec3d::Z, epsilon = 1e-12);

    let m = Mat4::<i32>::from_fn(|row, col| (row + col * 4) as i32);
    assert_eq!(m.column(-1).unwrap(), m.column(3).unwrap());
    assert_eq!(m.column(-1).unwrap(), m[3]);
    assert!(m.column(-5).is_err());
}

#[test]
fn dynamic_shape_mismatch() {
    let m = AnyMatrix::from(Mat3x2d::identity());
    assert_eq!(
        m.try_mul(Mat4d::identity()),
        Err(Error::UnsupportedOperands {
            op: "*",
            lhs: "mat3x2".into(),
            rhs: "mat4".into(),
        })
    );
    assert_ne!(m, AnyMatrix::from(Mat2d::identity()));
    assert!(m.try_eq(&Arg::from(Mat2d::identity())).is_err());
}

#[test]
fn constructor_equivalence() {
    let zero_args = Mat3x2d::try_from_args(&[]).unwrap();
    let flat = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0].map(Arg::Scalar);
    let six_args = Mat3x2d::try_from_args(&flat).unwrap();
    assert_eq!(zero_args, six_args);

    let embedded = Mat4d::try_from_args(&[Mat3x2d::from_scalar(2.0).into()]).unwrap();
    assert_eq!(embedded.diagonal(), [2.0, 2.0, 1.0, 1.0]);
}
