//! Runtime-shaped values and dynamically dispatched construction and arithmetic.
//!
//! The statically-typed [`Matrix`], [`Vector`] and [`Quat`] types reject mismatched shapes at
//! compile time. This module provides the same operations for values whose shape is only known at
//! runtime (for example when they come from a scripting layer or a deserialized scene file):
//!
//! - [`AnyVector`] and [`AnyMatrix`] wrap every supported vector and matrix shape.
//! - [`Arg`] describes one constructor argument. [`Matrix::try_from_args`] and
//!   [`Quat::try_from_args`] pick the matching constructor for an argument list, in a fixed
//!   priority order.
//! - [`Operand`] is the right-hand side of [`AnyMatrix`] arithmetic. Types that know how to be
//!   multiplied *onto* a matrix implement [`ReverseMul`] and are passed as [`Operand::Dyn`].
//!
//! Unlike the operators on the static types, everything here reports shape mismatches as an
//! [`Error`].

use std::{any, fmt};

use crate::{
    error::{resolve_index, Error, Result},
    matrix::shape_name,
    Float, Matrix, Number, One, Quat, Vec2, Vec3, Vec4, Vector, Zero,
};

/// A vector with 2, 3 or 4 elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyVector<T> {
    Vec2(Vec2<T>),
    Vec3(Vec3<T>),
    Vec4(Vec4<T>),
}

impl<T> AnyVector<T> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns the GLSL-style type name (`vec2`, `vec3` or `vec4`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Vec2(_) => "vec2",
            Self::Vec3(_) => "vec3",
            Self::Vec4(_) => "vec4",
        }
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Vec2(v) => v.as_slice(),
            Self::Vec3(v) => v.as_slice(),
            Self::Vec4(v) => v.as_slice(),
        }
    }

    /// Returns the element at `index`, or [`None`] if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index`, counting from the end for negative indices.
    pub fn component(&self, index: isize) -> Result<T>
    where
        T: Copy,
    {
        let slice = self.as_slice();
        let index = resolve_index(|| self.type_name().to_string(), index, slice.len())?;
        Ok(slice[index])
    }

    /// Creates a vector of length `len` by invoking `f` with each index.
    ///
    /// Returns [`None`] if `len` is not 2, 3 or 4.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Option<Self> {
        match len {
            2 => Some(Self::Vec2(Vector::from_fn(f))),
            3 => Some(Self::Vec3(Vector::from_fn(f))),
            4 => Some(Self::Vec4(Vector::from_fn(f))),
            _ => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for AnyVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vec2(v) => v.fmt(f),
            Self::Vec3(v) => v.fmt(f),
            Self::Vec4(v) => v.fmt(f),
        }
    }
}

macro_rules! any_vector_conversions {
    ($($variant:ident => $n:literal),+) => {
        $(
            impl<T> From<Vector<T, $n>> for AnyVector<T> {
                fn from(v: Vector<T, $n>) -> Self {
                    Self::$variant(v)
                }
            }

            impl<T> From<Vector<T, $n>> for Arg<T> {
                fn from(v: Vector<T, $n>) -> Self {
                    Arg::Vector(v.into())
                }
            }

            impl<'a, T> From<Vector<T, $n>> for Operand<'a, T> {
                fn from(v: Vector<T, $n>) -> Self {
                    Operand::Vector(v.into())
                }
            }
        )+
    };
}
any_vector_conversions!(Vec2 => 2, Vec3 => 3, Vec4 => 4);

impl<T: Copy, const N: usize> TryFrom<AnyVector<T>> for Vector<T, N> {
    type Error = Error;

    fn try_from(v: AnyVector<T>) -> Result<Self> {
        <[T; N]>::try_from(v.as_slice())
            .map(Vector::from)
            .map_err(|_| Error::UnsupportedType {
                target: format!("vec{N}"),
                found: v.type_name().to_string(),
            })
    }
}

macro_rules! any_matrix {
    ($($variant:ident => ($rows:literal, $cols:literal)),+ $(,)?) => {
        /// A matrix of any of the supported shapes (2, 3 or 4 rows and columns).
        ///
        /// The variants are named after the GLSL type, so [`AnyMatrix::Mat3x2`] holds a matrix
        /// with 3 columns and 2 rows.
        #[derive(Clone, Copy, Debug)]
        pub enum AnyMatrix<T> {
            $( $variant(Matrix<T, $rows, $cols>), )+
        }

        impl<T> AnyMatrix<T> {
            /// Returns `(rows, columns)`.
            pub fn shape(&self) -> (usize, usize) {
                match self {
                    $( Self::$variant(_) => ($rows, $cols), )+
                }
            }

            /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
            pub fn get(&self, row: usize, col: usize) -> Option<&T> {
                match self {
                    $( Self::$variant(m) => m.get(row, col), )+
                }
            }

            /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of
            /// bounds.
            pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
                match self {
                    $( Self::$variant(m) => m.get_mut(row, col), )+
                }
            }

            /// Creates a matrix with `rows` rows and `cols` columns by invoking `f` with the
            /// position of each element.
            ///
            /// Returns [`None`] if there is no such shape.
            pub fn from_fn(
                rows: usize,
                cols: usize,
                f: impl FnMut(usize, usize) -> T,
            ) -> Option<Self> {
                match (rows, cols) {
                    $( ($rows, $cols) => Some(Self::$variant(Matrix::from_fn(f))), )+
                    _ => None,
                }
            }

            /// Transforms every element with `f`, keeping the shape.
            pub fn map<U>(self, f: impl FnMut(T) -> U) -> AnyMatrix<U> {
                match self {
                    $( Self::$variant(m) => AnyMatrix::$variant(m.map(f)), )+
                }
            }

            /// Combines the elements of two matrices of the same shape.
            fn zip_with(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Option<Self>
            where
                T: Copy,
            {
                match (self, other) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => {
                            Some(Self::$variant(Matrix::from_fn(|r, c| f(a[(r, c)], b[(r, c)]))))
                        }
                    )+
                    _ => None,
                }
            }

            /// Returns a copy of the column at `index` (negative indices count from the end).
            pub fn column(&self, index: isize) -> Result<AnyVector<T>>
            where
                T: Copy,
            {
                match self {
                    $( Self::$variant(m) => m.column(index).map(AnyVector::from), )+
                }
            }

            /// Replaces the column at `index` (negative indices count from the end).
            ///
            /// # Errors
            ///
            /// Fails if `index` is out of range, or `column` does not have one element per row.
            pub fn set_column(&mut self, index: isize, column: AnyVector<T>) -> Result<()>
            where
                T: Copy,
            {
                match self {
                    $(
                        Self::$variant(m) => {
                            m.set_column(index, Vector::<T, $rows>::try_from(column)?)
                        }
                    )+
                }
            }
        }

        impl<T: PartialEq> PartialEq for AnyMatrix<T> {
            /// Matrices of different shapes are never equal.
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $( (Self::$variant(a), Self::$variant(b)) => a == b, )+
                    _ => false,
                }
            }
        }

        impl<T: fmt::Display> fmt::Display for AnyMatrix<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(m) => m.fmt(f), )+
                }
            }
        }

        $(
            impl<T> From<Matrix<T, $rows, $cols>> for AnyMatrix<T> {
                fn from(m: Matrix<T, $rows, $cols>) -> Self {
                    Self::$variant(m)
                }
            }

            impl<T> TryFrom<AnyMatrix<T>> for Matrix<T, $rows, $cols> {
                type Error = Error;

                fn try_from(m: AnyMatrix<T>) -> Result<Self> {
                    match m {
                        AnyMatrix::$variant(m) => Ok(m),
                        other => Err(Error::UnsupportedType {
                            target: Self::type_name(),
                            found: other.type_name(),
                        }),
                    }
                }
            }

            impl<T> From<Matrix<T, $rows, $cols>> for Arg<T> {
                fn from(m: Matrix<T, $rows, $cols>) -> Self {
                    Arg::Matrix(m.into())
                }
            }

            impl<'a, T> From<Matrix<T, $rows, $cols>> for Operand<'a, T> {
                fn from(m: Matrix<T, $rows, $cols>) -> Self {
                    Operand::Matrix(m.into())
                }
            }
        )+
    };
}
any_matrix! {
    Mat2 => (2, 2),
    Mat2x3 => (3, 2),
    Mat2x4 => (4, 2),
    Mat3x2 => (2, 3),
    Mat3 => (3, 3),
    Mat3x4 => (4, 3),
    Mat4x2 => (2, 4),
    Mat4x3 => (3, 4),
    Mat4 => (4, 4),
}

/// The result of [`AnyMatrix::try_mul`] and [`AnyMatrix::try_div`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Product<T> {
    Vector(AnyVector<T>),
    Matrix(AnyMatrix<T>),
}

impl<T> Product<T> {
    /// Returns the matrix result, or [`None`] for a vector.
    pub fn into_matrix(self) -> Option<AnyMatrix<T>> {
        match self {
            Self::Matrix(m) => Some(m),
            Self::Vector(_) => None,
        }
    }

    /// Returns the vector result, or [`None`] for a matrix.
    pub fn into_vector(self) -> Option<AnyVector<T>> {
        match self {
            Self::Vector(v) => Some(v),
            Self::Matrix(_) => None,
        }
    }
}

/// Right-hand operand of [`AnyMatrix`] arithmetic.
#[derive(Clone, Copy)]
pub enum Operand<'a, T> {
    Scalar(T),
    Vector(AnyVector<T>),
    Matrix(AnyMatrix<T>),
    /// A type that implements multiplication with a matrix on its left.
    Dyn(&'a dyn ReverseMul<T>),
}

impl<'a, T> Operand<'a, T> {
    /// Returns the type name used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::Scalar(_) => any::type_name::<T>().to_string(),
            Self::Vector(v) => v.type_name().to_string(),
            Self::Matrix(m) => m.type_name(),
            Self::Dyn(d) => d.type_name(),
        }
    }
}

impl<'a, T> From<T> for Operand<'a, T> {
    fn from(s: T) -> Self {
        Self::Scalar(s)
    }
}

impl<'a, T> From<AnyVector<T>> for Operand<'a, T> {
    fn from(v: AnyVector<T>) -> Self {
        Self::Vector(v)
    }
}

impl<'a, T> From<AnyMatrix<T>> for Operand<'a, T> {
    fn from(m: AnyMatrix<T>) -> Self {
        Self::Matrix(m)
    }
}

impl<'a, T: Float> From<&'a Quat<T>> for Operand<'a, T> {
    fn from(q: &'a Quat<T>) -> Self {
        Self::Dyn(q)
    }
}

/// Capability of a type to act as the right-hand side of a matrix product.
///
/// [`AnyMatrix::try_mul`] consults this hook (via [`Operand::Dyn`]) for operand types it has no
/// built-in rule for.
pub trait ReverseMul<T> {
    /// Type name used in error messages.
    fn type_name(&self) -> String;

    /// Computes `lhs * self`, or returns [`None`] if that product is not defined.
    fn reverse_mul(&self, lhs: &AnyMatrix<T>) -> Option<AnyMatrix<T>>;
}

/// `lhs * q` multiplies with the rotation matrix of `q`: [`Quat::to_mat3`] if `lhs` has 3 columns,
/// [`Quat::to_mat4`] if it has 4.
impl<T: Float> ReverseMul<T> for Quat<T> {
    fn type_name(&self) -> String {
        "quat".to_string()
    }

    fn reverse_mul(&self, lhs: &AnyMatrix<T>) -> Option<AnyMatrix<T>> {
        match lhs.shape().1 {
            3 => lhs.mat_mul(&self.to_mat3().into()),
            4 => lhs.mat_mul(&self.to_mat4().into()),
            _ => None,
        }
    }
}

impl<T> AnyMatrix<T> {
    /// Returns the GLSL-style type name (`mat3x2`, `mat4`, ...).
    pub fn type_name(&self) -> String {
        let (rows, cols) = self.shape();
        shape_name(rows, cols)
    }

    fn unsupported(&self, op: &'static str, rhs: &Operand<'_, T>) -> Error {
        Error::UnsupportedOperands {
            op,
            lhs: self.type_name(),
            rhs: rhs.type_name(),
        }
    }
}

impl<T: Number> AnyMatrix<T> {
    fn at(&self, row: usize, col: usize) -> T {
        self.get(row, col).copied().unwrap_or(T::ZERO)
    }

    /// Matrix product, if the inner dimensions match.
    fn mat_mul(&self, rhs: &AnyMatrix<T>) -> Option<AnyMatrix<T>> {
        let (rows, inner) = self.shape();
        let (rhs_rows, cols) = rhs.shape();
        if inner != rhs_rows {
            return None;
        }
        AnyMatrix::from_fn(rows, cols, |r, c| {
            (0..inner).fold(T::ZERO, |acc, k| acc + self.at(r, k) * rhs.at(k, c))
        })
    }

    fn vec_mul(&self, v: &AnyVector<T>) -> Option<AnyVector<T>> {
        let (rows, cols) = self.shape();
        if v.len() != cols {
            return None;
        }
        let v = v.as_slice();
        AnyVector::from_fn(rows, |r| {
            (0..cols).fold(T::ZERO, |acc, c| acc + self.at(r, c) * v[c])
        })
    }

    /// Multiplies `self` with a scalar, a column vector, a matrix, or a [`ReverseMul`] type.
    ///
    /// - `self * scalar` scales every element.
    /// - `self * vector` requires one vector element per column and returns a vector with one
    ///   element per row.
    /// - `self * matrix` requires the right-hand matrix to have one row per column of `self`, and
    ///   returns a matrix with the rows of `self` and the columns of `rhs`.
    /// - [`Operand::Dyn`] delegates to [`ReverseMul::reverse_mul`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperands`] when the shapes do not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let m = AnyMatrix::from(Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]));
    /// let v = m.try_mul(vec3(1, 1, 1))?.into_vector();
    /// assert_eq!(v, Some(AnyVector::from(vec2(6, 15))));
    ///
    /// let err = m.try_mul(Mat4::<i32>::identity()).unwrap_err();
    /// assert_eq!(err.to_string(), "unsupported operand type(s) for *: 'mat3x2' and 'mat4'");
    /// # Ok::<(), glmath::Error>(())
    /// ```
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Product<T>>
    where
        T: 'a,
    {
        let rhs = rhs.into();
        let product = match &rhs {
            Operand::Scalar(s) => Some(Product::Matrix(self.map(|e| e * *s))),
            Operand::Vector(v) => self.vec_mul(v).map(Product::Vector),
            Operand::Matrix(m) => self.mat_mul(m).map(Product::Matrix),
            Operand::Dyn(d) => d.reverse_mul(self).map(Product::Matrix),
        };
        product.ok_or_else(|| self.unsupported("*", &rhs))
    }

    /// Adds a scalar to every element, or adds a matrix of the same shape element-wise.
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.elementwise("+", rhs.into(), |a, b| a + b)
    }

    /// Subtracts a scalar from every element, or subtracts a matrix of the same shape
    /// element-wise.
    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.elementwise("-", rhs.into(), |a, b| a - b)
    }

    fn elementwise(
        &self,
        op: &'static str,
        rhs: Operand<'_, T>,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self> {
        let result = match &rhs {
            Operand::Scalar(s) => Some(self.map(|e| f(e, *s))),
            Operand::Matrix(m) => self.zip_with(*m, &f),
            Operand::Vector(_) | Operand::Dyn(_) => None,
        };
        result.ok_or_else(|| self.unsupported(op, &rhs))
    }

    /// In-place `*`. The product must have the same shape as `self`, so matrix operands must be
    /// square.
    pub fn try_mul_assign<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> Result<()>
    where
        T: 'a,
    {
        let rhs = rhs.into();
        let product = self.try_mul(rhs)?;
        self.replace_with("*=", product, &rhs)
    }

    /// In-place `+`.
    pub fn try_add_assign<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> Result<()>
    where
        T: 'a,
    {
        *self = self.try_add(rhs)?;
        Ok(())
    }

    /// In-place `-`.
    pub fn try_sub_assign<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> Result<()>
    where
        T: 'a,
    {
        *self = self.try_sub(rhs)?;
        Ok(())
    }

    fn replace_with(
        &mut self,
        op: &'static str,
        result: Product<T>,
        rhs: &Operand<'_, T>,
    ) -> Result<()> {
        match result {
            Product::Matrix(m) if m.shape() == self.shape() => {
                *self = m;
                Ok(())
            }
            _ => Err(self.unsupported(op, rhs)),
        }
    }

    /// Compares `self` with an arbitrary argument.
    ///
    /// A matrix compares element-wise; a sequence compares against the columns of `self`.
    ///
    /// # Errors
    ///
    /// Anything that does not have the shape of `self` results in
    /// [`Error::UnsupportedOperands`] instead of `false`. Use `==` for a comparison that returns
    /// `false` on mismatching shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let m = AnyMatrix::from(Mat2f::identity());
    /// assert_eq!(m.try_eq(&Arg::from(Mat2f::identity())), Ok(true));
    /// assert_eq!(m.try_eq(&Arg::from(Mat2f::ZERO)), Ok(false));
    /// assert!(m.try_eq(&Arg::from(Mat3f::identity())).is_err());
    /// assert!(m.try_eq(&Arg::Scalar(1.0)).is_err());
    /// ```
    pub fn try_eq(&self, other: &Arg<T>) -> Result<bool> {
        let (rows, cols) = self.shape();
        let mismatch = || Error::UnsupportedOperands {
            op: "==",
            lhs: self.type_name(),
            rhs: other.type_name(),
        };
        match other {
            Arg::Matrix(m) if m.shape() == self.shape() => Ok(self == m),
            Arg::Sequence(columns) if columns.len() == cols => {
                let mut equal = true;
                for (c, column) in columns.iter().enumerate() {
                    match column {
                        Arg::Vector(v) if v.len() == rows => {
                            equal &= (0..rows).all(|r| v.get(r) == self.get(r, c));
                        }
                        _ => return Err(mismatch()),
                    }
                }
                Ok(equal)
            }
            _ => Err(mismatch()),
        }
    }
}

// Division goes through the inverse, which is only meaningful for floating-point elements.
impl<T: Float> AnyMatrix<T> {
    /// Returns the inverse of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] if the determinant is zero, and [`Error::UnsupportedType`] for
    /// non-square shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let m = AnyMatrix::from(Mat2d::from_columns([[2.0, 0.0], [0.0, 1.0]]));
    /// assert_eq!(m.inverse()?, AnyMatrix::from(Mat2d::from_columns([[0.5, 0.0], [0.0, 1.0]])));
    /// # Ok::<(), glmath::Error>(())
    /// ```
    ///
    /// Integer matrices cannot be inverted, or divided by:
    ///
    /// ```compile_fail
    /// # use glmath::*;
    /// let m = AnyMatrix::from(Mat2::<i32>::from_columns([[2, 0], [0, 1]]));
    /// let _ = m.try_div(m);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        match self {
            Self::Mat2(m) => m.try_invert().map(Self::from),
            Self::Mat3(m) => m.try_invert().map(Self::from),
            Self::Mat4(m) => m.try_invert().map(Self::from),
            other => Err(Error::UnsupportedType {
                target: "inverse".to_string(),
                found: other.type_name(),
            }),
        }
    }

    /// Divides by a scalar (element-wise), or by a matrix (multiplying with its inverse).
    ///
    /// - `self / scalar` divides every element.
    /// - `self / matrix` computes `self * inverse(matrix)`; the matrix must be square with one row
    ///   per column of `self`.
    /// - `self / vector` computes `inverse(self) * vector`; `self` must be square.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperands`] when the shapes do not fit, and [`Error::Singular`]
    /// if the matrix to invert has a zero determinant.
    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Product<T>>
    where
        T: 'a,
    {
        let rhs = rhs.into();
        match &rhs {
            Operand::Scalar(s) => Ok(Product::Matrix(self.map(|e| e / *s))),
            Operand::Matrix(m) if m.shape() == (self.shape().1, self.shape().1) => {
                let inv = m.inverse()?;
                self.mat_mul(&inv)
                    .map(Product::Matrix)
                    .ok_or_else(|| self.unsupported("/", &rhs))
            }
            Operand::Vector(v) if self.shape().0 == self.shape().1 => {
                let inv = self.inverse()?;
                inv.vec_mul(v)
                    .map(Product::Vector)
                    .ok_or_else(|| self.unsupported("/", &rhs))
            }
            _ => Err(self.unsupported("/", &rhs)),
        }
    }

    /// In-place `/`. The quotient must have the same shape as `self`.
    pub fn try_div_assign<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> Result<()>
    where
        T: 'a,
    {
        let rhs = rhs.into();
        let quotient = self.try_div(rhs)?;
        self.replace_with("/=", quotient, &rhs)
    }
}

/// A dynamically-typed constructor argument.
///
/// Every value type of the crate converts into an [`Arg`] via [`From`], as do plain scalars.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg<T> {
    Scalar(T),
    Vector(AnyVector<T>),
    Matrix(AnyMatrix<T>),
    Quat(Quat<T>),
    /// A nested list of arguments, unpacked by the matrix constructor.
    Sequence(Vec<Arg<T>>),
}

impl<T> Arg<T> {
    /// Returns a type name for error messages (`f32`, `vec3`, `mat3x2`, `quat`, `sequence`).
    pub fn type_name(&self) -> String {
        match self {
            Arg::Scalar(_) => any::type_name::<T>().to_string(),
            Arg::Vector(v) => v.type_name().to_string(),
            Arg::Matrix(m) => m.type_name(),
            Arg::Quat(_) => "quat".to_string(),
            Arg::Sequence(_) => "sequence".to_string(),
        }
    }

    fn as_scalar(&self) -> Option<&T> {
        match self {
            Arg::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// Lists the argument types, e.g. `f32, vec3`.
fn describe<T>(args: &[Arg<T>]) -> String {
    args.iter()
        .map(Arg::type_name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<T> From<T> for Arg<T> {
    fn from(s: T) -> Self {
        Arg::Scalar(s)
    }
}

impl<T> From<AnyVector<T>> for Arg<T> {
    fn from(v: AnyVector<T>) -> Self {
        Arg::Vector(v)
    }
}

impl<T> From<AnyMatrix<T>> for Arg<T> {
    fn from(m: AnyMatrix<T>) -> Self {
        Arg::Matrix(m)
    }
}

impl<T> From<Quat<T>> for Arg<T> {
    fn from(q: Quat<T>) -> Self {
        Arg::Quat(q)
    }
}

impl<T> From<Vec<Arg<T>>> for Arg<T> {
    fn from(args: Vec<Arg<T>>) -> Self {
        Arg::Sequence(args)
    }
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from a runtime argument list, like a GLSL matrix constructor.
    ///
    /// The first rule that matches the arguments is used:
    ///
    /// 1. No arguments: [`Matrix::identity`].
    /// 2. One matrix of any shape: [`Matrix::from_matrix`], which copies, truncates, or embeds
    ///    into the identity.
    /// 3. One scalar: [`Matrix::from_scalar`].
    /// 4. One [`Arg::Sequence`]: its elements are used as the argument list.
    /// 5. `R * C` scalars: the elements in column-major order.
    /// 6. `C` vectors of length `R`: the columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if no rule matches.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let args = [1, 0, 0, 1, 0, 0].map(Arg::from);
    /// assert_eq!(Mat3x2::try_from_args(&args)?, Mat3x2::<i32>::try_from_args(&[])?);
    ///
    /// let err = Mat3x2::<i32>::try_from_args(&[Arg::from(vec3(1, 2, 3))]).unwrap_err();
    /// assert_eq!(err.to_string(), "no mat3x2 constructor accepts (vec3)");
    /// # Ok::<(), glmath::Error>(())
    /// ```
    pub fn try_from_args(args: &[Arg<T>]) -> Result<Self> {
        match args {
            [] => return Ok(Self::identity()),
            [Arg::Matrix(m)] => {
                return Ok(Self::from_fn(|row, col| match m.get(row, col) {
                    Some(&elem) => elem,
                    None if row == col => T::ONE,
                    None => T::ZERO,
                }))
            }
            [Arg::Scalar(s)] => return Ok(Self::from_scalar(*s)),
            [Arg::Sequence(seq)] => return Self::try_from_args(seq),
            _ => {}
        }

        if args.len() == R * C {
            let scalars = args.iter().map(Arg::as_scalar).collect::<Option<Vec<_>>>();
            if let Some(scalars) = scalars {
                return Ok(Self::from_fn(|row, col| *scalars[col * R + row]));
            }
        }

        if args.len() == C {
            let columns = args
                .iter()
                .map(|arg| match arg {
                    Arg::Vector(v) if v.len() == R => Some(v.as_slice()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>();
            if let Some(columns) = columns {
                return Ok(Self::from_fn(|row, col| columns[col][row]));
            }
        }

        Err(Error::Construction {
            target: Self::type_name(),
            args: describe(args),
        })
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion from a runtime argument list.
    ///
    /// Accepted argument lists:
    ///
    /// - nothing: [`Quat::IDENTITY`]
    /// - a quaternion: a copy
    /// - a `vec3` of Euler angles: [`Quat::from_euler`]
    /// - a `mat3` or `mat4`: [`Quat::from_mat3`] / [`Quat::from_mat4`]
    /// - a scalar and a `vec3`: [`Quat::from_scalar_vector`]
    /// - two `vec3`s: [`Quat::from_rotation_arc`]
    /// - 4 scalars `w, x, y, z`: [`Quat::new`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] if one of 4 arguments is not a scalar, and
    /// [`Error::Construction`] for any other argument list.
    pub fn try_from_args(args: &[Arg<T>]) -> Result<Self> {
        use AnyMatrix::{Mat3, Mat4};
        use AnyVector::Vec3;

        match args {
            [] => Ok(Self::IDENTITY),
            [Arg::Quat(q)] => Ok(*q),
            [Arg::Vector(Vec3(angles))] => Ok(Self::from_euler(*angles)),
            [Arg::Matrix(Mat3(m))] => Ok(Self::from_mat3(m)),
            [Arg::Matrix(Mat4(m))] => Ok(Self::from_mat4(m)),
            [Arg::Scalar(w), Arg::Vector(Vec3(v))] => Ok(Self::from_scalar_vector(*w, *v)),
            [Arg::Vector(Vec3(u)), Arg::Vector(Vec3(v))] => Ok(Self::from_rotation_arc(*u, *v)),
            [w, x, y, z] => {
                let scalar = |arg: &Arg<T>| {
                    arg.as_scalar().copied().ok_or_else(|| Error::UnsupportedType {
                        target: "quat".to_string(),
                        found: arg.type_name(),
                    })
                };
                Ok(Self::new(scalar(w)?, scalar(x)?, scalar(y)?, scalar(z)?))
            }
            _ => Err(Error::Construction {
                target: "quat".to_string(),
                args: describe(args),
            }),
        }
    }
}
