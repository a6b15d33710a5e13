use std::{array, fmt};

use crate::{
    error::{resolve_index, Error, Result},
    Float, Number, One, Signed, Vector, Zero,
};

mod ops;

// Shape aliases use the GLSL naming scheme: `MatCxR` has `C` columns and `R` rows.

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 columns and 3 rows.
pub type Mat2x3<T> = Matrix<T, 3, 2>;
/// A matrix with 2 columns and 4 rows.
pub type Mat2x4<T> = Matrix<T, 4, 2>;
/// A matrix with 3 columns and 2 rows.
pub type Mat3x2<T> = Matrix<T, 2, 3>;
/// A matrix with 3 columns and 4 rows.
pub type Mat3x4<T> = Matrix<T, 4, 3>;
/// A matrix with 4 columns and 2 rows.
pub type Mat4x2<T> = Matrix<T, 2, 4>;
/// A matrix with 4 columns and 3 rows.
pub type Mat4x3<T> = Matrix<T, 3, 4>;

/// A [`Mat2x3`] with [`f32`] elements.
pub type Mat2x3f = Mat2x3<f32>;
/// A [`Mat2x4`] with [`f32`] elements.
pub type Mat2x4f = Mat2x4<f32>;
/// A [`Mat3x2`] with [`f32`] elements.
pub type Mat3x2f = Mat3x2<f32>;
/// A [`Mat3x4`] with [`f32`] elements.
pub type Mat3x4f = Mat3x4<f32>;
/// A [`Mat4x2`] with [`f32`] elements.
pub type Mat4x2f = Mat4x2<f32>;
/// A [`Mat4x3`] with [`f32`] elements.
pub type Mat4x3f = Mat4x3<f32>;

/// A [`Mat2x3`] with [`f64`] elements.
pub type Mat2x3d = Mat2x3<f64>;
/// A [`Mat2x4`] with [`f64`] elements.
pub type Mat2x4d = Mat2x4<f64>;
/// A [`Mat3x2`] with [`f64`] elements.
pub type Mat3x2d = Mat3x2<f64>;
/// A [`Mat3x4`] with [`f64`] elements.
pub type Mat3x4d = Mat3x4<f64>;
/// A [`Mat4x2`] with [`f64`] elements.
pub type Mat4x2d = Mat4x2<f64>;
/// A [`Mat4x3`] with [`f64`] elements.
pub type Mat4x3d = Mat4x3<f64>;

/// An `R`-row, `C`-column matrix of `T`s, stored as `C` column vectors.
///
/// The matrix is stored as `C` column [`Vector`]s of length `R`. The type aliases follow the GLSL
/// convention of naming the column count first, so [`Mat3x2`] has 3 columns and 2 rows (it is a
/// `Matrix<T, 2, 3>`).
///
/// # Construction
///
/// - [`Matrix::identity`] (also the [`Default`]) has 1 wherever the row index equals the column
///   index and 0 everywhere else. This works for non-square shapes too.
/// - [`Matrix::from_scalar`] scales that pattern.
/// - [`Matrix::from_columns`] and [`Matrix::from_rows`] take column or row vectors.
/// - [`Matrix::from_column_slice`] takes `R * C` elements in column-major order.
/// - [`Matrix::from_matrix`] converts between shapes: larger sources are truncated to their
///   top-left part, and positions a smaller source does not cover are taken from the identity.
/// - [`Matrix::try_from_args`] resolves a runtime argument list the way a GLSL constructor would.
///
/// # Element Access
///
/// Indexing with a single `usize` selects a *column*. Indexing with a `(row, column)` tuple
/// selects an element:
///
/// ```
/// # use glmath::*;
/// let mut mat = Mat2::from_columns([[1, 2], [3, 4]]);
/// assert_eq!(mat[1], vec2(3, 4));
/// mat[(0, 1)] = 9;
/// assert_eq!(mat[1], vec2(9, 4));
/// ```
///
/// [`Matrix::column`] and [`Matrix::set_column`] accept negative indices that count from the last
/// column. Range indexing is not supported:
///
/// ```compile_fail
/// # use glmath::*;
/// let mat = Mat3f::identity();
/// let _ = &mat[0..2];
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, R>; C]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

/// Returns the GLSL-style name of a matrix shape, e.g. `mat3x2` or `mat4`.
pub(crate) fn shape_name(rows: usize, cols: usize) -> String {
    if rows == cols {
        format!("mat{cols}")
    } else {
        format!("mat{cols}x{rows}")
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLUMNS: usize = C;

    /// Returns the GLSL-style name of this matrix shape (`mat3x2`, `mat4`, ...).
    ///
    /// Used in error messages.
    pub fn type_name() -> String {
        shape_name(R, C)
    }

    /// Builds a matrix out of its columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat3x2::from_columns([[1, 0], [0, 1], [0, 0]]);
    /// assert_eq!(mat, Mat3x2::<i32>::identity());
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Builds a matrix out of its rows, transposing them into column-major storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let rows = Mat2::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Mat2::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_columns(rows).transpose()
    }

    /// Builds a matrix by calling `cb(row, col)` for every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat3x2::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(row, col))))
    }

    /// Transforms every element with `f`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns the transpose, turning rows into columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the columns of this matrix.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Converts this matrix into its array of columns.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }

    /// Returns the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns a copy of the column at `index`.
    ///
    /// Negative indices count from the last column, so `-1` refers to column `C - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `-C..C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat4::<i32>::identity();
    /// assert_eq!(mat.column(-1)?, mat.column(3)?);
    /// assert!(mat.column(4).is_err());
    /// # Ok::<(), glmath::Error>(())
    /// ```
    pub fn column(&self, index: isize) -> Result<Vector<T, R>>
    where
        T: Copy,
    {
        let index = resolve_index(Self::type_name, index, C)?;
        Ok(self.0[index])
    }

    /// Replaces the column at `index` (negative indices count from the end).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `-C..C`.
    pub fn set_column(&mut self, index: isize, column: impl Into<Vector<T, R>>) -> Result<()> {
        let index = resolve_index(Self::type_name, index, C)?;
        self.0[index] = column.into();
        Ok(())
    }

    /// Element at `(row, col)`, or [`None`] outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.as_slice().get(row))
    }

    /// Mutable element at `(row, col)`, or [`None`] outside the matrix.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0
            .get_mut(col)
            .and_then(|col| col.as_mut_slice().get_mut(row))
    }

    /// Creates a matrix from `R * C` elements in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if `elems` does not contain exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat3x2::from_column_slice(&[1, 0, 0, 1, 0, 0])?;
    /// assert_eq!(mat, Mat3x2::<i32>::identity());
    /// assert!(Mat3x2::from_column_slice(&[1, 2, 3]).is_err());
    /// # Ok::<(), glmath::Error>(())
    /// ```
    pub fn from_column_slice(elems: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if elems.len() != R * C {
            return Err(Error::Construction {
                target: Self::type_name(),
                args: format!("{} scalars", elems.len()),
            });
        }
        Ok(Self::from_fn(|row, col| elems[col * R + row]))
    }

    /// Element-wise absolute value.
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        self.map(T::abs)
    }

    /// Element-wise (component) multiplication, GLSL's `matrixCompMult`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let a = Mat2::from_columns([[1, 2], [3, 4]]);
    /// assert_eq!(a.comp_mul(a), Mat2::from_columns([[1, 4], [9, 16]]));
    /// ```
    #[doc(alias = "matrixCompMult")]
    pub fn comp_mul(self, other: Self) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| self[(row, col)] * other[(row, col)])
    }

    /// Computes the outer product `c * r^T` of a column and a row vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let m = Matrix::outer_product(vec2(1, 2), vec3(3, 4, 5));
    /// assert_eq!(m, Mat3x2::from_columns([[3, 6], [4, 8], [5, 10]]));
    /// ```
    #[doc(alias = "outerProduct")]
    pub fn outer_product(c: Vector<T, R>, r: Vector<T, C>) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| c[row] * r[col])
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the (generalized) identity matrix.
    ///
    /// Every element whose row index equals its column index is 1, all others are 0. For
    /// non-square shapes this leaves the columns or rows past the diagonal all-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Mat3x2::<i32>::identity(), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self {
        Self::from_scalar(T::ONE)
    }

    /// Returns the identity pattern scaled by `diag`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Mat2x3::from_scalar(5), Matrix::from_rows([
    ///     [5, 0],
    ///     [0, 5],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn from_scalar(diag: T) -> Self {
        Self::from_fn(|row, col| if row == col { diag } else { T::ZERO })
    }

    /// Converts a matrix of any shape into this shape.
    ///
    /// Each element that exists in `other` is copied. The remaining positions, which only exist if
    /// `other` has fewer rows or columns, are filled from [`Matrix::identity`], not with zeroes.
    /// A larger `other` is therefore truncated to its top-left `R`x`C` part, and a smaller one is
    /// embedded into the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let m = Mat2::from_columns([[1, 2], [3, 4]]);
    /// assert_eq!(Mat3::from_matrix(m), Matrix::from_rows([
    ///     [1, 3, 0],
    ///     [2, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(Mat2::from_matrix(Mat3::from_matrix(m)), m);
    /// ```
    pub fn from_matrix<const R2: usize, const C2: usize>(other: Matrix<T, R2, C2>) -> Self {
        Self::from_fn(|row, col| {
            if row < R2 && col < C2 {
                other[(row, col)]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Copies `self` into a matrix of another shape.
    ///
    /// Unlike [`Matrix::from_matrix`], elements not present in `self` are set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let m = Mat2::from_columns([[1, 2], [3, 4]]);
    /// assert_eq!(m.resize::<3, 3>()[(2, 2)], 0);
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2> {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self[(row, col)]
            } else {
                T::ZERO
            }
        })
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// The main diagonal, top-left to bottom-right.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Builds a diagonal matrix.
    ///
    /// All other elements are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Computes the [determinant], `ad - bc` for rows `(a, b)` and `(c, d)`.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0.map(Vector::into_array);
        a * d - b * c
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Computes the [determinant] by cofactor expansion along the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0.map(Vector::into_array);
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Removes row `skip_row` and column `skip_col`.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Mat2<T> {
        Matrix::from_fn(|row, col| {
            let row = row + (row >= skip_row) as usize;
            let col = col + (col >= skip_col) as usize;
            self[(row, col)]
        })
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Removes row `skip_row` and column `skip_col`.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Mat3<T> {
        Matrix::from_fn(|row, col| {
            let row = row + (row >= skip_row) as usize;
            let col = col + (col >= skip_col) as usize;
            self[(row, col)]
        })
    }

    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the [determinant] of the matrix (Laplace expansion along the first row).
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            acc + self[(0, col)] * self.cofactor(0, col)
        })
    }
}

// Inversion divides by the determinant, which truncates for integer elements, so it is only
// offered for floating-point matrices.

impl<T: Float> Matrix<T, 2, 2> {
    /// Inverts this 2x2 matrix, or returns [`Error::Singular`] if its determinant is zero.
    ///
    /// Integer matrices have a determinant but cannot be inverted:
    ///
    /// ```compile_fail
    /// # use glmath::*;
    /// let m = Mat2::<i32>::from_columns([[2, 0], [0, 1]]);
    /// let _ = m.try_invert();
    /// ```
    pub fn try_invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::Singular {
                target: Self::type_name(),
            });
        }

        let [[a, c], [b, d]] = self.0.map(Vector::into_array);
        Ok(Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / det))
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Inverts this 3x3 matrix, or returns [`Error::Singular`] if its determinant is zero.
    pub fn try_invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::Singular {
                target: Self::type_name(),
            });
        }

        let inv_det = T::ONE / det;
        // Adjugate: transposed cofactor matrix.
        Ok(Matrix::from_fn(|row, col| {
            let cofactor = self.minor(col, row).determinant();
            let cofactor = if (row + col) % 2 == 0 {
                cofactor
            } else {
                -cofactor
            };
            cofactor * inv_det
        }))
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Inverts this 4x4 matrix, or returns [`Error::Singular`] if its determinant is zero.
    pub fn try_invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::Singular {
                target: Self::type_name(),
            });
        }

        let inv_det = T::ONE / det;
        Ok(Matrix::from_fn(|row, col| self.cofactor(col, row) * inv_det))
    }
}

macro_rules! invert {
    ($($n:literal),+) => {
        $(
            impl<T: Float> Matrix<T, $n, $n> {
                /// Inverts this matrix.
                ///
                /// # Panics
                ///
                /// This method will panic if `self` is not invertible (ie. if its determinant is
                /// zero). Use `try_invert` to handle that case.
                #[track_caller]
                pub fn invert(&self) -> Self {
                    match self.try_invert() {
                        Ok(inv) => inv,
                        Err(_) => panic!("attempt to invert a non-invertible matrix"),
                    }
                }
            }
        )+
    };
}
invert!(2, 3, 4);

impl<T: Zero + One + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    /// Returns the generalized identity, see [`Matrix::identity`].
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    /// Creates a matrix from an array of columns.
    fn from(columns: [[T; R]; C]) -> Self {
        Self::from_columns(columns)
    }
}

/// Prints the rows in reading order, e.g. `[[1, 0], [0, 1]]`.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|row| DebugRow { mat: self, row }))
            .finish()
    }
}

// Always formatted on a single line, even in alternate mode.
struct DebugRow<'a, T, const R: usize, const C: usize> {
    mat: &'a Matrix<T, R, C>,
    row: usize,
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for DebugRow<'_, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (col, column) in self.mat.0.iter().enumerate() {
            if col != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", column[self.row])?;
        }
        f.write_str("]")
    }
}

/// Renders the matrix column by column, e.g. `mat3x2((1, 0), (0, 1), (0, 0))`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::type_name())?;
        for (c, column) in self.0.iter().enumerate() {
            if c != 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            for (r, elem) in column.as_slice().iter().enumerate() {
                if r != 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(elem, f)?;
            }
            f.write_str(")")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat3x2::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn identity_pattern() {
        // Explicit scalar form vs. the default constructor.
        assert_eq!(
            Mat3x2::<i32>::default(),
            Mat3x2::from_column_slice(&[1, 0, 0, 1, 0, 0]).unwrap()
        );
        assert_eq!(
            Mat2x3::<i32>::identity(),
            Mat2x3::from_columns([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(Mat4::<i32>::from_scalar(3).diagonal(), [3, 3, 3, 3]);
        assert_eq!(Mat4x2::from_scalar(2).row(1), [0, 2, 0, 0]);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Rows are printed one after another.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // Alternate mode puts every row on its own line.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(
            Mat3x2::<i32>::identity().to_string(),
            "mat3x2((1, 0), (0, 1), (0, 0))"
        );
        assert_eq!(Mat2::<i32>::identity().to_string(), "mat2((1, 0), (0, 1))");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3x2f::type_name(), "mat3x2");
        assert_eq!(Mat4x3f::ROWS, 3);
        assert_eq!(Mat4x3f::COLUMNS, 4);
    }

    #[rustfmt::skip]
    #[test]
    fn truncate() {
        let mat = Mat4::from_fn(|row, col| (row * 4 + col) as i32);
        assert_eq!(Mat3x2::from_matrix(mat), Matrix::from_rows([
            [0, 1, 2],
            [4, 5, 6],
        ]));
        assert_eq!(Mat2::from_matrix(mat), Matrix::from_rows([
            [0, 1],
            [4, 5],
        ]));
    }

    #[rustfmt::skip]
    #[test]
    fn embed_pads_with_identity() {
        let m = Mat3x2::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        let n = Mat3::from_matrix(m);
        assert_eq!(n, Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [0, 0, 1],
        ]));
        assert_eq!(n[(2, 2)], 1);
        assert_ne!(n, m.resize::<3, 3>());

        // Missing columns and rows at the same time.
        let small = Mat2::from_columns([[7, 8], [9, 10]]);
        assert_eq!(Mat4x3::from_matrix(small), Matrix::from_rows([
            [7, 9, 0, 0],
            [8, 10, 0, 0],
            [0, 0, 1, 0],
        ]));
    }

    #[rustfmt::skip]
    #[test]
    fn truncate_one_dimension_pad_the_other() {
        // More rows than the target, fewer columns.
        let tall = Mat2x4::from_columns([[1, 2, 3, 4], [5, 6, 7, 8]]);
        assert_eq!(Mat3x2::from_matrix(tall), Matrix::from_rows([
            [1, 5, 0],
            [2, 6, 0],
        ]));

        // More columns than the target, fewer rows.
        let wide = Mat4x2::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
        ]);
        assert_eq!(Mat3x4::from_matrix(wide), Matrix::from_rows([
            [1, 2, 3],
            [5, 6, 7],
            [0, 0, 1],
            [0, 0, 0],
        ]));
    }

    #[test]
    fn copy_round_trip() {
        let m = Mat4x3::from_fn(|row, col| (row + 10 * col) as f32);
        assert_eq!(Mat4x3::from_matrix(m), m);
    }

    #[test]
    fn columns() {
        let mut mat = Mat4::from_fn(|row, col| (row + 4 * col) as i32);
        assert_eq!(mat.column(-1).unwrap(), mat.column(3).unwrap());
        assert_eq!(mat.column(-4).unwrap(), mat[0]);
        assert!(matches!(
            mat.column(-5),
            Err(Error::IndexOutOfRange { index: -5, len: 4, .. })
        ));

        mat.set_column(-2, [0, 0, 0, 0]).unwrap();
        assert_eq!(mat[2], [0, 0, 0, 0]);
        assert!(mat.set_column(4, [1, 1, 1, 1]).is_err());
    }

    #[test]
    fn outer_and_comp() {
        let m = Mat2x3::outer_product(vec3(1, 2, 3), vec2(1, -1));
        assert_eq!(m.abs(), Mat2x3::from_columns([[1, 2, 3], [1, 2, 3]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat3f::identity().determinant(), 1.0);
        assert_eq!(Mat4f::identity().determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let four = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(four.determinant(), 30);
    }

    #[test]
    fn invert() {
        #[rustfmt::skip]
        let m = Mat3d::from_rows([
            [2.0, 0.0, 1.0],
            [1.0, 3.0, 0.0],
            [0.0, 1.0, 4.0],
        ]);
        assert_relative_eq!(m * m.invert(), Mat3d::identity(), epsilon = 1e-12);

        #[rustfmt::skip]
        let m = Mat4d::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0,  5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0,  0.0],
        ]);
        assert_relative_eq!(m.invert() * m, Mat4d::identity(), epsilon = 1e-12);

        let m = Mat2d::from_columns([[4.0, 2.0], [7.0, 6.0]]);
        let expected = Mat2d::from_columns([[0.6, -0.2], [-0.7, 0.4]]);
        assert_relative_eq!(m.invert(), expected, epsilon = 1e-12);

        assert_eq!(
            Mat3f::ZERO.try_invert(),
            Err(Error::Singular {
                target: "mat3".into()
            })
        );
    }

    #[test]
    fn invert_scales_by_determinant() {
        let ints = Mat2::<i32>::from_columns([[2, 0], [0, 1]]);
        assert_eq!(ints.determinant(), 2);

        let m = ints.map(|e| e as f64);
        assert_eq!(m.invert(), Mat2d::from_columns([[0.5, 0.0], [0.0, 1.0]]));
        assert_eq!(m / m, Mat2d::identity());
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular() {
        Mat4f::ZERO.invert();
    }
}
