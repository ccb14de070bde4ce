use std::fmt;

use crate::{Float, Number, One, Vector, Zero};

mod ops;
mod transform;

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

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from an array of row or
///   column vectors (or arrays).
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a square matrix with the given diagonal and zero elsewhere.
/// - Transform builders such as [`Matrix::rotation_x`], [`Matrix::translation`],
///   [`Matrix::look_at`] and [`Matrix::perspective`] create the usual graphics matrices.
///
/// [`Matrix::ZERO`] has every element set to 0, `Matrix::IDENTITY` is the square identity matrix.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples. Indices are
/// 0-based, so the element usually written as *M₂₃* is `m[(1, 2)]`.
///
/// ```
/// # use mathkit::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// Indexing out of bounds panics. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s
/// instead.
///
/// # Conventions
///
/// Matrices multiply column vectors from the left (`m * v`), so `a * b` applies `b` first. The
/// translation part of a 4x4 transform lives in the last column.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

#[rustfmt::skip]
impl<T: Zero + One> Matrix<T, 2, 2> {
    /// The 2x2 identity matrix.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO],
        [T::ZERO, T::ONE],
    ]);
}

#[rustfmt::skip]
impl<T: Zero + One> Matrix<T, 3, 3> {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);
}

#[rustfmt::skip]
impl<T: Zero + One> Matrix<T, 4, 4> {
    /// The 4x4 identity matrix.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(std::array::from_fn(|col| {
            std::array::from_fn(|row| cb(row, col))
        }))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
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

    /// Returns column `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(index, col)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` are initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// assert_eq!(mat.resize::<2, 2>(), Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| match self.get(row, col) {
            Some(elem) => *elem,
            None => T::ZERO,
        })
    }

    /// Resets every element of `self` to 0, in place.
    pub fn set_zero(&mut self)
    where
        T: Zero,
    {
        self.0
            .iter_mut()
            .flatten()
            .for_each(|elem| *elem = T::ZERO);
    }

    /// Linearly interpolates each element between `self` and `target`.
    ///
    /// `t` is not clamped. Interpolating two rotation matrices this way does *not* produce a
    /// rotation matrix in general; use [`Quat::slerp`][crate::Quat::slerp] for that.
    pub fn lerp(self, target: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (target - self) * t
    }

    /// Returns whether every element differs from the corresponding one in `other` by less than
    /// [`Float::EPSILON`].
    pub fn nearly_equal(&self, other: &Self) -> bool
    where
        T: Float,
    {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(&a, &b)| (a - b).abs() < T::EPSILON)
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Resets `self` to the identity matrix, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let mut m = Mat3d::from_diagonal([2.0, 3.0, 4.0]);
    /// m.set_identity();
    /// assert_eq!(m, Mat3d::IDENTITY);
    /// ```
    pub fn set_identity(&mut self)
    where
        T: Zero + One,
    {
        for (c, column) in self.0.iter_mut().enumerate() {
            for (r, elem) in column.iter_mut().enumerate() {
                *elem = if r == c { T::ONE } else { T::ZERO };
            }
        }
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal are initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
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

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

/// Maps an index of a minor back to the index in the full matrix, skipping `removed`.
fn skip(index: usize, removed: usize) -> usize {
    if index < removed {
        index
    } else {
        index + 1
    }
}

/// Sign of the cofactor at `(row, col)`.
fn cofactor_sign<T: Number>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        T::ONE
    } else {
        -T::ONE
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// assert_eq!(Mat2d::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).determinant(), -2);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Returns the cofactor matrix, where each element is the signed determinant of the 1x1 minor
    /// left after removing its row and column.
    #[rustfmt::skip]
    pub fn cofactor(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Matrix::from_rows([
            [d, -c],
            [-b, a],
        ])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Returns the 2x2 matrix left after removing `row` and `col` from `self`.
    pub fn minor(&self, row: usize, col: usize) -> Mat2<T> {
        Matrix::from_fn(|r, c| self[(skip(r, row), skip(c, col))])
    }

    /// Returns the cofactor matrix, `C[(i, j)] = (-1)^(i+j) * minor(i, j).determinant()`.
    pub fn cofactor(&self) -> Self {
        Matrix::from_fn(|r, c| cofactor_sign::<T>(r, c) * self.minor(r, c).determinant())
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row, which expands to the full 24-term
    /// Leibniz sum.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            acc + cofactor_sign::<T>(0, col) * self[(0, col)] * self.minor(0, col).determinant()
        })
    }

    /// Returns the 3x3 matrix left after removing `row` and `col` from `self`.
    pub fn minor(&self, row: usize, col: usize) -> Mat3<T> {
        Matrix::from_fn(|r, c| self[(skip(r, row), skip(c, col))])
    }

    /// Returns the cofactor matrix, `C[(i, j)] = (-1)^(i+j) * minor(i, j).determinant()`.
    pub fn cofactor(&self) -> Self {
        Matrix::from_fn(|r, c| cofactor_sign::<T>(r, c) * self.minor(r, c).determinant())
    }
}

macro_rules! inverse {
    ($($n:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Returns the adjugate (classical adjoint) of the matrix, the transpose of its
                /// [cofactor matrix](Self::cofactor).
                pub fn adjugate(&self) -> Self {
                    self.cofactor().transpose()
                }

                /// Returns the inverse of this matrix, `adjugate() * (1 / determinant())`.
                ///
                /// If the matrix is singular (its [determinant](Self::determinant) is zero), the
                /// result contains infinite or `NaN` elements. Callers that can encounter singular
                /// matrices need to check the determinant first.
                ///
                /// # Examples
                ///
                /// ```
                /// # use mathkit::*;
                #[doc = concat!("let m = Mat", $n, "d::from_diagonal(Vector::splat(2.0));")]
                #[doc = concat!("assert_eq!(m.inverse(), Mat", $n, "d::from_diagonal(Vector::splat(0.5)));")]
                /// ```
                pub fn inverse(&self) -> Self
                where
                    T: Float,
                {
                    let det = self.determinant();
                    if cfg!(debug_assertions) && det == T::ZERO {
                        log::debug!("inverting a singular {}x{} matrix", $n, $n);
                    }
                    self.adjugate() * (T::ONE / det)
                }
            }
        )+
    };
}

inverse!(2, 3, 4);

impl<T, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C>
where
    T: fmt::Debug + Copy,
{
    /// Prints the matrix row by row, in natural writing order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&self.row(row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec4};

    use super::*;

    #[test]
    fn nearly_equal() {
        let m = Mat2d::IDENTITY;
        assert!(m.nearly_equal(&Mat2d::from_rows([[1.0, 1e-17], [0.0, 1.0]])));
        assert!(!m.nearly_equal(&Mat2d::from_rows([[1.0, 1e-9], [0.0, 1.0]])));
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::<i32, 2, 3>::from_columns([[1, 4], [2, 5], [3, 6]]),
        );

        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.row(1), [3, 4]);
        assert_eq!(m.column(1), [2, 4]);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));
        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{:?}", mat), "[(0, 1), (2, 3)]");
        assert_eq!(format!("{:?}", Mat2d::IDENTITY), "[(1.0, 0.0), (0.0, 1.0)]");
    }

    #[test]
    fn constants_and_resets() {
        assert_eq!(Mat4d::ZERO, Mat4d::from_fn(|_, _| 0.0));
        assert_eq!(Mat3d::IDENTITY, Mat3d::from_diagonal([1.0, 1.0, 1.0]));
        assert_eq!(Mat4d::IDENTITY.trace(), 4.0);

        let mut m = Mat3d::from_fn(|r, c| (r * 3 + c) as f64);
        m.set_zero();
        assert_eq!(m, Mat3d::ZERO);
        m.set_identity();
        assert_eq!(m, Mat3d::IDENTITY);
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn products() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat * vec2(4, 5), [5, 23]);

        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [7, 8, 9],
            [10, 11, 12],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], 1 * 8 + 2 * 11);
        assert_eq!(c[(2, 2)], 5 * 9 + 6 * 12);

        let m = Mat4d::from_fn(|r, c| (r + 2 * c) as f64);
        assert_eq!(Mat4d::IDENTITY * m, m);
        assert_eq!(m * Mat4d::IDENTITY, m);
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), m.column(3));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2d::ZERO.determinant(), 0.0);
        assert_eq!(Mat3d::ZERO.determinant(), 0.0);
        assert_eq!(Mat4d::ZERO.determinant(), 0.0);
        assert_eq!(Matrix::from_rows([[1, 0], [0, 1]]).determinant(), 1);
        assert_eq!(Mat3d::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4d::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(m3.determinant(), 54);
        assert_eq!(m3.transpose().determinant(), 54);

        #[rustfmt::skip]
        let m4 = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(m4.determinant(), 30);
        assert_eq!(m4.transpose().determinant(), 30);
        assert_eq!((-m4).determinant(), 30);
    }

    #[test]
    fn cofactor_adjugate() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.cofactor(), Matrix::from_rows([[4, -3], [-2, 1]]));
        assert_eq!(m.adjugate(), Matrix::from_rows([[4, -2], [-3, 1]]));

        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [1, 2, 3],
            [0, 1, 4],
            [5, 6, 0],
        ]);
        #[rustfmt::skip]
        assert_eq!(m3.cofactor(), Matrix::from_rows([
            [-24, 20, -5],
            [ 18, -15, 4],
            [  5, -4,  1],
        ]));
        assert_eq!(m3.minor(0, 0), Matrix::from_rows([[1, 4], [6, 0]]));
        // A * adj(A) = det(A) * I
        assert_eq!(m3 * m3.adjugate(), Matrix::from_diagonal([1, 1, 1]) * m3.determinant());
    }

    #[test]
    fn inverse() {
        let diag = Matrix::from_rows([[2.0, 0.0], [0.0, 2.0]]);
        assert_eq!(diag.inverse(), Matrix::from_rows([[0.5, 0.0], [0.0, 0.5]]));
        assert_eq!(Mat4d::IDENTITY.inverse(), Mat4d::IDENTITY);

        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [4.0, 7.0, 2.0],
            [3.0, 6.0, 1.0],
            [2.0, 5.0, 3.0],
        ]);
        assert_abs_diff_eq!(m3 * m3.inverse(), Mat3d::IDENTITY, epsilon = 1e-12);
        assert_abs_diff_eq!(m3.inverse() * m3, Mat3d::IDENTITY, epsilon = 1e-12);

        #[rustfmt::skip]
        let m4 = Matrix::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0,  5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0,  0.0],
        ]);
        assert_abs_diff_eq!(m4 * m4.inverse(), Mat4d::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let _ = env_logger::builder().is_test(true).try_init();

        let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(singular.determinant(), 0.0);
        let inv = singular.inverse();
        assert!(inv.0.iter().flatten().all(|e: &f64| !e.is_finite()));

        assert!(!Mat3d::ZERO.inverse()[(0, 0)].is_finite());
    }

    #[test]
    fn lerp_neg_scale() {
        let a = Mat2d::ZERO;
        let b = Mat2d::from_fn(|r, c| (r * 2 + c) as f64);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), b * 0.5);
        assert_eq!(-b + b, Mat2d::ZERO);
        assert_eq!(b - b, Mat2d::ZERO);
    }
}
