use std::ops::{Add, Mul, Neg, Sub};

use ahash::HashMap;
use tracing::{debug, instrument};

use crate::{
    combinatorics::{permutation_sign, PermutationIterator},
    domains::{complex::Complex, decimal::Decimal, Modulus, OrderedScalar, RealScalar, Scalar},
    errors::{NumericError, Result},
    sqrt::SqrtContext,
};

use super::vector::{check_size, checked_size, Vector};

/// An immutable matrix with 1-based row and column indices.
///
/// Matrices are created with a [MatrixBuilder] or from their rows. All operations return new matrices.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<S> {
    pub(crate) data: Vec<S>,
    pub(crate) row_size: u32,
    pub(crate) column_size: u32,
}

/// A mutable staging area for the cells of a [Matrix].
///
/// Indices are checked when they are put, completeness is checked by [MatrixBuilder::build].
#[derive(Clone, Debug)]
pub struct MatrixBuilder<S> {
    row_size: u32,
    column_size: u32,
    values: HashMap<(u32, u32), S>,
}

impl<S: Scalar> MatrixBuilder<S> {
    /// Create a builder for a matrix with `row_size` rows and `column_size` columns.
    pub fn new(row_size: u32, column_size: u32) -> Result<MatrixBuilder<S>> {
        check_size("row size", row_size)?;
        check_size("column size", column_size)?;
        Ok(MatrixBuilder {
            row_size,
            column_size,
            values: HashMap::default(),
        })
    }

    pub fn row_size(&self) -> u32 {
        self.row_size
    }

    pub fn column_size(&self) -> u32 {
        self.column_size
    }

    /// Set the cell at `(row, column)`.
    pub fn put(&mut self, row: u32, column: u32, value: S) -> Result<&mut Self> {
        NumericError::check_index("row", 1, self.row_size, row)?;
        NumericError::check_index("column", 1, self.column_size, column)?;
        self.values.insert((row, column), value);
        Ok(self)
    }

    /// Set every cell to `value`.
    pub fn put_all(&mut self, value: S) -> &mut Self {
        for r in 1..=self.row_size {
            for c in 1..=self.column_size {
                self.values.insert((r, c), value.clone());
            }
        }
        self
    }

    /// Create the matrix. Every cell must have been set.
    pub fn build(&self) -> Result<Matrix<S>> {
        let mut data = Vec::with_capacity(self.row_size as usize * self.column_size as usize);
        for r in 1..=self.row_size {
            for c in 1..=self.column_size {
                match self.values.get(&(r, c)) {
                    Some(v) => data.push(v.clone()),
                    None => {
                        debug!(
                            "Matrix cell ({}, {}) of a {}x{} matrix was never set",
                            r, c, self.row_size, self.column_size
                        );
                        return Err(NumericError::not_null(format!("element ({}, {})", r, c)));
                    }
                }
            }
        }

        Ok(Matrix::new_unchecked(self.row_size, self.column_size, data))
    }
}

impl<S: Scalar> Matrix<S> {
    pub(crate) fn new_unchecked(row_size: u32, column_size: u32, data: Vec<S>) -> Matrix<S> {
        debug_assert_eq!(data.len(), row_size as usize * column_size as usize);
        Matrix {
            data,
            row_size,
            column_size,
        }
    }

    /// Create a builder for a matrix with `row_size` rows and `column_size` columns.
    pub fn builder(row_size: u32, column_size: u32) -> Result<MatrixBuilder<S>> {
        MatrixBuilder::new(row_size, column_size)
    }

    /// Create a matrix with `row_size` rows and `column_size` columns filled with zeroes.
    pub fn zero(row_size: u32, column_size: u32) -> Result<Matrix<S>> {
        check_size("row size", row_size)?;
        check_size("column size", column_size)?;
        Ok(Matrix::new_unchecked(
            row_size,
            column_size,
            (0..row_size as usize * column_size as usize)
                .map(|_| S::zero())
                .collect(),
        ))
    }

    /// Create a square matrix with ones on the main diagonal and zeroes elsewhere.
    pub fn identity_matrix(size: u32) -> Result<Matrix<S>> {
        check_size("size", size)?;
        Ok(Matrix::new_unchecked(
            size,
            size,
            (0..size as usize * size as usize)
                .map(|i| {
                    if i % size as usize == i / size as usize {
                        S::one()
                    } else {
                        S::zero()
                    }
                })
                .collect(),
        ))
    }

    /// Convert a row-major linear representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<S>, row_size: u32, column_size: u32) -> Result<Matrix<S>> {
        check_size("row size", row_size)?;
        check_size("column size", column_size)?;
        if data.len() != row_size as usize * column_size as usize {
            return Err(NumericError::invalid_argument(format!(
                "Data length does not match matrix dimensions: {} vs ({},{})",
                data.len(),
                row_size,
                column_size
            )));
        }

        Ok(Matrix::new_unchecked(row_size, column_size, data))
    }

    /// Create a new matrix from a list of rows of equal length.
    pub fn from_nested_vec(rows: Vec<Vec<S>>) -> Result<Matrix<S>> {
        let row_size = checked_size("row size", rows.len())?;
        let column_size = checked_size("column size", rows[0].len())?;

        let mut data = Vec::with_capacity(row_size as usize * column_size as usize);
        for (i, r) in rows.into_iter().enumerate() {
            if r.len() != column_size as usize {
                return Err(NumericError::invalid_argument(format!(
                    "Matrix is not rectangular: row {} has {} elements instead of {}",
                    i + 1,
                    r.len(),
                    column_size
                )));
            }
            data.extend(r);
        }

        Ok(Matrix::new_unchecked(row_size, column_size, data))
    }

    pub fn row_size(&self) -> u32 {
        self.row_size
    }

    pub fn column_size(&self) -> u32 {
        self.column_size
    }

    /// The cells in row-major order.
    pub fn entries(&self) -> &[S] {
        &self.data
    }

    #[inline]
    fn cell(&self, row: u32, column: u32) -> &S {
        &self.data[((row - 1) * self.column_size + column - 1) as usize]
    }

    /// Get the cell at `(row, column)`.
    pub fn element(&self, row: u32, column: u32) -> Result<&S> {
        NumericError::check_index("row", 1, self.row_size, row)?;
        NumericError::check_index("column", 1, self.column_size, column)?;
        Ok(self.cell(row, column))
    }

    /// Get the row with index `row`.
    pub fn row(&self, row: u32) -> Result<Vector<S>> {
        NumericError::check_index("row", 1, self.row_size, row)?;
        let start = ((row - 1) * self.column_size) as usize;
        Ok(Vector {
            data: self.data[start..start + self.column_size as usize].to_vec(),
        })
    }

    /// Get the column with index `column`.
    pub fn column(&self, column: u32) -> Result<Vector<S>> {
        NumericError::check_index("column", 1, self.column_size, column)?;
        Ok(Vector {
            data: (1..=self.row_size)
                .map(|r| self.cell(r, column).clone())
                .collect(),
        })
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> std::slice::Chunks<'_, S> {
        self.data.chunks(self.column_size as usize)
    }

    fn check_same_dimensions(&self, other: &Matrix<S>, op: &str) -> Result<()> {
        if self.row_size != other.row_size || self.column_size != other.column_size {
            Err(NumericError::invalid_argument(format!(
                "Cannot {} matrices of different dimensions: ({},{}) vs ({},{})",
                op, self.row_size, self.column_size, other.row_size, other.column_size
            )))
        } else {
            Ok(())
        }
    }

    fn check_square(&self, op: &str) -> Result<()> {
        if self.square() {
            Ok(())
        } else {
            Err(NumericError::illegal_state(format!(
                "The {} is only defined for square matrices, but the matrix is {}x{}",
                op, self.row_size, self.column_size
            )))
        }
    }

    pub fn add(&self, other: &Matrix<S>) -> Result<Matrix<S>> {
        self.check_same_dimensions(other, "add")?;
        Ok(Matrix::new_unchecked(
            self.row_size,
            self.column_size,
            self.data.iter().zip(&other.data).map(|(a, b)| a.add(b)).collect(),
        ))
    }

    pub fn subtract(&self, other: &Matrix<S>) -> Result<Matrix<S>> {
        self.check_same_dimensions(other, "subtract")?;
        Ok(Matrix::new_unchecked(
            self.row_size,
            self.column_size,
            self.data.iter().zip(&other.data).map(|(a, b)| a.sub(b)).collect(),
        ))
    }

    /// Compute the matrix product `self * other`.
    pub fn multiply(&self, other: &Matrix<S>) -> Result<Matrix<S>> {
        if self.column_size != other.row_size {
            return Err(NumericError::invalid_argument(format!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.row_size, self.column_size, other.row_size, other.column_size
            )));
        }

        let mut data = Vec::with_capacity(self.row_size as usize * other.column_size as usize);
        for i in 1..=self.row_size {
            for j in 1..=other.column_size {
                let mut sum = S::zero();
                for k in 1..=self.column_size {
                    sum.add_mul_assign(self.cell(i, k), other.cell(k, j));
                }
                data.push(sum);
            }
        }

        Ok(Matrix::new_unchecked(self.row_size, other.column_size, data))
    }

    /// Compute the matrix-vector product `self * v`.
    pub fn multiply_vector(&self, v: &Vector<S>) -> Result<Vector<S>> {
        if self.column_size != v.size() {
            return Err(NumericError::invalid_argument(format!(
                "Cannot multiply a ({},{}) matrix with a vector of size {}",
                self.row_size,
                self.column_size,
                v.size()
            )));
        }

        Ok(Vector {
            data: self
                .row_iter()
                .map(|row| {
                    let mut sum = S::zero();
                    for (a, b) in row.iter().zip(&v.data) {
                        sum.add_mul_assign(a, b);
                    }
                    sum
                })
                .collect(),
        })
    }

    /// Multiply every cell by `c`.
    pub fn scalar_multiply(&self, c: &S) -> Matrix<S> {
        self.map(|e| c.mul(e))
    }

    pub fn negate(&self) -> Matrix<S> {
        self.map(S::neg)
    }

    pub fn transpose(&self) -> Matrix<S> {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 1..=self.column_size {
            for r in 1..=self.row_size {
                data.push(self.cell(r, c).clone());
            }
        }
        Matrix::new_unchecked(self.column_size, self.row_size, data)
    }

    /// Compute `self^e` for a square matrix. `self^0` is the identity matrix.
    pub fn pow(&self, e: u32) -> Result<Matrix<S>> {
        self.check_square("power")?;

        let mut res = Matrix::identity_matrix(self.row_size)?;
        let mut base = self.clone();
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                res = res.multiply(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.multiply(&base)?;
            }
        }
        Ok(res)
    }

    /// Apply a function `f` to each cell of the matrix.
    pub fn map<T: Scalar>(&self, f: impl Fn(&S) -> T) -> Matrix<T> {
        Matrix::new_unchecked(
            self.row_size,
            self.column_size,
            self.data.iter().map(f).collect(),
        )
    }

    /// Compute the sum of the diagonal of a square matrix.
    pub fn trace(&self) -> Result<S> {
        self.check_square("trace")?;
        let mut res = S::zero();
        for i in 1..=self.row_size {
            res = res.add(self.cell(i, i));
        }
        Ok(res)
    }

    /// Compute the determinant of a square matrix with the Leibniz formula
    /// `sum_p sign(p) prod_i a(p(i), i)` over all permutations `p`.
    ///
    /// The expansion has `n!` terms, so it is only feasible for small matrices.
    #[instrument(level = "trace", skip_all, fields(n = self.row_size))]
    pub fn determinant(&self) -> Result<S> {
        self.check_square("determinant")?;

        let n = self.row_size;
        debug!("Expanding the determinant of a {}x{} matrix", n, n);

        let mut det = S::zero();
        let mut permutations = PermutationIterator::new(n as usize);
        while let Some(p) = permutations.next() {
            let mut term = S::one();
            for (i, &pi) in p.iter().enumerate() {
                term = term.mul(self.cell(pi as u32 + 1, i as u32 + 1));
                if term.is_zero() {
                    break;
                }
            }

            if term.is_zero() {
                continue;
            }

            if permutation_sign(p) < 0 {
                det = det.sub(&term);
            } else {
                det = det.add(&term);
            }
        }

        Ok(det)
    }

    /// Remove row `row` and column `column`. Rows below the removed row and columns to
    /// the right of the removed column move up by one index.
    pub fn minor(&self, row: u32, column: u32) -> Result<Matrix<S>> {
        if self.row_size == 1 || self.column_size == 1 {
            return Err(NumericError::illegal_state(format!(
                "The minor of a {}x{} matrix is undefined",
                self.row_size, self.column_size
            )));
        }
        NumericError::check_index("row", 1, self.row_size, row)?;
        NumericError::check_index("column", 1, self.column_size, column)?;

        let mut data =
            Vec::with_capacity((self.row_size - 1) as usize * (self.column_size - 1) as usize);
        for r in (1..=self.row_size).filter(|r| *r != row) {
            for c in (1..=self.column_size).filter(|c| *c != column) {
                data.push(self.cell(r, c).clone());
            }
        }

        Ok(Matrix::new_unchecked(
            self.row_size - 1,
            self.column_size - 1,
            data,
        ))
    }

    pub fn square(&self) -> bool {
        self.row_size == self.column_size
    }

    /// Return `true` iff the matrix is square and every cell below the main diagonal is zero.
    pub fn upper_triangular(&self) -> bool {
        self.square()
            && (1..=self.row_size).all(|r| (1..r).all(|c| self.cell(r, c).is_zero()))
    }

    /// Return `true` iff the matrix is square and every cell above the main diagonal is zero.
    pub fn lower_triangular(&self) -> bool {
        self.square()
            && (1..=self.row_size)
                .all(|r| (r + 1..=self.column_size).all(|c| self.cell(r, c).is_zero()))
    }

    pub fn triangular(&self) -> bool {
        self.upper_triangular() || self.lower_triangular()
    }

    pub fn diagonal(&self) -> bool {
        self.upper_triangular() && self.lower_triangular()
    }

    pub fn identity(&self) -> bool {
        self.diagonal() && (1..=self.row_size).all(|i| self.cell(i, i).is_one())
    }

    /// Return `true` iff the determinant is invertible in the ring of the scalars.
    /// For integer matrices this means that the determinant is `1` or `-1`.
    pub fn invertible(&self) -> bool {
        match self.determinant() {
            Ok(det) => det.is_invertible(),
            Err(_) => false,
        }
    }

    /// Return `true` iff the matrix is square and `a(r, c) = a(c, r)` for every cell.
    pub fn symmetric(&self) -> bool {
        self.square()
            && (1..=self.row_size)
                .all(|r| (1..r).all(|c| self.cell(r, c).sub(self.cell(c, r)).is_zero()))
    }

    /// Return `true` iff the matrix is square and `a(r, c) = -a(c, r)` for every cell.
    pub fn skew_symmetric(&self) -> bool {
        self.square()
            && (1..=self.row_size)
                .all(|r| (1..=r).all(|c| self.cell(r, c).add(self.cell(c, r)).is_zero()))
    }
}

impl<S: Modulus> Matrix<S> {
    /// Compute `sum |a(r, c)|^2` exactly.
    pub fn frobenius_norm_pow2(&self) -> S::Real {
        let mut norm = S::Real::zero();
        for d in &self.data {
            norm = norm.add(&d.abs_pow2());
        }
        norm
    }

    /// Approximate the Frobenius norm. Perfect squares give exact results.
    pub fn frobenius_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        self.frobenius_norm_pow2().sqrt(ctx)
    }
}

/// Return the largest value, or zero for an empty iterator.
fn max_value<T: OrderedScalar>(values: impl Iterator<Item = T>) -> T {
    values.fold(T::zero(), |max, v| {
        if v.value_cmp(&max).is_gt() {
            v
        } else {
            max
        }
    })
}

impl<S: OrderedScalar> Matrix<S> {
    /// Compute `max_c sum_r |a(r, c)|`.
    pub fn max_abs_column_sum_norm(&self) -> S {
        max_value((1..=self.column_size).map(|c| {
            let mut sum = S::zero();
            for r in 1..=self.row_size {
                sum = sum.add(&self.cell(r, c).abs());
            }
            sum
        }))
    }

    /// Compute `max_r sum_c |a(r, c)|`.
    pub fn max_abs_row_sum_norm(&self) -> S {
        max_value(self.row_iter().map(|row| {
            let mut sum = S::zero();
            for e in row {
                sum = sum.add(&e.abs());
            }
            sum
        }))
    }

    /// Compute `max |a(r, c)|`.
    pub fn max_norm(&self) -> S {
        max_value(self.data.iter().map(|e| e.abs()))
    }
}

impl<T: RealScalar> Matrix<Complex<T>> {
    fn abs_sum(&self, cells: impl Iterator<Item = (u32, u32)>, ctx: &SqrtContext) -> Result<Decimal> {
        let mut sum = Decimal::new(Default::default(), ctx.scale());
        for (r, c) in cells {
            sum = sum.add(&self.cell(r, c).abs(ctx)?);
        }
        Ok(sum)
    }

    /// Compute `max_c sum_r |a(r, c)|`, approximating every absolute value with `ctx`.
    pub fn max_abs_column_sum_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        let mut max = Decimal::new(Default::default(), ctx.scale());
        for c in 1..=self.column_size {
            let sum = self.abs_sum((1..=self.row_size).map(|r| (r, c)), ctx)?;
            max = max.max(sum);
        }
        Ok(max)
    }

    /// Compute `max_r sum_c |a(r, c)|`, approximating every absolute value with `ctx`.
    pub fn max_abs_row_sum_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        let mut max = Decimal::new(Default::default(), ctx.scale());
        for r in 1..=self.row_size {
            let sum = self.abs_sum((1..=self.column_size).map(|c| (r, c)), ctx)?;
            max = max.max(sum);
        }
        Ok(max)
    }

    /// Compute `max |a(r, c)|`, approximating the absolute value with `ctx`.
    pub fn max_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        max_value(self.data.iter().map(|e| e.abs_pow2())).sqrt(ctx)
    }
}

fn unwrap_or_panic<T>(r: Result<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl<S: Scalar> Add<&Matrix<S>> for &Matrix<S> {
    type Output = Matrix<S>;

    /// Add two matrices. Panics if the dimensions differ.
    fn add(self, rhs: &Matrix<S>) -> Self::Output {
        unwrap_or_panic(Matrix::add(self, rhs))
    }
}

impl<S: Scalar> Sub<&Matrix<S>> for &Matrix<S> {
    type Output = Matrix<S>;

    /// Subtract two matrices. Panics if the dimensions differ.
    fn sub(self, rhs: &Matrix<S>) -> Self::Output {
        unwrap_or_panic(self.subtract(rhs))
    }
}

impl<S: Scalar> Mul<&Matrix<S>> for &Matrix<S> {
    type Output = Matrix<S>;

    /// Multiply two matrices. Panics if the dimensions do not match.
    fn mul(self, rhs: &Matrix<S>) -> Self::Output {
        unwrap_or_panic(self.multiply(rhs))
    }
}

impl<S: Scalar> Mul<&Vector<S>> for &Matrix<S> {
    type Output = Vector<S>;

    /// Multiply a matrix with a vector. Panics if the dimensions do not match.
    fn mul(self, rhs: &Vector<S>) -> Self::Output {
        unwrap_or_panic(self.multiply_vector(rhs))
    }
}

impl<S: Scalar> Neg for &Matrix<S> {
    type Output = Matrix<S>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
