use log::{debug, trace};
use std::ops;

use crate::error::{Bound, MatrixError, Result};
use crate::matrix::element::Element;
use crate::matrix::matrix::MatrixRead;

/// Dense, row-major matrix. The shape is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Builds a matrix from its rows. Every row must have the length of the first one.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Matrix<T>> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.len());

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            debug!("rejecting ragged input: row {row} has {} elements", line.len());
            return Err(MatrixError::IncorrectInitialVector {
                row,
                expected: cols,
                got: line.len(),
            });
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// A single-row matrix.
    pub fn from_row(values: Vec<T>) -> Matrix<T> {
        Matrix {
            rows: 1,
            cols: values.len(),
            cells: values,
        }
    }

    pub fn new(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            cells: (0..(rows * cols)).map(|_| T::zero()).collect(),
        }
    }

    pub fn square(n: usize) -> Matrix<T> {
        Matrix::new(n, n)
    }

    pub(crate) fn from_diagonal(values: Vec<T>) -> Matrix<T> {
        let n = values.len();
        let mut matrix = Matrix::square(n);
        for (i, value) in values.into_iter().enumerate() {
            matrix.cells[i * n + i] = value;
        }
        matrix
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                bound: Bound::Rows(self.rows),
            });
        }
        if col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                bound: Bound::Columns(self.cols),
            });
        }
        Ok(row * self.cols + col)
    }

    #[inline(always)]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.cols + col]
    }

    /// Every cell with its `(row, col)` position, row-major.
    pub(crate) fn indexed(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / cols, idx % cols), cell))
    }

    fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Write access to one cell.
    pub fn at(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.cells[offset])
    }

    pub fn sel(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.offset(row, col)?;
        Ok(self.cells[offset].clone())
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.get(r, c).clone()))
                .collect(),
        }
    }

    /// Multiplies every cell by `k`, on the right.
    pub fn scale(&self, k: T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|a| a.clone() * k.clone()).collect(),
        }
    }

    fn check_same_size(&self, rhs: &Matrix<T>, op: &'static str) -> Result<()> {
        if self.size() != rhs.size() {
            return Err(MatrixError::IncompatibleSize {
                op,
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        Ok(())
    }

    /// Standard matrix product.
    pub fn dot(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::IncompatibleSize {
                op: "dot",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols).fold(T::zero(), |acc, k| {
                            acc + self.get(i, k).clone() * rhs.get(k, j).clone()
                        })
                    })
                })
                .collect(),
        })
    }

    /// Elementwise product. Not to be confused with [`Matrix::dot`].
    pub fn hadamard(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_size(rhs, "hadamard product")?;

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.clone() * b.clone())
                .collect(),
        })
    }

    /// Laplace expansion along the first row.
    ///
    /// The empty matrix has determinant zero. Runs in O(n!), every level of the
    /// recursion allocates its minors.
    pub fn determinant(&self) -> Result<T> {
        if self.rows != self.cols {
            return Err(MatrixError::IncompatibleSize {
                op: "determinant",
                lhs: self.size(),
                rhs: self.size(),
            });
        }
        debug!("cofactor determinant of a {0}x{0} matrix", self.rows);
        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> T {
        match self.rows {
            0 => T::zero(),
            1 => self.cells[0].clone(),
            n => (0..n).fold(T::zero(), |det, i| {
                trace!("expanding column {i} of a {n}x{n} matrix");
                let sign = if i % 2 == 0 { T::one() } else { -T::one() };
                let minor = self.minor(0, i);
                det + sign * self.get(0, i).clone() * minor.cofactor_expansion()
            }),
        }
    }

    /// The submatrix without `row` and `col`, remaining cells kept in order.
    fn minor(&self, row: usize, col: usize) -> Matrix<T> {
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: self
                .cells
                .iter()
                .enumerate()
                .filter(|(idx, _)| idx / self.cols != row && idx % self.cols != col)
                .map(|(_, cell)| cell.clone())
                .collect(),
        }
    }
}

impl<T: Element> Default for Matrix<T> {
    fn default() -> Matrix<T> {
        Matrix::new(1, 1)
    }
}

impl<T: Element> MatrixRead<T> for Matrix<T> {
    fn size(&self) -> (usize, usize) {
        Matrix::size(self)
    }

    fn sel(&self, row: usize, col: usize) -> Result<T> {
        Matrix::sel(self, row, col)
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        Matrix::to_list(self)
    }
}

/// Scalar on the left. Same cells as [`Matrix::scale`].
pub fn scalar_mul<T: Element>(k: T, matrix: &Matrix<T>) -> Matrix<T> {
    matrix.scale(k)
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_size(rhs, "addition")?;

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        })
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self + &rhs.scale(-T::one())
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.hadamard(rhs)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl ops::Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, k: $t) -> Matrix<$t> {
                    self.scale(k)
                }
            }

            impl ops::Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, matrix: &Matrix<$t>) -> Matrix<$t> {
                    scalar_mul(self, matrix)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, f32, f64);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
