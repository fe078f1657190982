use log::debug;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::error::{MatrixError, Result};
use crate::matrix::dense::Matrix;
use crate::matrix::display::render;
use crate::matrix::element::Element;
use crate::matrix::matrix::MatrixRead;
use crate::shaped::policy::{ShapePolicy, Validated, Writable};

/// A dense matrix whose cells obey the structural rule `P`.
///
/// The rule is checked once when the value is built. Afterwards only the
/// cells `P` allows can be written, so reads never re-validate. There is no
/// `DerefMut`: mutation goes through [`Shaped::at`] and
/// [`Shaped::checked_write`], which only exist for [`Writable`] policies.
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped<T, P> {
    matrix: Matrix<T>,
    policy: PhantomData<P>,
}

impl<T: Element, P: ShapePolicy> Shaped<T, P> {
    pub(crate) fn new_unchecked(matrix: Matrix<T>) -> Self {
        Shaped {
            matrix,
            policy: PhantomData,
        }
    }

    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }

    pub fn determinant(&self) -> Result<T> {
        debug!("{} determinant of a {:?} matrix", P::NAME, self.matrix.size());
        P::determinant(&self.matrix)
    }

    /// Whether `(row, col)` is inside the matrix and writable under `P`.
    pub fn is_writable(&self, row: usize, col: usize) -> bool {
        let (rows, cols) = self.matrix.size();
        row < rows && col < cols && P::allows(row, col)
    }
}

impl<T: Element, P: Validated> Shaped<T, P> {
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        Self::try_from_matrix(Matrix::from_list(lines)?)
    }

    pub fn try_from_matrix(matrix: Matrix<T>) -> Result<Self> {
        if let Err(err) = P::validate(&matrix) {
            debug!("rejecting {} matrix: {err}", P::NAME);
            return Err(err);
        }
        Ok(Self::new_unchecked(matrix))
    }
}

impl<T: Element, P: Writable> Shaped<T, P> {
    /// Write access to a cell the structure allows.
    ///
    /// The structural rule is checked before the bounds.
    pub fn at(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if !P::allows(row, col) {
            return Err(MatrixError::shape_violation(row, col, P::NAME));
        }
        self.matrix.at(row, col)
    }

    pub fn checked_write(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at(row, col)? = value;
        Ok(())
    }
}

impl<T: Element, P: Validated> TryFrom<Matrix<T>> for Shaped<T, P> {
    type Error = MatrixError;

    fn try_from(matrix: Matrix<T>) -> Result<Self> {
        Self::try_from_matrix(matrix)
    }
}

impl<T, P> Deref for Shaped<T, P> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.matrix
    }
}

impl<T: Element, P: ShapePolicy> MatrixRead<T> for Shaped<T, P> {
    fn size(&self) -> (usize, usize) {
        self.matrix.size()
    }

    fn sel(&self, row: usize, col: usize) -> Result<T> {
        self.matrix.sel(row, col)
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.matrix.to_list()
    }
}

impl<T: Element + fmt::Display, P: ShapePolicy> fmt::Display for Shaped<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}
