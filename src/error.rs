use std::fmt;

/// The limit an index was checked against when an access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Row index was not below the row count.
    Rows(usize),
    /// Column index was not below the column count.
    Columns(usize),
    /// The cell exists but the named shape forbids it.
    Shape(&'static str),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Rows(rows) => write!(f, "row bound {rows}"),
            Bound::Columns(cols) => write!(f, "column bound {cols}"),
            Bound::Shape(shape) => write!(f, "the {shape} structure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("incorrect initial vector: row {row} has {got} elements, expected {expected}")]
    IncorrectInitialVector {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Plain bounds violations and structurally forbidden cells share this kind;
    /// `bound` tells them apart.
    #[error("cell ({row}, {col}) is out of range of {bound}")]
    OutOfRange { row: usize, col: usize, bound: Bound },

    /// For operations on a single matrix, `rhs` repeats `lhs`.
    #[error("incompatible sizes for {op}: {lhs:?} and {rhs:?}")]
    IncompatibleSize {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("wrong format for a {shape} matrix: cell ({row}, {col}) must be zero")]
    WrongFormat {
        shape: &'static str,
        row: usize,
        col: usize,
    },
}

impl MatrixError {
    pub(crate) fn shape_violation(row: usize, col: usize, shape: &'static str) -> Self {
        MatrixError::OutOfRange {
            row,
            col,
            bound: Bound::Shape(shape),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
