use crate::error::Result;
use crate::matrix::dense::Matrix;
use crate::matrix::element::Element;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Structural rule attached to a [`Shaped`](crate::shaped::shaped::Shaped) matrix.
///
/// The set of policies is closed: diagonal, unit, upper and lower triangular.
pub trait ShapePolicy: sealed::Sealed {
    const NAME: &'static str;

    /// Whether writing any value to `(row, col)` keeps the invariant.
    fn allows(row: usize, col: usize) -> bool;

    fn determinant<T: Element>(matrix: &Matrix<T>) -> Result<T>;
}

/// Policies that can check arbitrary data at construction.
pub trait Validated: ShapePolicy {
    fn validate<T: Element>(matrix: &Matrix<T>) -> Result<()>;
}

/// Policies that expose a write surface.
pub trait Writable: ShapePolicy {}

/// First non-zero cell the policy `P` does not allow, row-major.
pub(crate) fn first_violation<T: Element, P: ShapePolicy>(
    matrix: &Matrix<T>,
) -> Option<(usize, usize)> {
    matrix
        .indexed()
        .find(|&((row, col), cell)| !P::allows(row, col) && *cell != T::zero())
        .map(|(pos, _)| pos)
}
