use crate::error::Result;
use crate::matrix::dense::Matrix;
use crate::matrix::element::Element;
use crate::shaped::diagonal::Diagonal;
use crate::shaped::policy::{sealed, ShapePolicy};
use crate::shaped::shaped::Shaped;

/// The identity. Not [`Writable`](crate::shaped::policy::Writable) and not
/// [`Validated`](crate::shaped::policy::Validated): it can only be built by size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitShape;

pub type Unit<T> = Shaped<T, UnitShape>;

impl sealed::Sealed for UnitShape {}

impl ShapePolicy for UnitShape {
    const NAME: &'static str = "unit";

    fn allows(_row: usize, _col: usize) -> bool {
        false
    }

    fn determinant<T: Element>(_matrix: &Matrix<T>) -> Result<T> {
        Ok(T::one())
    }
}

impl<T: Element> Unit<T> {
    pub fn new(n: usize) -> Self {
        Shaped::new_unchecked(Matrix::from_diagonal(vec![T::one(); n]))
    }
}

impl<T: Element> From<Unit<T>> for Diagonal<T> {
    fn from(unit: Unit<T>) -> Diagonal<T> {
        Shaped::new_unchecked(unit.into_matrix())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
