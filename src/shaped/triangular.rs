use crate::error::{MatrixError, Result};
use crate::matrix::dense::Matrix;
use crate::matrix::element::Element;
use crate::shaped::policy::{first_violation, sealed, ShapePolicy, Validated, Writable};
use crate::shaped::shaped::Shaped;

/// Zero strictly below the diagonal. Rectangular shapes are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpperShape;

/// Zero strictly above the diagonal. Rectangular shapes are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LowerShape;

pub type UpperTriangular<T> = Shaped<T, UpperShape>;
pub type LowerTriangular<T> = Shaped<T, LowerShape>;

// Triangular matrices keep the general cofactor expansion for their determinant.
macro_rules! impl_triangular {
    ($shape:ty, $name:expr, |$row:ident, $col:ident| $allows:expr) => {
        impl sealed::Sealed for $shape {}

        impl ShapePolicy for $shape {
            const NAME: &'static str = $name;

            fn allows($row: usize, $col: usize) -> bool {
                $allows
            }

            fn determinant<T: Element>(matrix: &Matrix<T>) -> Result<T> {
                matrix.determinant()
            }
        }

        impl Validated for $shape {
            fn validate<T: Element>(matrix: &Matrix<T>) -> Result<()> {
                match first_violation::<T, Self>(matrix) {
                    Some((row, col)) => Err(MatrixError::shape_violation(row, col, Self::NAME)),
                    None => Ok(()),
                }
            }
        }

        impl Writable for $shape {}
    };
}

impl_triangular!(UpperShape, "upper triangular", |row, col| row <= col);
impl_triangular!(LowerShape, "lower triangular", |row, col| row >= col);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
