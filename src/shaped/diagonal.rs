use crate::error::{MatrixError, Result};
use crate::matrix::dense::Matrix;
use crate::matrix::element::Element;
use crate::shaped::policy::{first_violation, sealed, ShapePolicy, Validated, Writable};
use crate::shaped::shaped::Shaped;

/// Square, zero everywhere off the diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagonalShape;

pub type Diagonal<T> = Shaped<T, DiagonalShape>;

impl sealed::Sealed for DiagonalShape {}

impl ShapePolicy for DiagonalShape {
    const NAME: &'static str = "diagonal";

    fn allows(row: usize, col: usize) -> bool {
        row == col
    }

    /// Product of the diagonal, one for the empty matrix.
    fn determinant<T: Element>(matrix: &Matrix<T>) -> Result<T> {
        (0..matrix.rows()).try_fold(T::one(), |det, i| Ok(det * matrix.sel(i, i)?))
    }
}

impl Validated for DiagonalShape {
    fn validate<T: Element>(matrix: &Matrix<T>) -> Result<()> {
        if matrix.rows() != matrix.cols() {
            return Err(MatrixError::IncompatibleSize {
                op: "diagonal construction",
                lhs: matrix.size(),
                rhs: matrix.size(),
            });
        }
        match first_violation::<T, Self>(matrix) {
            Some((row, col)) => Err(MatrixError::WrongFormat {
                shape: Self::NAME,
                row,
                col,
            }),
            None => Ok(()),
        }
    }
}

impl Writable for DiagonalShape {}

impl<T: Element> Diagonal<T> {
    /// `values[i]` lands on `(i, i)`.
    pub fn from_diagonal(values: Vec<T>) -> Self {
        Shaped::new_unchecked(Matrix::from_diagonal(values))
    }

    pub fn identity(n: usize) -> Self {
        Self::from_diagonal(vec![T::one(); n])
    }

    pub fn at_diagonal(&mut self, i: usize) -> Result<&mut T> {
        self.at(i, i)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Bound;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_from_list() {
        let d = Diagonal::from_list(vec![vec![1, 0], vec![0, 2]]).unwrap();
        assert_eq!(d.size(), (2, 2));
        assert_eq!(d.sel(1, 1).unwrap(), 2);

        assert_eq!(
            Diagonal::from_list(vec![vec![1, 1], vec![0, 2]]).unwrap_err(),
            MatrixError::WrongFormat {
                shape: "diagonal",
                row: 0,
                col: 1
            }
        );
        assert!(matches!(
            Diagonal::from_list(vec![vec![1, 0, 0], vec![0, 2, 0]]),
            Err(MatrixError::IncompatibleSize { .. })
        ));
        assert!(matches!(
            Diagonal::from_list(vec![vec![1, 0], vec![0]]),
            Err(MatrixError::IncorrectInitialVector { .. })
        ));

        let m = Matrix::from_list(vec![vec![3, 0], vec![0, 4]]).unwrap();
        let d: Diagonal<i32> = m.clone().try_into().unwrap();
        assert_eq!(d.as_matrix(), &m);
    }

    #[test]
    fn test_from_diagonal() {
        let d = Diagonal::from_diagonal(vec![1, 2, 3]);
        assert_eq!(
            d.to_list(),
            vec![vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 3]]
        );

        let id = Diagonal::<i64>::identity(3);
        assert_eq!(
            id.to_list(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_restricted_writes() {
        let mut d = Diagonal::from_diagonal(vec![1, 2, 3]);
        *d.at(1, 1).unwrap() = 20;
        *d.at_diagonal(2).unwrap() = 30;
        d.checked_write(0, 0, 10).unwrap();
        assert_eq!(
            d.to_list(),
            vec![vec![10, 0, 0], vec![0, 20, 0], vec![0, 0, 30]]
        );

        assert_eq!(
            d.at(0, 1).unwrap_err(),
            MatrixError::OutOfRange {
                row: 0,
                col: 1,
                bound: Bound::Shape("diagonal")
            }
        );
        assert!(d.checked_write(2, 1, 5).is_err());
        assert_eq!(
            d.at_diagonal(3).unwrap_err(),
            MatrixError::OutOfRange {
                row: 3,
                col: 3,
                bound: Bound::Rows(3)
            }
        );
        assert!(matches!(
            d.sel(0, 3),
            Err(MatrixError::OutOfRange { .. })
        ));

        assert!(d.is_writable(1, 1));
        assert!(!d.is_writable(1, 2));
        assert!(!d.is_writable(3, 3));
        assert_eq!(d.sel(2, 1).unwrap(), 0);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Diagonal::from_diagonal(vec![2, -3, 4]).determinant().unwrap(), -24);
        assert_eq!(Diagonal::<i32>::from_diagonal(vec![]).determinant().unwrap(), 1);

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            let n = rng.gen_range(1..6);
            let values: Vec<i64> = (0..n).map(|_| rng.gen_range(-9..10)).collect();
            let d = Diagonal::from_diagonal(values.clone());

            let product: i64 = values.iter().product();
            assert_eq!(d.determinant().unwrap(), product);
            assert_eq!(d.as_matrix().determinant().unwrap(), product);
        }
    }

    #[test]
    fn test_matrix_ops_through_deref() {
        let d = Diagonal::from_diagonal(vec![2, 3]);
        let m = Matrix::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();

        assert_eq!(d.dot(&m).unwrap().to_list(), vec![vec![2, 4], vec![9, 12]]);
        assert_eq!((&*d + &m).unwrap().to_list(), vec![vec![3, 2], vec![3, 7]]);
        assert_eq!(d.transpose(), *d.as_matrix());
        assert_eq!(d.to_string(), "[[2, 0],\n[0, 3]]");
    }
}
