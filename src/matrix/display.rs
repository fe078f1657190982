use itertools::Itertools;
use std::fmt;

use crate::matrix::dense::Matrix;
use crate::matrix::element::Element;
use crate::matrix::matrix::MatrixRead;

/// Writes `[[a, b],\n[c, d]]`, reading the matrix through `size` and `sel` only.
pub fn render<T, M>(matrix: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
    M: MatrixRead<T> + ?Sized,
{
    let (rows, cols) = matrix.size();
    if rows == 0 {
        return write!(f, "[]");
    }

    write!(f, "[")?;
    for i in 0..rows {
        let row: Vec<T> = (0..cols)
            .map(|j| matrix.sel(i, j))
            .collect::<Result<_, _>>()
            .map_err(|_| fmt::Error)?;
        write!(f, "[{}", row.iter().join(", "))?;
        if i + 1 < rows {
            writeln!(f, "],")?;
        } else {
            write!(f, "]]")?;
        }
    }
    Ok(())
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = Matrix::from_list(vec![vec![5, 5, 1], vec![3, 5, 7], vec![89, 12, 2]]).unwrap();
        assert_eq!(m.to_string(), "[[5, 5, 1],\n[3, 5, 7],\n[89, 12, 2]]");

        assert_eq!(Matrix::<i32>::default().to_string(), "[[0]]");
        assert_eq!(Matrix::from_row(vec![1.5, -2.0]).to_string(), "[[1.5, -2]]");
        assert_eq!(Matrix::<i32>::from_list(vec![]).unwrap().to_string(), "[]");
        assert_eq!(Matrix::<i32>::new(2, 0).to_string(), "[[],\n[]]");
    }
}
