use crate::error::Result;

/// Read-only surface shared by the dense matrix and every shaped variant.
pub trait MatrixRead<T> {
    fn size(&self) -> (usize, usize);
    fn sel(&self, row: usize, col: usize) -> Result<T>;
    fn to_list(&self) -> Vec<Vec<T>>;
}
