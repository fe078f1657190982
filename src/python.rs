use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::matrix::dense::Matrix;
use crate::shaped::diagonal::Diagonal;
use crate::shaped::unit::Unit;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::OutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: Matrix<f64>,
}

impl From<Matrix<f64>> for PyMatrix {
    fn from(inner: Matrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(Matrix::from_list(lines)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn sel(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.inner.sel(row, col)?)
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    /// Hadamard product with a matrix, or scaling by a number.
    pub fn __mul__(&self, rhs: &Bound<PyAny>) -> PyResult<PyMatrix> {
        if let Ok(k) = rhs.extract::<f64>() {
            return Ok(self.inner.scale(k).into());
        }
        let rhs = rhs.extract::<PyRef<PyMatrix>>()?;
        Ok((&self.inner * &rhs.inner)?.into())
    }

    pub fn __rmul__(&self, k: f64) -> PyMatrix {
        crate::matrix::dense::scalar_mul(k, &self.inner).into()
    }

    pub fn dot(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.dot(&rhs.inner)?.into())
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyfunction]
pub fn unit(n: usize) -> PyMatrix {
    Unit::<f64>::new(n).into_matrix().into()
}

#[pyfunction]
pub fn diagonal(values: Vec<f64>) -> PyMatrix {
    Diagonal::from_diagonal(values).into_matrix().into()
}

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linear(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    m.add_function(wrap_pyfunction!(unit, m)?)?;
    m.add_function(wrap_pyfunction!(diagonal, m)?)?;
    Ok(())
}
