//! Python bindings for `Matrix<f64>`, enabled with the `python` feature.

use crate::matrix::error::MatrixError;
use crate::matrix::matrix::Matrix;
use pyo3::exceptions::{PyIndexError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            MatrixError::DivisionByZero => PyZeroDivisionError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(name = "Matrix", unsendable)]
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
    #[new]
    #[pyo3(signature = (rows = 0, cols = 0))]
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix::new(rows, cols).into()
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> Self {
        Matrix::from_list(lines).into()
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> Self {
        Matrix::identity(n).into()
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    pub fn get_element(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.inner.get_element(row, col)?)
    }

    pub fn set_element(&mut self, row: usize, col: usize, value: f64) -> PyResult<()> {
        Ok(self.inner.set_element(row, col, value)?)
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner * &rhs.inner)?.into())
    }

    pub fn __truediv__(&self, value: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.div_scalar(value)?.into())
    }

    pub fn scale(&self, value: f64) -> PyMatrix {
        self.inner.scale(value).into()
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.row_count()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.column_count()
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    pub fn is_symmetric(&self) -> bool {
        self.inner.is_symmetric()
    }

    pub fn determinant(&self) -> f64 {
        self.inner.determinant()
    }

    pub fn adjugate(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.adjugate()?.into())
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    #[pyo3(signature = (seed = None))]
    pub fn fill_random_values(&mut self, seed: Option<u64>) -> PyResult<()> {
        match seed {
            Some(seed) => self.inner.fill_random_values_seeded(seed)?,
            None => self.inner.fill_random_values()?,
        }
        Ok(())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __eq__(&self, rhs: &PyMatrix) -> bool {
        self.inner == rhs.inner
    }
}
