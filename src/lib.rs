pub mod matrix {
    pub mod determinant;
    pub mod error;
    pub mod matrix;
    pub mod matrix_config;
    pub mod matrix_ops;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

pub use matrix::error::{MatrixError, Result};
pub use matrix::matrix::{Element, Matrix};
pub use matrix::matrix_config::{DeterminantMethod, MatrixConfig};
pub use rings::fraction::Fraction;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn dense_matrix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
