use crate::matrix::error::{MatrixError, Result};
use crate::matrix::matrix::{Element, Matrix};
use std::cell::OnceCell;
use std::ops;

impl<T: Element> Matrix<T> {
    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
            determinant: OnceCell::new(),
        }
    }

    /// Multiplies every element by `value`.
    pub fn scale(&self, value: T) -> Matrix<T> {
        self.map(|x| x * value.clone())
    }

    /// Divides every element by `value`.
    pub fn div_scalar(&self, value: T) -> Result<Matrix<T>> {
        if value.is_zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map(|x| x / value.clone()))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().cloned().map(f).collect(),
            determinant: OnceCell::new(),
        }
    }

    fn zip_with(
        &self,
        rhs: &Matrix<T>,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(a.to_owned(), b.to_owned()))
                .collect(),
            determinant: OnceCell::new(),
        })
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(rhs, "addition", |a, b| a + b)
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(rhs, "subtraction", |a, b| a - b)
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiplication",
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
            determinant: OnceCell::new(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
