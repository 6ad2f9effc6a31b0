//! Determinant, minors, cofactors and inversion.
//!
//! The reference algorithm is cofactor expansion along the first row. It is exact for exact
//! element types but runs in O(n!) time, so it is only practical for small matrices. The
//! fraction-free (Bareiss) elimination is O(n³) and stays exact for integers and fractions;
//! it is selected through [`MatrixConfig::elimination_threshold`].

use itertools::iproduct;
use log::{debug, trace, warn};

use crate::matrix::error::{MatrixError, Result};
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::matrix_config::{DeterminantMethod, MatrixConfig};
use std::cell::OnceCell;

// (-1)^k * value
fn alternate<T: Element>(k: usize, value: T) -> T {
    if k % 2 == 0 {
        value
    } else {
        T::zero() - value
    }
}

impl<T: Element> Matrix<T> {
    /// Determinant by cofactor expansion.
    ///
    /// Non-square matrices yield zero, as does the 0x0 matrix. The value is cached until the
    /// matrix is mutated.
    pub fn determinant(&self) -> T {
        self.determinant_with(&MatrixConfig::default())
    }

    /// Determinant using the algorithm selected by `config` for this size.
    ///
    /// Shares the cache with [`Matrix::determinant`]: whichever runs first stores the value.
    pub fn determinant_with(&self, config: &MatrixConfig) -> T {
        if !self.is_square() {
            trace!(
                "determinant of a non-square {}x{} matrix is zero",
                self.rows,
                self.cols
            );
            return T::zero();
        }

        if let Some(det) = self.determinant.get() {
            trace!("determinant cache hit for {}x{} matrix", self.rows, self.cols);
            return det.clone();
        }

        let n = self.rows;
        let det = match config.determinant_method(n) {
            DeterminantMethod::CofactorExpansion => {
                if n >= config.cofactor_warn_size {
                    warn!("cofactor expansion on a {}x{} matrix takes O(n!) time", n, n);
                }
                debug!("computing {}x{} determinant by cofactor expansion", n, n);
                self.cofactor_expansion()
            }
            DeterminantMethod::Bareiss => {
                debug!("computing {}x{} determinant by Bareiss elimination", n, n);
                self.bareiss()
            }
        };

        let _ = self.determinant.set(det.clone());
        det
    }

    /// Determinant by fraction-free elimination, bypassing the cache.
    pub fn determinant_bareiss(&self) -> T {
        if !self.is_square() {
            return T::zero();
        }
        self.bareiss()
    }

    pub fn is_determinant_cached(&self) -> bool {
        self.determinant.get().is_some()
    }

    /// Determinant of the submatrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        self.require_square("minor")?;
        self.check_bounds(row, col)?;
        Ok(self.submatrix(row, col).determinant())
    }

    /// Matrix of signed minors, `(-1)^(i+j) * minor(i, j)`.
    ///
    /// Defined for every square matrix, singular or not. A 1x1 matrix has the cofactor
    /// matrix `[[1]]`.
    pub fn cofactor_matrix(&self) -> Result<Matrix<T>> {
        self.require_square("cofactor matrix")?;
        let n = self.rows;
        if n == 1 {
            return Ok(Matrix::identity(1));
        }

        Ok(Matrix {
            rows: n,
            cols: n,
            cells: iproduct!(0..n, 0..n)
                .map(|(i, j)| alternate(i + j, self.submatrix(i, j).cofactor_expansion()))
                .collect(),
            determinant: OnceCell::new(),
        })
    }

    /// Cofactor matrix of a non-singular matrix, *not* transposed.
    ///
    /// Kept for callers that expect the pre-transpose convention; use [`Matrix::adjugate`]
    /// for the classical adjoint.
    pub fn adjoint(&self) -> Result<Matrix<T>> {
        self.require_square("adjoint")?;
        if self.determinant().is_zero() {
            return Err(MatrixError::SingularMatrix);
        }
        self.cofactor_matrix()
    }

    /// Transpose of the cofactor matrix, so that `A * adj(A) = det(A) * I`.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.require_square("inverse")?;
        let det = self.determinant();
        if det.is_zero() {
            return Err(MatrixError::SingularMatrix);
        }
        debug!("inverting {}x{} matrix", self.rows, self.cols);
        self.adjugate()?.div_scalar(det)
    }

    fn require_square(&self, op: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    // Copy without the given row and column, remaining cells keep their order.
    fn submatrix(&self, row: usize, col: usize) -> Matrix<T> {
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: iproduct!(0..self.rows, 0..self.cols)
                .filter(|&(i, j)| i != row && j != col)
                .map(|(i, j)| self.at(i, j))
                .collect(),
            determinant: OnceCell::new(),
        }
    }

    // Expects a square matrix.
    fn cofactor_expansion(&self) -> T {
        match self.rows {
            0 => T::zero(),
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            n => (0..n)
                .map(|j| alternate(j, self.at(0, j) * self.submatrix(0, j).cofactor_expansion()))
                .fold(T::zero(), |acc, x| acc + x),
        }
    }

    // Expects a square matrix. Every division is exact: each pivot divides the next
    // round's 2x2 cross products.
    fn bareiss(&self) -> T {
        let n = self.rows;
        if n == 0 {
            return T::zero();
        }

        let mut mat = self.cells.clone();
        let mut negate = false;
        let mut previous_pivot = T::one();

        for k in 0..n - 1 {
            if mat[k * n + k].is_zero() {
                let Some(pivot_row) = (k + 1..n).find(|&r| !mat[r * n + k].is_zero()) else {
                    return T::zero();
                };
                for c in 0..n {
                    mat.swap(k * n + c, pivot_row * n + c);
                }
                negate = !negate;
            }

            let pivot = mat[k * n + k].clone();
            for i in k + 1..n {
                let factor = mat[i * n + k].clone();
                for j in k + 1..n {
                    let a = mat[i * n + j].clone() * pivot.clone();
                    let b = mat[k * n + j].clone() * factor.clone();
                    mat[i * n + j] = (a - b) / previous_pivot.clone();
                }
            }
            previous_pivot = pivot;
        }

        let det = mat[n * n - 1].clone();
        if negate {
            T::zero() - det
        } else {
            det
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_traits::Zero;
    use proptest::prelude::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_identity(m: &Matrix<f64>) {
        for i in 0..m.row_count() {
            for j in 0..m.column_count() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m[(i, j)], expected, epsilon = 1e-9);
            }
        }
    }

    fn square_int_matrix(max_dim: usize) -> impl Strategy<Value = Matrix<i64>> {
        (1..=max_dim).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(-9i64..=9, n), n)
                .prop_map(Matrix::from_list)
        })
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(Matrix::from_list(vec![vec![7]]).determinant(), 7);
        assert_eq!(Matrix::from_list(vec![vec![1, 2], vec![3, 4]]).determinant(), -2);

        let m = Matrix::from_list(vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]]);
        assert_eq!(m.determinant(), 49);

        let m = Matrix::from_list(vec![
            vec![1, 0, 2, -1],
            vec![3, 0, 0, 5],
            vec![2, 1, 4, -3],
            vec![1, 0, 5, 0],
        ]);
        assert_eq!(m.determinant(), 30);
    }

    #[test]
    fn test_determinant_degraded_cases() {
        let m = Matrix::from_list(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(m.determinant(), 0);
        assert!(!m.is_determinant_cached());

        let empty = Matrix::<i64>::empty();
        assert_eq!(empty.determinant(), 0);
        assert_eq!(empty.determinant_bareiss(), 0);
        assert_eq!(m.determinant_bareiss(), 0);
    }

    #[test]
    fn test_determinant_cache() {
        init_logger();
        let mut m = Matrix::from_list(vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]]);
        assert!(!m.is_determinant_cached());

        let first = m.determinant();
        assert!(m.is_determinant_cached());
        assert_eq!(m.determinant(), first);
        assert_eq!(first, m.cofactor_expansion());

        // Corrupt the cells behind the cache's back: the cached value is still served.
        m.cells[0] = 100;
        assert_eq!(m.determinant(), first);

        // Clones copy the cache, public mutations drop it.
        let copy = m.clone();
        assert!(copy.is_determinant_cached());

        m.set_element(0, 0, 2).unwrap();
        assert!(!m.is_determinant_cached());
        assert_eq!(m.determinant(), 49);

        m.recreate(3, 3);
        assert!(!m.is_determinant_cached());
        assert_eq!(m.determinant(), 0);

        m.clear();
        assert!(!m.is_determinant_cached());
    }

    #[test]
    fn test_set_element_invalidates_cache() {
        let mut m = Matrix::from_list(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.determinant(), -2);
        m.set_element(1, 1, 10).unwrap();
        assert_eq!(m.determinant(), 4);

        m.fill_random_values_seeded(3).unwrap();
        assert!(!m.is_determinant_cached());
    }

    #[test]
    fn test_determinant_with_config() {
        init_logger();
        let m = Matrix::from_list(vec![
            vec![1, 0, 2, -1],
            vec![3, 0, 0, 5],
            vec![2, 1, 4, -3],
            vec![1, 0, 5, 0],
        ]);
        let config = MatrixConfig::new().with_elimination_threshold(3);
        assert_eq!(m.determinant_with(&config), 30);
        assert!(m.is_determinant_cached());
        assert_eq!(m.determinant(), 30);

        let config = MatrixConfig::new().with_cofactor_warn_size(2);
        assert_eq!(Matrix::from_list(vec![vec![1, 2], vec![3, 4]]).determinant_with(&config), -2);
    }

    #[test]
    fn test_bareiss_pivoting() {
        // Zero leading entry forces a row swap
        let m = Matrix::from_list(vec![vec![0, 2, 1], vec![1, 1, 1], vec![2, 0, 3]]);
        assert_eq!(m.determinant_bareiss(), m.determinant());
        assert_eq!(m.determinant(), -4);

        let singular = Matrix::from_list(vec![vec![0, 1, 2], vec![0, 3, 4], vec![0, 5, 6]]);
        assert_eq!(singular.determinant_bareiss(), 0);
    }

    #[test]
    fn test_minor() {
        let m = Matrix::from_list(vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]]);
        assert_eq!(m.minor(0, 0), Ok(4));
        assert_eq!(m.minor(1, 2), Ok(11));
        assert_eq!(
            m.minor(3, 0),
            Err(MatrixError::IndexOutOfRange {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(
            Matrix::<i64>::new(2, 3).minor(0, 0),
            Err(MatrixError::NotSquare {
                op: "minor",
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn test_cofactor_and_adjugate() {
        let m = Matrix::from_list(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.cofactor_matrix().unwrap().to_list(), vec![vec![4, -3], vec![-2, 1]]);
        assert_eq!(m.adjoint().unwrap(), m.cofactor_matrix().unwrap());
        assert_eq!(m.adjugate().unwrap().to_list(), vec![vec![4, -2], vec![-3, 1]]);

        let m = Matrix::from_list(vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]]);
        let product = (&m * &m.adjugate().unwrap()).unwrap();
        assert_eq!(product, Matrix::identity(3).scale(m.determinant()));

        assert_eq!(Matrix::from_list(vec![vec![5]]).cofactor_matrix().unwrap().to_list(), vec![vec![1]]);
    }

    #[test]
    fn test_singular_matrix() {
        let m = Matrix::from_list(vec![vec![1, 2], vec![2, 4]]);
        assert_eq!(m.determinant(), 0);
        assert_eq!(m.adjoint(), Err(MatrixError::SingularMatrix));
        assert_eq!(m.inverse(), Err(MatrixError::SingularMatrix));

        // The adjugate of a singular matrix is still well defined
        let adj = m.adjugate().unwrap();
        assert_eq!((&m * &adj).unwrap(), Matrix::new(2, 2));

        assert_eq!(Matrix::<f64>::empty().inverse(), Err(MatrixError::SingularMatrix));
    }

    #[test]
    fn test_non_square_inverse() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(
            m.inverse(),
            Err(MatrixError::NotSquare {
                op: "inverse",
                rows: 2,
                cols: 3
            })
        );
        assert!(m.adjoint().is_err());
        assert!(m.adjugate().is_err());
    }

    #[test]
    fn test_inverse_float() {
        init_logger();
        let a = Matrix::from_list(vec![vec![4.0, 7.0], vec![2.0, 6.0]]);
        assert_abs_diff_eq!(a.determinant(), 10.0, epsilon = 1e-12);

        let inv = a.inverse().unwrap();
        assert_abs_diff_eq!(inv[(0, 0)], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(0, 1)], -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(1, 0)], -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(1, 1)], 0.4, epsilon = 1e-12);

        assert_identity(&(&inv * &a).unwrap());
        assert_identity(&(&a * &inv).unwrap());

        let b = Matrix::from_list(vec![vec![2.0, -3.0, 1.0], vec![2.0, 0.0, -1.0], vec![1.0, 4.0, 5.0]]);
        assert_identity(&(&b.inverse().unwrap() * &b).unwrap());

        let c = Matrix::from_list(vec![vec![0.5]]);
        assert_abs_diff_eq!(c.inverse().unwrap()[(0, 0)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_random() {
        let m = Matrix::<f64>::random(4, 4, &MatrixConfig::new().with_random_seed(11)).unwrap();
        if !m.determinant().is_zero() {
            assert_identity(&(&m.inverse().unwrap() * &m).unwrap());
        }
    }

    proptest! {
        #[test]
        fn prop_bareiss_matches_expansion(m in square_int_matrix(5)) {
            prop_assert_eq!(m.determinant_bareiss(), m.determinant());
        }

        #[test]
        fn prop_determinant_of_transpose(m in square_int_matrix(4)) {
            prop_assert_eq!(m.transpose().determinant(), m.determinant());
        }

        #[test]
        fn prop_adjugate_identity(m in square_int_matrix(4)) {
            let product = (&m * &m.adjugate().unwrap()).unwrap();
            let n = m.row_count();
            prop_assert_eq!(product, Matrix::identity(n).scale(m.determinant()));
        }
    }
}
