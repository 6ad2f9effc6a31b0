use itertools::iproduct;
use num_traits::{FromPrimitive, One, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::error::{MatrixError, Result};
use crate::matrix::matrix_config::MatrixConfig;
use std::cell::OnceCell;
use std::fmt;
use std::io;
use std::io::Write;
use std::ops::{Add, Div, Index, Mul, Sub};

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Dense row-major matrix.
///
/// A matrix is either fully allocated with `rows * cols` well-defined cells, or empty (0x0).
/// The determinant is cached after its first computation; every mutation through the
/// public API drops the cached value.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
    pub(crate) determinant: OnceCell<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            determinant: OnceCell::new(),
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Zero-filled `rows x cols` matrix. Either dimension may be zero.
    pub fn new(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
            determinant: OnceCell::new(),
        }
    }

    /// Empty 0x0 matrix.
    pub fn empty() -> Matrix<T> {
        Matrix::default()
    }

    /// Builds a matrix from rows; shorter rows are padded with zeros.
    pub fn from_list(lines: Vec<Vec<T>>) -> Matrix<T> {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        Matrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let padding = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(T::zero(), padding))
                })
                .collect(),
            determinant: OnceCell::new(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn identity(n: usize) -> Matrix<T> {
        Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
            determinant: OnceCell::new(),
        }
    }

    /// Releases the storage and leaves the matrix empty. No-op on an empty matrix.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells = Vec::new();
        self.invalidate_determinant();
    }

    /// Discards the contents and reinitializes to a zero-filled `rows x cols` matrix.
    pub fn recreate(&mut self, rows: usize, cols: usize) {
        *self = Matrix::new(rows, cols);
    }

    pub fn get_element(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.at(row, col))
    }

    /// Overwrites one cell. Invalidates the cached determinant.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row * self.cols + col] = value;
        self.invalidate_determinant();
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when rows == columns, including the 0x0 matrix.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows;
        iproduct!(0..n, 0..n)
            .filter(|(i, j)| i < j)
            .all(|(i, j)| self.cells[i * n + j] == self.cells[j * n + i])
    }

    /// Prints the matrix to stdout.
    pub fn show(&self) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        // Nothing useful to do if stdout is closed.
        let _ = self.write_to(&mut lock);
    }

    /// Writes one line per row, every element followed by a tab.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    #[inline(always)]
    pub(crate) fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn invalidate_determinant(&mut self) {
        self.determinant.take();
    }
}

impl<T: Element + FromPrimitive> Matrix<T> {
    /// `rows x cols` matrix of random values in [0, 100), seeded from
    /// `config.random_seed` when set.
    pub fn random(rows: usize, cols: usize, config: &MatrixConfig) -> Result<Matrix<T>> {
        let mut matrix = Matrix::new(rows, cols);
        match config.random_seed {
            Some(seed) => matrix.fill_random_values_seeded(seed)?,
            None => matrix.fill_random_values()?,
        }
        Ok(matrix)
    }

    pub fn fill_random_values(&mut self) -> Result<()> {
        self.fill_random_values_with(&mut rand::thread_rng())
    }

    pub fn fill_random_values_seeded(&mut self, seed: u64) -> Result<()> {
        self.fill_random_values_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Overwrites every cell with an integer in [0, 100) drawn from `rng`.
    pub fn fill_random_values_with<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let cells = (0..self.cells.len())
            .map(|_| {
                let value = rng.gen_range(0..100u32);
                T::from_u32(value).ok_or(MatrixError::Conversion { value })
            })
            .collect::<Result<Vec<T>>>()?;

        self.cells = cells;
        self.invalidate_determinant();
        Ok(())
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, rhs: &Matrix<T>) -> bool {
        self.rows == rhs.rows && self.cols == rhs.cols && self.cells == rhs.cells
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for cell in self.row(i) {
                write!(f, "{}\t", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
