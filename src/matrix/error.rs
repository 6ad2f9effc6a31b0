//! Error types for matrix operations

use thiserror::Error;

/// Result type alias using [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur in matrix operations
///
/// Failed operations never mutate their operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation
    #[error("Dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape as (rows, cols)
        lhs: (usize, usize),
        /// Right-hand side shape as (rows, cols)
        rhs: (usize, usize),
    },

    /// Element access outside of the matrix
    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Scalar division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// The determinant is zero, so no inverse exists
    #[error("Matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// Operation requires a square matrix
    #[error("Operation '{op}' requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// A generated value does not fit the element type
    #[error("Value {value} cannot be represented by the element type")]
    Conversion { value: u32 },
}
