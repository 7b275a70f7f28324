//! Error types for coomat

use thiserror::Error;

/// Result type alias using coomat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing the interchange format or
/// operating on matrices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A header or body line that does not follow the interchange format
    #[error("invalid format: {reason}")]
    Format {
        /// What was wrong with the input
        reason: String,
    },

    /// A token the integer lexer rejected
    #[error("token {token:?} is not an integer")]
    NotAnInteger {
        /// The offending token
        token: String,
    },

    /// A token containing a `.`, treated as an unrecoverable malformed literal
    #[error("malformed numeric literal {token:?}")]
    MalformedLiteral {
        /// The offending token
        token: String,
    },

    /// Addition/subtraction operands with differing dimensions
    #[error("dimension mismatch: {a_rows}x{a_cols} vs {b_rows}x{b_cols}")]
    DimensionMismatch {
        /// Left operand rows
        a_rows: usize,
        /// Left operand columns
        a_cols: usize,
        /// Right operand rows
        b_rows: usize,
        /// Right operand columns
        b_cols: usize,
    },

    /// Multiplication operands whose inner dimensions disagree
    #[error("incompatible dimensions for multiplication: {a_rows}x{a_cols} * {b_rows}x{b_cols}")]
    DimensionIncompatible {
        /// Left operand rows
        a_rows: usize,
        /// Left operand columns
        a_cols: usize,
        /// Right operand rows
        b_rows: usize,
        /// Right operand columns
        b_cols: usize,
    },

    /// An insertion target outside the declared bounds
    #[error("entry ({row}, {col}) outside a {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Declared row bound
        rows: usize,
        /// Declared column bound
        cols: usize,
    },

    /// An underlying I/O failure while reading or writing a file
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
