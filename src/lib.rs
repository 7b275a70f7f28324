//! # coomat: coordinate-format sparse matrix arithmetic
//!
//! coomat stores matrices as lists of `(row, col, value)` triples and
//! implements exactly four operations over that representation: addition,
//! subtraction, multiplication, and transposition. Matrices are read from
//! and written to a small plaintext interchange format whose signed-integer
//! literals use `#` as the sign marker.
//!
//! ## Components
//!
//! - **Lexer** ([`lex_integer`]): signed-integer tokens with the format's
//!   sign-marker convention, including two deliberately preserved quirks
//!   documented in [`lexer`].
//! - **Tokenizer** ([`split_on`], [`triple_fields`]): header lines and
//!   parenthesized triples.
//! - **Merge sort** ([`merge_sort_by_key`]): the stable sort that orders
//!   entries by `(row, col)` before the arithmetic merge-walks.
//! - **Matrix engine** ([`SparseMatrixCOO`]): bounds-checked insertion and
//!   the four operations; addition and subtraction are two-cursor
//!   merge-walks, multiplication groups the right operand by row.
//!
//! The engine is a pure library: it never prints, and operations never
//! mutate their operands (sorting happens on private copies, so a matrix
//! may safely be passed as both operands).
//!
//! ## Usage
//!
//! ```
//! use coomat::{apply, Op, SparseMatrixCOO};
//!
//! let mut a = SparseMatrixCOO::new(2, 2);
//! a.insert(0, 0, 1i64)?;
//! a.insert(1, 1, 2)?;
//!
//! let mut b = SparseMatrixCOO::new(2, 2);
//! b.insert(0, 0, 3i64)?;
//!
//! let sum = apply(Op::Add, &a, &b)?;
//! assert_eq!(sum.nnz(), 2);
//! # Ok::<(), coomat::Error>(())
//! ```

pub mod error;
pub mod io;
pub mod lexer;
pub mod matrix;
pub mod sort;
pub mod tokenize;

// Re-export primary components
pub use error::{Error, Result};
pub use io::{read_matrix, read_matrix_file, write_matrix, write_matrix_file, Ingested};
pub use lexer::{lex_integer, LexError, SIGN_MARKER};
pub use matrix::{apply, Entry, Op, SparseMatrixCOO};
pub use sort::merge_sort_by_key;
pub use tokenize::{split_on, triple_fields};

/// Version information for the coomat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
