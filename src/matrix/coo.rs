//! Coordinate (COO) sparse matrix representation

use num_traits::Num;

use crate::error::{Error, Result};
use crate::sort::merge_sort_by_key;

/// A single stored coordinate entry
///
/// Ordering for arithmetic purposes is lexicographic by `(row, col)`; the
/// value does not participate in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T> {
    /// Row index, `0 <= row < rows`
    pub row: usize,
    /// Column index, `0 <= col < cols`
    pub col: usize,
    /// The stored value; never zero for an entry that made it into a matrix
    pub value: T,
}

impl<T> Entry<T> {
    /// The `(row, col)` sort key of this entry
    pub fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// A sparse matrix in coordinate (COO) format
///
/// Only non-zero entries are stored, as `(row, col, value)` triples. The
/// entry list is not kept sorted or deduplicated at rest; the arithmetic
/// operations sort private copies when they need ordered input, and the
/// serializer sorts before writing.
///
/// The entry list is private so that the invariant (indices in bounds,
/// values non-zero) can only be established through [`insert`].
///
/// [`insert`]: SparseMatrixCOO::insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrixCOO<T> {
    /// Number of rows in the matrix
    pub rows: usize,

    /// Number of columns in the matrix
    pub cols: usize,

    /// Stored non-zero entries, in insertion order
    pub(crate) entries: Vec<Entry<T>>,
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; bounds are fixed positive
    /// integers for the lifetime of the matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "matrix must have at least one row");
        assert!(cols > 0, "matrix must have at least one column");

        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    /// Inserts a value at `(row, col)`.
    ///
    /// Zero values are silently dropped; the coordinate representation does
    /// not store them. An out-of-bounds target fails with
    /// [`Error::OutOfRange`] so a programmatically built matrix cannot
    /// violate the bounds invariant.
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !value.is_zero() {
            self.entries.push(Entry { row, col, value });
        }
        Ok(())
    }

    /// Returns the number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns the stored entries in insertion order
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Returns a copy of the entries sorted by `(row, col)`.
    ///
    /// The stored entry list is left untouched; operations that need sorted
    /// input work on the copy, so passing the same matrix as both operands
    /// of an arithmetic operation is safe.
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut sorted = self.entries.clone();
        merge_sort_by_key(&mut sorted, Entry::key);
        sorted
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.entries.push(Entry {
                row: i,
                col: i,
                value: T::one(),
            });
        }
        matrix
    }
}
