//! The four arithmetic operations over COO matrices
//!
//! Addition and subtraction are merge-walks over the two operands' entries
//! sorted by `(row, col)`. Multiplication groups the right operand's entries
//! by row and accumulates products into a `(row, col)`-keyed map, so the
//! work done is proportional to the products that actually occur rather
//! than to the full cross product of the entry lists.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::AddAssign;

use num_traits::Num;

use crate::error::{Error, Result};
use crate::matrix::coo::{Entry, SparseMatrixCOO};

/// The operations selectable through [`apply`]
///
/// Transposition is available on the matrix directly; it is a one-operand
/// operation and is not part of the two-operand selection surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Entrywise addition
    Add,
    /// Entrywise subtraction
    Subtract,
    /// Matrix product
    Multiply,
}

/// Applies a two-operand operation to `a` and `b`, returning a fresh result
/// matrix or the dimension error the operation raised.
pub fn apply<T>(
    op: Op,
    a: &SparseMatrixCOO<T>,
    b: &SparseMatrixCOO<T>,
) -> Result<SparseMatrixCOO<T>>
where
    T: Copy + Num + AddAssign,
{
    match op {
        Op::Add => a.add(b),
        Op::Subtract => a.subtract(b),
        Op::Multiply => a.multiply(b),
    }
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num + AddAssign,
{
    /// Adds two matrices of equal dimensions.
    ///
    /// The result's entries come out sorted by `(row, col)`; entries whose
    /// sum cancels to zero are dropped.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_dimensions(other)?;
        Ok(self.merge_walk(other, |v| v))
    }

    /// Subtracts `other` from `self`; dimensions must match.
    ///
    /// Entries present only in `other` appear negated in the result, and
    /// matching keys whose difference is zero are dropped.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_dimensions(other)?;
        Ok(self.merge_walk(other, |v| T::zero() - v))
    }

    /// Returns the transpose, with dimensions swapped.
    ///
    /// Every entry goes back through the bounds-checked insertion path
    /// against the swapped bounds; that re-validation always succeeds when
    /// the source matrix's invariant holds.
    pub fn transpose(&self) -> Result<Self> {
        let mut result = Self::new(self.cols, self.rows);
        for entry in self.entries() {
            result.insert(entry.col, entry.row, entry.value)?;
        }
        Ok(result)
    }

    /// Multiplies two matrices; `self.cols` must equal `other.rows`.
    ///
    /// Accumulated products that cancel to zero do not appear in the result.
    /// The result's entry order is unspecified; the serializer sorts.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::DimensionIncompatible {
                a_rows: self.rows,
                a_cols: self.cols,
                b_rows: other.rows,
                b_cols: other.cols,
            });
        }

        // Index the right operand's entries by row, so each left entry
        // (i, j, v) only meets the row-j entries it can actually pair with.
        let mut rows_of_b: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for entry in other.entries() {
            rows_of_b
                .entry(entry.row)
                .or_default()
                .push((entry.col, entry.value));
        }

        let mut accumulator: HashMap<(usize, usize), T> = HashMap::new();
        for entry in self.entries() {
            if let Some(b_row) = rows_of_b.get(&entry.col) {
                for &(k, b_value) in b_row {
                    *accumulator
                        .entry((entry.row, k))
                        .or_insert_with(T::zero) += entry.value * b_value;
                }
            }
        }

        let mut result = Self::new(self.rows, other.cols);
        for ((row, col), value) in accumulator {
            // insert drops the zeros that accumulation cancelled out
            result.insert(row, col, value)?;
        }
        Ok(result)
    }

    fn check_same_dimensions(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::DimensionMismatch {
                a_rows: self.rows,
                a_cols: self.cols,
                b_rows: other.rows,
                b_cols: other.cols,
            });
        }
        Ok(())
    }

    /// Two-cursor merge over both operands' sorted entry copies.
    ///
    /// `rhs` transforms the right operand's value wherever it reaches the
    /// output (identity for addition, negation for subtraction). Matched
    /// keys combine as `a + rhs(b)` and are dropped when they cancel.
    fn merge_walk(&self, other: &Self, rhs: impl Fn(T) -> T) -> Self {
        let a = self.sorted_entries();
        let b = other.sorted_entries();

        let mut result = Self::new(self.rows, self.cols);
        let mut a_pos = 0;
        let mut b_pos = 0;

        while a_pos < a.len() && b_pos < b.len() {
            match a[a_pos].key().cmp(&b[b_pos].key()) {
                Ordering::Less => {
                    result.entries.push(a[a_pos]);
                    a_pos += 1;
                }
                Ordering::Greater => {
                    result.entries.push(Entry {
                        value: rhs(b[b_pos].value),
                        ..b[b_pos]
                    });
                    b_pos += 1;
                }
                Ordering::Equal => {
                    let mut combined = a[a_pos].value;
                    combined += rhs(b[b_pos].value);
                    if !combined.is_zero() {
                        result.entries.push(Entry {
                            row: a[a_pos].row,
                            col: a[a_pos].col,
                            value: combined,
                        });
                    }
                    a_pos += 1;
                    b_pos += 1;
                }
            }
        }

        result.entries.extend_from_slice(&a[a_pos..]);
        for entry in &b[b_pos..] {
            result.entries.push(Entry {
                value: rhs(entry.value),
                ..*entry
            });
        }
        result
    }
}
