//! Conversions to and from external matrix representations

use ndarray::Array2;
use num_traits::Num;
use sprs::TriMat;

use crate::error::Result;
use crate::matrix::coo::SparseMatrixCOO;

impl<T: Copy + Num> SparseMatrixCOO<T> {
    /// Converts this matrix to an sprs triplet matrix
    pub fn to_sprs_tri(&self) -> TriMat<T> {
        let mut tri = TriMat::new((self.rows, self.cols));
        for entry in self.entries() {
            tri.add_triplet(entry.row, entry.col, entry.value);
        }
        tri
    }

    /// Converts an sprs triplet matrix to our COO format
    ///
    /// Zero-valued triplets are dropped on the way in, matching the
    /// insertion invariant.
    pub fn from_sprs_tri(tri: &TriMat<T>) -> Result<Self> {
        let mut matrix = Self::new(tri.rows(), tri.cols());
        for (value, (row, col)) in tri.triplet_iter() {
            matrix.insert(row, col, *value)?;
        }
        Ok(matrix)
    }

    /// Materializes the matrix densely.
    ///
    /// Duplicate coordinates accumulate, so the dense view reflects the
    /// matrix's arithmetic meaning even when the entry list holds several
    /// triples for one position.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.rows, self.cols));
        for entry in self.entries() {
            dense[[entry.row, entry.col]] = dense[[entry.row, entry.col]] + entry.value;
        }
        dense
    }
}
