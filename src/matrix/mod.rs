// Matrix data structures and operations

pub mod conversion;
pub mod coo;
pub mod ops;

pub use coo::{Entry, SparseMatrixCOO};
pub use ops::{apply, Op};
