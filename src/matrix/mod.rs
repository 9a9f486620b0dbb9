//! Row-major matrix storage and the naive reference multiplication.
//!
//! The naive kernel is the correctness baseline that the blocked and
//! threaded variants are compared against.

pub mod naive;

use crate::error::{MatrixError, Result};

/// A dense `rows × cols` matrix of `f64` stored row-major.
///
/// Element (i, j) lives at offset `i * cols + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocates a zero-filled matrix.
    ///
    /// Fails with [`MatrixError::Allocation`] when `rows * cols` overflows or
    /// the allocator refuses the request.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let mut data = alloc_buffer(rows, cols)?;
        data.resize(rows * cols, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Builds the `size × size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        let mut id = Self::zeros(size, size)?;
        for i in 0..size {
            id.data[i * size + i] = 1.0;
        }
        Ok(id)
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use tilemm::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0,
    ///                                     4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.get(1, 2), 6.0);
    /// assert!(Matrix::from_vec(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element (i, j). Panics if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "({i}, {j}) out of bounds");
        self.data[i * self.cols + j]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

/// Reserves room for `rows * cols` values without panicking on failure.
pub(crate) fn alloc_buffer(rows: usize, cols: usize) -> Result<Vec<f64>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::Allocation { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { rows, cols })?;
    Ok(data)
}
