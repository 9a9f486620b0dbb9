//! Naive vs cache-blocked dense matrix multiplication.
//!
//! Two strategies compute C = A × B on row-major `f64` buffers:
//!
//! - the textbook i-j-k triple loop
//! - a tiled loop nest with a configurable tile size along each of the
//!   three axes, optionally spread across threads by row tiles
//!
//! Matrices come from and go to a simple text format (see [`textfile`]),
//! and the `mm-simple` / `mm-block` binaries time the multiplication.
//!
//! ## Usage
//!
//! ```
//! use tilemm::{BlockConfig, Matrix, Strategy, multiply};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//!
//! let c = multiply(&a, &b, &Strategy::Naive).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! let tiled = Strategy::Blocked(BlockConfig::new(1, 1, 1).with_threads(2));
//! assert_eq!(multiply(&a, &b, &tiled).unwrap(), c);
//! ```

pub mod blocked;
pub mod cli;
pub mod driver;
pub mod error;
pub mod matrix;
pub mod textfile;
pub mod threaded;

pub use blocked::BlockConfig;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use matrix::naive::matmul_naive;

/// Which multiplication engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// i-j-k triple loop, overwrites C.
    Naive,
    /// Tiled loop nest, accumulates into a zeroed C.
    Blocked(BlockConfig),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Blocked(_) => "blocked",
        }
    }
}

/// Fails unless `a` (m × k) and `b` (k × n) can be multiplied.
pub fn check_compatible(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            m: a.rows(),
            k: a.cols(),
            k2: b.rows(),
            n: b.cols(),
        });
    }
    Ok(())
}

/// Matrix multiply into an existing output: C = A * B.
///
/// `c` must be `a.rows() × b.cols()` and, for [`Strategy::Blocked`],
/// zero-filled, since the blocked engine accumulates into it.
pub fn multiply_into(a: &Matrix, b: &Matrix, c: &mut Matrix, strategy: &Strategy) -> Result<()> {
    check_compatible(a, b)?;
    let (m, n, k) = (a.rows(), b.cols(), a.cols());
    if c.rows() != m || c.cols() != n {
        return Err(MatrixError::ShapeMismatch {
            rows: m,
            cols: n,
            len: c.as_slice().len(),
        });
    }

    match strategy {
        Strategy::Naive => matmul_naive(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k),
        Strategy::Blocked(config) => threaded::tiled_mt::matmul_blocked_mt(
            a.as_slice(),
            b.as_slice(),
            c.as_mut_slice(),
            m,
            n,
            k,
            config,
        ),
    }
    Ok(())
}

/// Allocates a zeroed C and computes A * B into it.
pub fn multiply(a: &Matrix, b: &Matrix, strategy: &Strategy) -> Result<Matrix> {
    check_compatible(a, b)?;
    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    multiply_into(a, b, &mut c, strategy)?;
    Ok(c)
}
