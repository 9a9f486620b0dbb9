use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("{}: malformed header: {reason}", .path.display())]
    Header { path: PathBuf, reason: String },
    #[error("{}: invalid value {token:?} at element {index}", .path.display())]
    InvalidValue {
        path: PathBuf,
        index: usize,
        token: String,
    },
    #[error("{}: expected {expected} values, found {found}", .path.display())]
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("cannot allocate a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },
    #[error("buffer of {len} elements does not hold a {rows}x{cols} matrix")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
