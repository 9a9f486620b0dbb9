use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes `matrix` to `path`, truncating any existing file.
///
/// The buffered writer is flushed explicitly so a failed final write is
/// reported instead of being lost on drop.
pub fn save(path: impl AsRef<Path>, matrix: &Matrix) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| MatrixError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| MatrixError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write_matrix(&mut out, matrix).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "saved matrix"
    );
    Ok(())
}

/// Serializes `matrix` in the text format.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    writeln!(out, "{} {}", matrix.rows(), matrix.cols())?;
    if matrix.cols() == 0 {
        for _ in 0..matrix.rows() {
            writeln!(out)?;
        }
        return Ok(());
    }
    for row in matrix.as_slice().chunks(matrix.cols()) {
        for value in row {
            write!(out, "{value:10.4} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
