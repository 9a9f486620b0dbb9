use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, alloc_buffer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loads a matrix from a text file.
///
/// The file is opened, read completely and closed before parsing. Values
/// beyond the `rows * cols` announced by the header are ignored.
pub fn load(path: impl AsRef<Path>) -> Result<Matrix> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| MatrixError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| MatrixError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let matrix = parse_matrix(&text, path)?;
    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Parses the text format. `origin` is only used in error messages.
pub fn parse_matrix(text: &str, origin: &Path) -> Result<Matrix> {
    let mut tokens = text.split_whitespace();

    let rows = parse_dimension(tokens.next(), "row count", origin)?;
    let cols = parse_dimension(tokens.next(), "column count", origin)?;

    let mut data = alloc_buffer(rows, cols)?;
    let expected = rows * cols;

    for index in 0..expected {
        let Some(token) = tokens.next() else {
            return Err(MatrixError::Truncated {
                path: origin.to_path_buf(),
                expected,
                found: index,
            });
        };
        let value = token
            .parse::<f64>()
            .map_err(|_| MatrixError::InvalidValue {
                path: origin.to_path_buf(),
                index,
                token: token.to_string(),
            })?;
        data.push(value);
    }

    Matrix::from_vec(rows, cols, data)
}

fn parse_dimension(token: Option<&str>, what: &str, origin: &Path) -> Result<usize> {
    let header = |reason: String| MatrixError::Header {
        path: origin.to_path_buf(),
        reason,
    };
    let token = token.ok_or_else(|| header(format!("missing {what}")))?;
    token
        .parse::<usize>()
        .map_err(|e| header(format!("invalid {what} {token:?}: {e}")))
}
