//! Plain-text matrix files.
//!
//! Format: two unsigned integers (rows, cols) followed by `rows * cols`
//! values in row-major order. The reader accepts any whitespace between
//! tokens; the writer emits one row per line with every value printed as
//! `%10.4f` and a trailing space.

pub mod reader;
pub mod writer;

pub use reader::{load, parse_matrix};
pub use writer::{save, write_matrix};
