//! Multi-threaded tiled GEMM.

use crate::blocked::BlockConfig;
use crate::blocked::tiled::matmul_blocked;
use std::thread;
use tracing::debug;

/// Multi-threaded cache-blocked multiplication: C += A * B.
///
/// Splits the row tiles across `config.threads` scoped workers. Each
/// worker gets a contiguous run of whole row tiles, i.e. a band of rows of
/// A and the matching band of C, and runs the single-threaded kernel on
/// it. Tile boundaries inside a band line up with the serial run, so the
/// output is bit-identical to [`matmul_blocked`] with the same tiles.
///
/// The worker count never exceeds the number of row tiles; with one
/// worker the kernel runs on the calling thread.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_blocked_mt(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    config: &BlockConfig,
) {
    let tiles = config.clamp(m, n, k);
    if m == 0 || n == 0 || k == 0 {
        return;
    }

    let row_tiles = m.div_ceil(tiles.rows);
    let workers = config.threads.get().min(row_tiles);

    if workers == 1 {
        matmul_blocked(a, b, c, m, n, k, tiles);
        return;
    }

    let rows_per_worker = row_tiles.div_ceil(workers) * tiles.rows;
    debug!(workers, rows_per_worker, ?tiles, "partitioning row tiles");

    thread::scope(|s| {
        for (band, c_band) in c.chunks_mut(rows_per_worker * n).enumerate() {
            let row_start = band * rows_per_worker;
            let band_rows = c_band.len() / n;
            let a_band = &a[row_start * k..(row_start + band_rows) * k];

            s.spawn(move || {
                matmul_blocked(a_band, b, c_band, band_rows, n, k, tiles);
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_threads_than_row_tiles() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];

        let cfg = BlockConfig::new(1, 1, 1).with_threads(16);
        matmul_blocked_mt(&a, &b, &mut c, 2, 2, 2, &cfg);

        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn empty_shared_dimension_leaves_output_zero() {
        let mut c = vec![0.0; 6];
        let cfg = BlockConfig::new(4, 4, 4).with_threads(3);
        matmul_blocked_mt(&[], &[], &mut c, 2, 3, 0, &cfg);
        assert_eq!(c, vec![0.0; 6]);
    }
}
