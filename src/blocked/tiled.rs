//! Single-threaded tiled GEMM.

use super::TileShape;

/// Cache-blocked matrix multiplication: C += A * B.
///
/// Loop nest, outermost first: row tiles, column tiles, shared tiles, then
/// rows, columns and shared elements inside the tile triple. For every
/// cell the current C value is loaded, the tile's partial dot product is
/// added with `p` ascending, and the result stored back. C is the running
/// accumulator across shared tiles, so it must be zeroed by the caller.
///
/// Because each partial sum continues from the stored value, the addition
/// order per cell is the same as in [`matmul_naive`], and the results are
/// bit-identical for every tile shape.
///
/// `tiles` should already be clamped (see [`BlockConfig::clamp`]); every
/// extent must be at least 1.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// [`matmul_naive`]: crate::matrix::naive::matmul_naive
/// [`BlockConfig::clamp`]: super::BlockConfig::clamp
pub fn matmul_blocked(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    tiles: TileShape,
) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);
    assert!(
        tiles.rows > 0 && tiles.cols > 0 && tiles.shared > 0,
        "tile extents must be positive: {tiles:?}"
    );

    for is in (0..m).step_by(tiles.rows) {
        let ie = (is + tiles.rows).min(m);
        for js in (0..n).step_by(tiles.cols) {
            let je = (js + tiles.cols).min(n);
            for ps in (0..k).step_by(tiles.shared) {
                let pe = (ps + tiles.shared).min(k);

                for i in is..ie {
                    let a_row = &a[i * k..(i + 1) * k];
                    for j in js..je {
                        let mut cv = c[i * n + j];
                        for p in ps..pe {
                            cv += a_row[p] * b[p * n + j];
                        }
                        c[i * n + j] = cv;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked::BlockConfig;

    #[test]
    fn accumulates_into_output() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let mut c = [1.0; 4];

        matmul_blocked(&a, &b, &mut c, 2, 2, 2, BlockConfig::new(1, 1, 1).clamp(2, 2, 2));

        assert_eq!(c, [20.0, 23.0, 44.0, 51.0]);
    }

    #[test]
    fn ragged_tiles_cover_every_cell() {
        // 3x5 @ 5x4 with tiles that don't divide any dimension.
        let (m, n, k) = (3, 4, 5);
        let a: Vec<f64> = (0..m * k).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 3) as f64).collect();
        let mut expected = vec![0.0; m * n];
        crate::matrix::naive::matmul_naive(&a, &b, &mut expected, m, n, k);

        let mut c = vec![0.0; m * n];
        matmul_blocked(&a, &b, &mut c, m, n, k, BlockConfig::new(2, 2, 3).clamp(m, n, k));

        assert_eq!(c, expected);
    }
}
