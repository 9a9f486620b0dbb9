/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. Each output cell is summed in a local
/// accumulator with `p` ascending and stored once, so C is overwritten
/// rather than accumulated into. The innermost loop walks B with stride
/// `n` (column-wise), which is what the blocked variant tries to fix.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten (C = A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut cv = 0.0;
            for p in 0..k {
                cv += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = cv;
        }
    }
}
