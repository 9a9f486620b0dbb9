//! Multi-threaded blocked GEMM.
//!
//! Wraps the tiled kernel with parallel execution across row tiles. Each
//! worker owns a disjoint band of C rows, so no cell is ever written by
//! two threads and the kernel needs no synchronization.
//!
//! - `tiled_mt`: row-tile partitioned [`matmul_blocked`](crate::blocked::tiled::matmul_blocked)

pub mod tiled_mt;
