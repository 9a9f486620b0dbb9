//! Cache-blocked GEMM.
//!
//! The three loop dimensions (rows of A, columns of B, shared dimension)
//! are cut into tiles so the active pieces of A, B and C stay in cache.
//! Tile sizes are a tuning knob; nothing here derives them from the cache
//! hierarchy.
//!
//! - `tiled`: the single-threaded blocked kernel
//! - [`BlockConfig`]: tile sizes and thread count as given on the command line

pub mod tiled;

use std::num::NonZeroUsize;

const ONE: NonZeroUsize = NonZeroUsize::MIN;

/// Tiling options for the blocked engine.
///
/// Field names follow the loop axis they bound. On the command line they
/// are `-x` (shared), `-y` (rows), `-z` (cols) and `-t` (threads).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockConfig {
    /// Tile width along the shared dimension (`-x`).
    pub shared: NonZeroUsize,
    /// Tile height along the rows of A and C (`-y`).
    pub rows: NonZeroUsize,
    /// Tile width along the columns of B and C (`-z`).
    pub cols: NonZeroUsize,
    /// Worker threads the row tiles are spread over (`-t`).
    pub threads: NonZeroUsize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            shared: ONE,
            rows: ONE,
            cols: ONE,
            threads: ONE,
        }
    }
}

impl BlockConfig {
    /// Convenience constructor for tests and benches. Zero means 1.
    pub fn new(shared: usize, rows: usize, cols: usize) -> Self {
        let nz = |v: usize| NonZeroUsize::new(v).unwrap_or(ONE);
        Self {
            shared: nz(shared),
            rows: nz(rows),
            cols: nz(cols),
            threads: ONE,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = NonZeroUsize::new(threads).unwrap_or(ONE);
        self
    }

    /// Clamps each tile size to its matrix dimension for an (m × k) @ (k × n)
    /// product. A zero dimension still yields a tile of 1 so the tile loops
    /// always make progress.
    pub fn clamp(&self, m: usize, n: usize, k: usize) -> TileShape {
        TileShape {
            rows: self.rows.get().min(m).max(1),
            cols: self.cols.get().min(n).max(1),
            shared: self.shared.get().min(k).max(1),
        }
    }
}

/// Tile extents after clamping, ready for the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileShape {
    pub rows: usize,
    pub cols: usize,
    pub shared: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one() {
        let cfg = BlockConfig::default();
        assert_eq!(cfg, BlockConfig::new(1, 1, 1));
        assert_eq!(cfg.threads.get(), 1);
    }

    #[test]
    fn clamp_to_dimensions() {
        let cfg = BlockConfig::new(64, 8, 1000);
        let tiles = cfg.clamp(5, 300, 16);
        assert_eq!(
            tiles,
            TileShape {
                rows: 5,
                cols: 300,
                shared: 16
            }
        );
    }

    #[test]
    fn clamp_keeps_smaller_tiles() {
        let tiles = BlockConfig::new(4, 2, 3).clamp(10, 10, 10);
        assert_eq!((tiles.rows, tiles.cols, tiles.shared), (2, 3, 4));
    }

    #[test]
    fn clamp_on_empty_dimension_stays_positive() {
        let tiles = BlockConfig::new(8, 8, 8).clamp(0, 0, 0);
        assert_eq!((tiles.rows, tiles.cols, tiles.shared), (1, 1, 1));
    }

    #[test]
    fn zero_thread_request_means_one() {
        assert_eq!(BlockConfig::default().with_threads(0).threads.get(), 1);
        assert_eq!(BlockConfig::default().with_threads(6).threads.get(), 6);
    }
}
