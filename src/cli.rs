//! Command-line arguments and logging setup for the binaries.

use crate::blocked::BlockConfig;
use crate::driver::Job;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Matrix files shared by both programs.
#[derive(clap::Args, Debug, Clone)]
pub struct Files {
    /// Input matrix A (n × m)
    #[arg(value_name = "A-FILE")]
    pub a: PathBuf,

    /// Input matrix B (m × p)
    #[arg(value_name = "B-FILE")]
    pub b: PathBuf,

    /// Output matrix C (n × p), overwritten
    #[arg(value_name = "C-FILE")]
    pub c: PathBuf,
}

impl Files {
    pub fn job(&self) -> Job {
        Job {
            a: self.a.clone(),
            b: self.b.clone(),
            c: self.c.clone(),
        }
    }
}

/// Multiply two matrix files with the naive i-j-k loop.
#[derive(Parser, Debug)]
#[command(name = "mm-simple", version, long_about = None)]
pub struct SimpleArgs {
    #[command(flatten)]
    pub files: Files,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Multiply two matrix files with the cache-blocked engine.
#[derive(Parser, Debug)]
#[command(name = "mm-block", version, long_about = None)]
pub struct BlockArgs {
    /// Tile width along the shared dimension
    #[arg(short = 'x', value_name = "X", default_value = "1")]
    pub shared: NonZeroUsize,

    /// Tile height along the rows of A
    #[arg(short = 'y', value_name = "Y", default_value = "1")]
    pub rows: NonZeroUsize,

    /// Tile width along the columns of B
    #[arg(short = 'z', value_name = "Z", default_value = "1")]
    pub cols: NonZeroUsize,

    /// Worker threads, each owning a band of row tiles
    #[arg(short = 't', value_name = "NUM_THREADS", default_value = "1")]
    pub threads: NonZeroUsize,

    #[command(flatten)]
    pub files: Files,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl BlockArgs {
    pub fn block_config(&self) -> BlockConfig {
        BlockConfig {
            shared: self.shared,
            rows: self.rows,
            cols: self.cols,
            threads: self.threads,
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn simple_needs_three_files() {
        let args = SimpleArgs::try_parse_from(["mm-simple", "a.txt", "b.txt", "c.txt"]).unwrap();
        assert_eq!(args.files.c, PathBuf::from("c.txt"));

        let err = SimpleArgs::try_parse_from(["mm-simple", "a.txt", "b.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = SimpleArgs::try_parse_from(["mm-simple", "a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn block_defaults_to_unit_tiles() {
        let args = BlockArgs::try_parse_from(["mm-block", "a", "b", "c"]).unwrap();
        assert_eq!(args.block_config(), BlockConfig::default());
    }

    #[test]
    fn block_flags() {
        let args = BlockArgs::try_parse_from([
            "mm-block", "-x", "32", "-y", "8", "-z", "16", "-t", "4", "a", "b", "c",
        ])
        .unwrap();
        assert_eq!(args.block_config(), BlockConfig::new(32, 8, 16).with_threads(4));
        assert_eq!(args.files.a, PathBuf::from("a"));
    }

    #[test]
    fn block_rejects_zero_and_negative() {
        for bad in [["-x", "0"], ["-t", "0"], ["-y", "-3"], ["-z", "many"]] {
            let argv = ["mm-block", bad[0], bad[1], "a", "b", "c"];
            assert!(BlockArgs::try_parse_from(argv).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn block_rejects_unknown_flag() {
        let err = BlockArgs::try_parse_from(["mm-block", "-q", "1", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
