//! Multiplies two matrix files with the cache-blocked engine.

use anyhow::{Context, Result};
use clap::Parser;
use tilemm::Strategy;
use tilemm::cli::{BlockArgs, init_logging};
use tilemm::driver;
use tracing::debug;

fn main() -> Result<()> {
    let args = BlockArgs::parse();
    init_logging(&args.log_level);

    let config = args.block_config();
    debug!(?config, "block configuration");

    driver::run(&args.files.job(), &Strategy::Blocked(config))
        .context("blocked matrix multiplication failed")?;
    Ok(())
}
