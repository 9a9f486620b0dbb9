//! Multiplies two matrix files with the naive i-j-k loop.

use anyhow::{Context, Result};
use clap::Parser;
use tilemm::Strategy;
use tilemm::cli::{SimpleArgs, init_logging};
use tilemm::driver;

fn main() -> Result<()> {
    let args = SimpleArgs::parse();
    init_logging(&args.log_level);

    driver::run(&args.files.job(), &Strategy::Naive)
        .context("naive matrix multiplication failed")?;
    Ok(())
}
