//! Load → multiply → store, shared by both binaries.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Strategy, check_compatible, multiply_into, textfile};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Input and output paths of one run.
#[derive(Debug, Clone)]
pub struct Job {
    pub a: PathBuf,
    pub b: PathBuf,
    pub c: PathBuf,
}

/// Runs one multiplication job.
///
/// Loads A and B, rejects incompatible shapes, multiplies into a fresh
/// zeroed C, prints the timing line, then writes C. Only the multiply call
/// is timed. Returns the measured duration.
pub fn run(job: &Job, strategy: &Strategy) -> Result<Duration> {
    let a = textfile::load(&job.a)?;
    let b = textfile::load(&job.b)?;
    check_compatible(&a, &b)?;

    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    info!(
        strategy = strategy.name(),
        m = a.rows(),
        k = a.cols(),
        n = b.cols(),
        "multiplying"
    );

    let start = Instant::now();
    multiply_into(&a, &b, &mut c, strategy)?;
    let elapsed = start.elapsed();

    println!("{}", format_elapsed(elapsed));

    textfile::save(&job.c, &c)?;
    info!(path = %job.c.display(), "wrote result");
    Ok(elapsed)
}

/// The single line printed after a successful multiplication.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Matrix operation time: {:.4}s", elapsed.as_secs_f64())
}
